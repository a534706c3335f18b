mod type_metadata_describe_tests;
