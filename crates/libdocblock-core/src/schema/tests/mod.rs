mod schema_store_tests;
