mod import_table_tests;
