mod in_memory_type_catalog_tests;
mod type_lineage_tests;
