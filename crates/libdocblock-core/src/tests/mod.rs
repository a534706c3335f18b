mod docblock_reader_tests;
mod target_set_tests;
