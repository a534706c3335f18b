mod str_docblock_token_source_position_tests;
mod str_docblock_token_source_proptests;
