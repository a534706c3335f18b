mod docblock_token_kind_tests;
mod docblock_token_tests;
