mod docblock_token_stream_tests;
pub(crate) mod utils;
