mod output_utils_tests;
mod source_scan_tests;
