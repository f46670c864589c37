//! Integration tests for html-extractor

mod helpers;

mod analyze_test;
mod batch_test;
mod cli_test;
mod extract_test;
