mod utils;

mod extractor_tests;
