//! Integration tests for speedcheck.

mod util;

mod arg_tests;
mod invalid_config_tests;
