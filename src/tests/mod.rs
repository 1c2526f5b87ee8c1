mod address_tests;
mod config_tests;
mod logging_tests;
