//! Integration tests for the chia binary

mod helpers;
mod test_checks;
mod test_config;
mod test_language;
