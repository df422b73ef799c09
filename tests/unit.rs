#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]

mod unit {
    mod config_tests;
    mod error_tests;
    mod model_tests;
    mod outcome_tests;
    mod schedule_tests;
    mod secret_tests;
}
