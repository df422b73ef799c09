#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]

mod integration {
    mod gate_flow_tests;
}
