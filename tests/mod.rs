//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

mod random;
mod textbook;

/// Route log output of the solver to the test harness.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
