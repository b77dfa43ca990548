//! Common functions used across test cases.

pub mod fixtures;
pub mod mock;
pub mod paths;

/// Route `log` records to the test output. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
