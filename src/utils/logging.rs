//! Logging utilities
//!
//! Standard log lines and logger setup.

use std::fmt::Display;

/// Initialise `env_logger`, honouring `RUST_LOG` and falling back to
/// `default_filter`
pub fn init_logger(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Initialise a logger for tests; safe to call more than once
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Log a value that did not match its declared shape and was kept untyped
///
/// # Arguments
/// * `path` - Location of the value
/// * `expected` - The declared shape
/// * `found` - The shape that was found
pub fn log_fallback(path: &dyn Display, expected: &str, found: &str) {
    log::warn!("{path}: expected {expected}, found {found}; keeping it as untyped data");
}

/// Log a finished hydration with consistent format
pub fn log_hydrated(type_name: &str, fields: usize, source: &str) {
    log::info!("Hydrated {type_name} with {fields} field(s) from {source}");
}
