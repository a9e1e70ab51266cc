// logslice - util/mod.rs
//
// Shared utilities: constants, error types, logging.

pub mod constants;
pub mod error;
pub mod logging;
