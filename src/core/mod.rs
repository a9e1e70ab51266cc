// logslice - core/mod.rs
//
// Core extraction logic: alignment, binary search, and emission over a raw
// byte view of the log file.
// Must NOT depend on: app, platform, or any I/O crate directly.

pub mod aligner;
pub mod extract;
pub mod locator;
pub mod model;
