// logslice - platform/mod.rs
//
// Platform-specific concerns: config directory resolution and config.toml.

pub mod config;
