// logslice - app/mod.rs
//
// Application layer: mediates between the pure core and the filesystem.

pub mod runner;
