//! SQLite-backed stores for the API resources
//!
//! Read paths return `Result` and leave the degrade-to-sample policy to the
//! HTTP handlers; write paths validate and propagate hard errors.

pub mod names;
pub mod releases;

pub use names::NameTable;
