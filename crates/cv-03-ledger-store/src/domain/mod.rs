//! Domain layer: pure types with no engine or I/O dependencies.

pub mod change_log;
pub mod config;
pub mod errors;
