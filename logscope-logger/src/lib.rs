//! Logging setup shared by the logscope binaries.
//!
//! Library crates only emit `tracing` events; this crate decides where they go.
mod logging;

pub use logging::{init, LogConfig, LogFormat, LogOutput};
