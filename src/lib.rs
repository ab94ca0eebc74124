//! Native library backing the EdgeDetectionViewer Android app.
//!
//! The JNI surface lives in [`bridge`]; everything else is plain Rust that
//! builds and tests on the host with no JVM attached.

pub mod bridge;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{BridgeConfig, LogLevel};
pub use crate::core::{native_greeting, NATIVE_GREETING, VERSION};
pub use crate::utils::error::{BridgeError, Result};
