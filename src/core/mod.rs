//! Platform-independent behavior behind the native bridge.

/// Diagnostic greeting handed back by `NativeBridge.stringFromJNI`.
pub const NATIVE_GREETING: &str = "Hello from native C++";

/// Library version, reported in the load-time log line.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the diagnostic greeting marshalled across the JNI boundary.
///
/// No side effects, never fails, safe to call from any thread the host
/// runtime uses.
pub fn native_greeting() -> &'static str {
    NATIVE_GREETING
}
