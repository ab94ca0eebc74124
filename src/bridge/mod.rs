//! JNI surface of the library.
//!
//! Exported symbols follow the `Java_<package>_<class>_<method>` convention
//! for `com.ashasuresh.edgedetectionviewer.NativeBridge`. Nothing in this
//! module may let a panic unwind across the `extern "system"` boundary.
#![allow(non_snake_case)]

use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};

use jni::objects::JObject;
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};

use crate::config::BridgeConfig;
use crate::core::{native_greeting, VERSION};
use crate::utils::error::Result;
use crate::utils::logger;

/// Called by the VM when the app runs `System.loadLibrary("native_lib")`.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logger::init(&BridgeConfig::default());
    tracing::info!("native bridge loaded, version {}", VERSION);
    JNI_VERSION_1_6
}

/// `external fun stringFromJNI(): String` on the Kotlin side.
///
/// Returns the fixed diagnostic greeting. The only failure mode is the VM
/// refusing to allocate the return value; that surfaces to the caller as a
/// pending `RuntimeException` and a null return.
#[no_mangle]
pub extern "system" fn Java_com_ashasuresh_edgedetectionviewer_NativeBridge_stringFromJNI<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    match panic::catch_unwind(AssertUnwindSafe(|| greeting_string(&mut env))) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            tracing::error!("stringFromJNI failed: {err}");
            throw_runtime_exception(&mut env, &err.to_string());
            std::ptr::null_mut()
        }
        Err(_) => {
            tracing::error!("stringFromJNI panicked");
            throw_runtime_exception(&mut env, "panic in native bridge");
            std::ptr::null_mut()
        }
    }
}

fn greeting_string(env: &mut JNIEnv<'_>) -> Result<jstring> {
    tracing::debug!("stringFromJNI invoked");
    let value = env.new_string(native_greeting())?;
    Ok(value.into_raw())
}

/// Raises a pending `RuntimeException` in the caller. A failed throw (an
/// exception may already be pending) is logged and swallowed.
fn throw_runtime_exception(env: &mut JNIEnv<'_>, message: &str) {
    if let Err(err) = env.throw_new("java/lang/RuntimeException", message) {
        tracing::error!("failed to raise RuntimeException: {err}");
    }
}
