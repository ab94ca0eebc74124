use std::sync::Once;

use crate::config::BridgeConfig;

static INIT: Once = Once::new();

/// Installs the platform logger. Safe to call more than once; only the
/// first call has any effect.
pub fn init(config: &BridgeConfig) {
    INIT.call_once(|| init_platform(config));
}

/// Routes `tracing` events to logcat through the `log` facade; no tracing
/// subscriber is installed on-device.
#[cfg(target_os = "android")]
fn init_platform(config: &BridgeConfig) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log_filter(config.log_level))
            .with_tag(config.log_tag.as_str()),
    );
}

#[cfg(target_os = "android")]
fn log_filter(level: crate::config::LogLevel) -> log::LevelFilter {
    use crate::config::LogLevel;

    match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warn => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
        LogLevel::Trace => log::LevelFilter::Trace,
    }
}

#[cfg(not(target_os = "android"))]
fn init_platform(config: &BridgeConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("native_lib={}", config.log_level.as_str()))
    });

    // try_init: the test harness may have installed a subscriber already.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .ok();
}
