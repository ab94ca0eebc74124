use crate::utils::error::Result;
use crate::utils::validation::{validate_log_tag, Validate};
use serde::{Deserialize, Serialize};

/// Settings for the native side of the bridge.
///
/// The library runs with [`BridgeConfig::default`] when loaded via
/// `System.loadLibrary`; callers that want different logging can hand a
/// JSON document to [`BridgeConfig::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Logcat tag used for every line this library emits on Android.
    pub log_tag: String,

    /// Maximum level that reaches the platform logger.
    pub log_level: LogLevel,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_tag: "NativeBridge".to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl BridgeConfig {
    /// Parses and validates a config from its JSON representation. Missing
    /// fields fall back to the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for BridgeConfig {
    fn validate(&self) -> Result<()> {
        validate_log_tag("log_tag", &self.log_tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
