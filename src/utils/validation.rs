use crate::utils::error::{BridgeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Logcat rejects tags longer than this on Android releases before API 26.
pub const MAX_LOG_TAG_LEN: usize = 23;

pub fn validate_log_tag(field_name: &str, tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(BridgeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "Log tag cannot be empty".to_string(),
        });
    }

    if tag.chars().any(char::is_whitespace) {
        return Err(BridgeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "Log tag cannot contain whitespace".to_string(),
        });
    }

    if tag.len() > MAX_LOG_TAG_LEN {
        return Err(BridgeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: format!("Log tag cannot exceed {} bytes", MAX_LOG_TAG_LEN),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_log_tag() {
        assert!(validate_log_tag("log_tag", "NativeBridge").is_ok());
        assert!(validate_log_tag("log_tag", "").is_err());
        assert!(validate_log_tag("log_tag", "Native Bridge").is_err());
        assert!(validate_log_tag("log_tag", "ATagThatIsMuchTooLongForLogcat").is_err());
    }

    #[test]
    fn test_validate_log_tag_boundary() {
        let at_limit = "a".repeat(MAX_LOG_TAG_LEN);
        assert!(validate_log_tag("log_tag", &at_limit).is_ok());

        let over_limit = "a".repeat(MAX_LOG_TAG_LEN + 1);
        assert!(validate_log_tag("log_tag", &over_limit).is_err());
    }
}
