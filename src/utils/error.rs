use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Server rejected contact request with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    ServerRejection { status: u16, detail: Option<String> },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ContactError {
    /// 給使用者看的錯誤訊息：伺服器提供的 detail，沒有就用預設訊息
    pub fn message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ContactError::ServerRejection {
                detail: Some(detail),
                ..
            } => detail,
            _ => fallback,
        }
    }

    /// 提交過程中的錯誤（相對於配置錯誤）
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            ContactError::ServerRejection { .. }
                | ContactError::Transport(_)
                | ContactError::InvalidBody(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_prefers_server_detail() {
        let err = ContactError::ServerRejection {
            status: 400,
            detail: Some("Invalid email".to_string()),
        };
        assert_eq!(err.message("fallback"), "Invalid email");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_message_falls_back() {
        let err = ContactError::ServerRejection {
            status: 500,
            detail: None,
        };
        assert_eq!(err.message("fallback"), "fallback");

        let err = ContactError::InvalidBody("expected value".to_string());
        assert_eq!(err.message("fallback"), "fallback");
        assert!(err.is_submission_failure());
    }

    #[test]
    fn test_config_errors_are_not_submission_failures() {
        let err = ContactError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_submission_failure());
    }
}
