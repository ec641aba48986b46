use crate::core::{FeedbackTiming, Messages};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/contact";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub restore_delay_ms: u64,
    pub clear_delay_ms: u64,
    /// 不設定時不逾時
    pub request_timeout_seconds: Option<u64>,
    pub messages: Messages,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let timing = FeedbackTiming::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            restore_delay_ms: timing.restore_delay.as_millis() as u64,
            clear_delay_ms: timing.clear_delay.as_millis() as u64,
            request_timeout_seconds: None,
            messages: Messages::default(),
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContactError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContactError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_ENDPOINT})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContactError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timing(&self) -> FeedbackTiming {
        FeedbackTiming {
            restore_delay: Duration::from_millis(self.restore_delay_ms),
            clear_delay: Duration::from_millis(self.clear_delay_ms),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;

        if let Some(timeout) = self.request_timeout_seconds {
            validate_positive_number("request_timeout_seconds", timeout, 1)?;
        }

        validate_non_empty_string("messages.loading", &self.messages.loading)?;
        validate_non_empty_string("messages.success", &self.messages.success)?;
        validate_non_empty_string("messages.error", &self.messages.error)?;
        validate_non_empty_string("messages.server_fallback", &self.messages.server_fallback)?;

        Ok(())
    }
}
