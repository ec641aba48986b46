use crate::utils::error::ContactError;
use serde::{Deserialize, Serialize};

pub const FORM_ID: &str = "whatsapp-form";
pub const FEEDBACK_ID: &str = "form-feedback";

pub const FIELD_NAME: &str = "nome";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "telefone";
pub const FIELD_COMPANY: &str = "empresa";

/// 表單上的四個輸入欄位 id，順序與請求 body 一致
pub const FIELD_IDS: [&str; 4] = [FIELD_NAME, FIELD_EMAIL, FIELD_PHONE, FIELD_COMPANY];

pub const DEFAULT_BUTTON_LABEL: &str = "Enviar";
pub const LOADING_LABEL: &str = r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span> Enviando..."#;
pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";
pub const ERROR_MESSAGE: &str = "Houve um erro ao enviar sua mensagem. Por favor, tente novamente.";
pub const SERVER_FALLBACK_MESSAGE: &str = "Ocorreu um erro no servidor.";

/// 每次提交時從表單欄位組出來的請求，送出後即丟棄
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "empresa")]
    pub company: String,
}

/// 顯示給使用者的文字，可由配置檔覆寫
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub loading: String,
    pub success: String,
    pub error: String,
    pub server_fallback: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            loading: LOADING_LABEL.to_string(),
            success: SUCCESS_MESSAGE.to_string(),
            error: ERROR_MESSAGE.to_string(),
            server_fallback: SERVER_FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn is_success(&self) -> bool {
        matches!(self, Feedback::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Feedback::Success(message) | Feedback::Error(message) => message,
        }
    }

    /// 回饋區塊中的 Bootstrap alert 標記
    pub fn to_html(&self) -> String {
        let class = match self {
            Feedback::Success(_) => "alert-success",
            Feedback::Error(_) => "alert-danger",
        };
        format!(r#"<div class="alert {}">{}</div>"#, class, self.message())
    }
}

/// 表單送出事件
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// 伺服器回應 2xx，內容為解析後的 JSON
    Sent(serde_json::Value),
    Failed(ContactError),
    /// 上一次提交還沒恢復，這次不發請求
    Busy,
    /// handler 沒有掛在表單上
    Detached,
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent(_))
    }

    pub fn error(&self) -> Option<&ContactError> {
        match self {
            SubmitOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_request_wire_keys() {
        let request = ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "".to_string(),
            company: "ACME".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "nome": "Ana",
                "email": "ana@example.com",
                "telefone": "",
                "empresa": "ACME"
            })
        );
    }

    #[test]
    fn test_feedback_html() {
        let success = Feedback::Success("ok".to_string());
        assert_eq!(success.to_html(), r#"<div class="alert alert-success">ok</div>"#);
        assert!(success.is_success());

        let error = Feedback::Error("nope".to_string());
        assert!(error.to_html().contains("alert-danger"));
        assert!(!error.is_success());
    }

    #[test]
    fn test_submit_event_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
