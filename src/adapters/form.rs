use crate::core::{Feedback, FormView, DEFAULT_BUTTON_LABEL, FEEDBACK_ID, FIELD_IDS, FORM_ID};
use std::collections::HashMap;

/// 記憶體中的表單，欄位 id 與頁面上的 DOM 一致
#[derive(Debug, Clone)]
pub struct InMemoryForm {
    id: String,
    fields: HashMap<String, String>,
    button_label: String,
    button_disabled: bool,
    feedback: Option<Feedback>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self {
            id: FORM_ID.to_string(),
            fields: FIELD_IDS
                .iter()
                .map(|id| (id.to_string(), String::new()))
                .collect(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            button_disabled: false,
            feedback: None,
        }
    }

    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 設定欄位值，表單上沒有的 id 會被忽略
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(id) {
            *field = value.into();
        } else {
            tracing::warn!("Form '{}' has no input with id '{}'", self.id, id);
        }
    }

    /// 回饋區塊目前顯示的內容
    pub fn feedback_html(&self) -> String {
        self.feedback
            .as_ref()
            .map(Feedback::to_html)
            .unwrap_or_default()
    }

    pub fn all_fields_empty(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }
}

impl Default for InMemoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for InMemoryForm {
    fn field_value(&self, id: &str) -> String {
        self.fields.get(id).cloned().unwrap_or_default()
    }

    fn reset_fields(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    fn button_label(&self) -> String {
        self.button_label.clone()
    }

    fn set_button_label(&mut self, label: &str) {
        self.button_label = label.to_string();
    }

    fn is_button_disabled(&self) -> bool {
        self.button_disabled
    }

    fn set_button_disabled(&mut self, disabled: bool) {
        self.button_disabled = disabled;
    }

    fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    fn render_feedback(&mut self, feedback: Feedback) {
        tracing::debug!("#{} <- {}", FEEDBACK_ID, feedback.to_html());
        self.feedback = Some(feedback);
    }

    fn clear_feedback(&mut self) {
        self.feedback = None;
    }
}
