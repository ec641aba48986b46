use crate::domain::model::{ContactRequest, Feedback};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 表單頁面（DOM）需要提供的操作
pub trait FormView: Send + 'static {
    /// 取得指定 id 輸入欄位的值，找不到的欄位視為空字串
    fn field_value(&self, id: &str) -> String;
    fn reset_fields(&mut self);

    fn button_label(&self) -> String;
    fn set_button_label(&mut self, label: &str);
    fn is_button_disabled(&self) -> bool;
    fn set_button_disabled(&mut self, disabled: bool);

    fn feedback(&self) -> Option<&Feedback>;
    fn render_feedback(&mut self, feedback: Feedback);
    fn clear_feedback(&mut self);
}

#[async_trait]
pub trait ContactClient: Send + Sync {
    /// 送出一次請求；2xx 回傳解析後的 JSON body
    async fn send(&self, request: &ContactRequest) -> Result<serde_json::Value>;
}
