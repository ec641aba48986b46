use crate::core::{
    ContactClient, ContactRequest, Feedback, FormView, Messages, SubmitEvent, SubmitOutcome,
    FIELD_COMPANY, FIELD_EMAIL, FIELD_NAME, FIELD_PHONE,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub const RESTORE_DELAY: Duration = Duration::from_millis(2000);
pub const CLEAR_DELAY: Duration = Duration::from_millis(4000);

/// 結果出來之後的兩段延遲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTiming {
    /// 結果出來到按鈕恢復
    pub restore_delay: Duration,
    /// 按鈕恢復到清除成功訊息
    pub clear_delay: Duration,
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            restore_delay: RESTORE_DELAY,
            clear_delay: CLEAR_DELAY,
        }
    }
}

/// 一次提交的結果，以及負責延遲恢復畫面的背景任務
#[derive(Debug)]
pub struct Submission {
    outcome: SubmitOutcome,
    reset: Option<JoinHandle<()>>,
}

impl Submission {
    fn immediate(outcome: SubmitOutcome) -> Self {
        Self {
            outcome,
            reset: None,
        }
    }

    pub fn outcome(&self) -> &SubmitOutcome {
        &self.outcome
    }

    pub fn into_outcome(self) -> SubmitOutcome {
        self.outcome
    }

    /// 等延遲恢復跑完再回傳結果
    pub async fn wait_for_reset(self) -> SubmitOutcome {
        if let Some(reset) = self.reset {
            if let Err(e) = reset.await {
                tracing::warn!("Feedback reset task did not complete: {}", e);
            }
        }
        self.outcome
    }
}

pub struct FormSubmissionHandler<V: FormView, C: ContactClient> {
    view: Arc<Mutex<V>>,
    client: C,
    messages: Messages,
    timing: FeedbackTiming,
    attached: AtomicBool,
    in_flight: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl<V: FormView, C: ContactClient> FormSubmissionHandler<V, C> {
    /// 建立後尚未掛上表單，需呼叫 `attach`
    pub fn new(view: Arc<Mutex<V>>, client: C) -> Self {
        Self {
            view,
            client,
            messages: Messages::default(),
            timing: FeedbackTiming::default(),
            attached: AtomicBool::new(false),
            in_flight: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_timing(mut self, timing: FeedbackTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn view(&self) -> Arc<Mutex<V>> {
        Arc::clone(&self.view)
    }

    pub fn attach(&self) {
        self.attached.store(true, Ordering::Release);
        tracing::debug!("Submit handler attached");
    }

    pub fn detach(&self) {
        self.attached.store(false, Ordering::Release);
        tracing::debug!("Submit handler detached");
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn handle_submit(&self, event: &mut SubmitEvent) -> Submission {
        if !self.is_attached() {
            tracing::debug!("Submit ignored: handler is detached");
            return Submission::immediate(SubmitOutcome::Detached);
        }

        event.prevent_default();

        // 按鈕恢復前只允許一個請求
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::warn!("Submit ignored: a contact request is already in flight");
            return Submission::immediate(SubmitOutcome::Busy);
        }
        let mut guard = InFlightGuard {
            view: Arc::clone(&self.view),
            in_flight: Arc::clone(&self.in_flight),
            original_label: None,
            armed: true,
        };
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        let (request, original_label) = {
            let mut view = self.view.lock().await;
            view.clear_feedback();

            let request = read_request(&*view);
            let original_label = view.button_label();
            view.set_button_label(&self.messages.loading);
            view.set_button_disabled(true);

            (request, original_label)
        };
        guard.original_label = Some(original_label.clone());

        let outcome = match self.client.send(&request).await {
            Ok(body) => {
                tracing::info!("✅ Contact request sent: {}", body);
                let mut view = self.view.lock().await;
                view.render_feedback(Feedback::Success(self.messages.success.clone()));
                view.reset_fields();
                SubmitOutcome::Sent(body)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Contact request failed: {} ({})",
                    e,
                    e.message(&self.messages.server_fallback)
                );
                let mut view = self.view.lock().await;
                view.render_feedback(Feedback::Error(self.messages.error.clone()));
                SubmitOutcome::Failed(e)
            }
        };

        let reset = self.schedule_reset(original_label, generation);
        guard.disarm();

        Submission {
            outcome,
            reset: Some(reset),
        }
    }

    fn schedule_reset(&self, original_label: String, generation: u64) -> JoinHandle<()> {
        let view = Arc::clone(&self.view);
        let in_flight = Arc::clone(&self.in_flight);
        let latest_generation = Arc::clone(&self.generation);
        let timing = self.timing;

        tokio::spawn(async move {
            tokio::time::sleep(timing.restore_delay).await;
            restore_button(&mut *view.lock().await, &original_label);
            in_flight.store(false, Ordering::Release);
            tracing::debug!("Submit button restored");

            tokio::time::sleep(timing.clear_delay).await;
            if latest_generation.load(Ordering::Acquire) != generation {
                tracing::debug!("Newer submission started, keeping feedback");
                return;
            }

            let mut view = view.lock().await;
            // 錯誤訊息保留，只清掉成功訊息
            if view.feedback().is_some_and(Feedback::is_success) {
                view.clear_feedback();
                tracing::debug!("Success feedback cleared");
            }
        })
    }
}

/// 提交的 future 在結果出來前被丟棄時，恢復按鈕並釋放 in-flight
struct InFlightGuard<V: FormView> {
    view: Arc<Mutex<V>>,
    in_flight: Arc<AtomicBool>,
    original_label: Option<String>,
    armed: bool,
}

impl<V: FormView> InFlightGuard<V> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<V: FormView> Drop for InFlightGuard<V> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("Submission dropped before settlement, restoring submit button");

        let Some(label) = self.original_label.take() else {
            // 畫面還沒改動
            self.in_flight.store(false, Ordering::Release);
            return;
        };

        if let Ok(mut view) = self.view.try_lock() {
            restore_button(&mut *view, &label);
            self.in_flight.store(false, Ordering::Release);
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let view = Arc::clone(&self.view);
                let in_flight = Arc::clone(&self.in_flight);
                handle.spawn(async move {
                    restore_button(&mut *view.lock().await, &label);
                    in_flight.store(false, Ordering::Release);
                });
            }
            Err(_) => {
                tracing::warn!("No runtime to restore submit button, releasing in-flight only");
                self.in_flight.store(false, Ordering::Release);
            }
        }
    }
}

fn restore_button<V: FormView>(view: &mut V, label: &str) {
    view.set_button_label(label);
    view.set_button_disabled(false);
}

fn read_request<V: FormView>(view: &V) -> ContactRequest {
    ContactRequest {
        name: view.field_value(FIELD_NAME),
        email: view.field_value(FIELD_EMAIL),
        phone: view.field_value(FIELD_PHONE),
        company: view.field_value(FIELD_COMPANY),
    }
}
