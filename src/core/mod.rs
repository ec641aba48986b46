pub mod handler;

pub use crate::domain::model::{
    ContactRequest, Feedback, Messages, SubmitEvent, SubmitOutcome, DEFAULT_BUTTON_LABEL,
    ERROR_MESSAGE, FEEDBACK_ID, FIELD_COMPANY, FIELD_EMAIL, FIELD_IDS, FIELD_NAME, FIELD_PHONE,
    FORM_ID, LOADING_LABEL, SERVER_FALLBACK_MESSAGE, SUCCESS_MESSAGE,
};
pub use crate::domain::ports::{ContactClient, FormView};
pub use crate::utils::error::Result;
pub use handler::{FeedbackTiming, FormSubmissionHandler, Submission};
