pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpContactClient, InMemoryForm};
pub use config::ClientConfig;
pub use crate::core::{
    handler::FormSubmissionHandler, ContactRequest, Feedback, FormView, SubmitEvent,
    SubmitOutcome,
};
pub use utils::error::{ContactError, Result};
