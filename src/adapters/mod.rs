// Adapters layer: concrete implementations of the domain ports (form view, http client).

pub mod form;
pub mod http;

pub use form::InMemoryForm;
pub use http::HttpContactClient;
