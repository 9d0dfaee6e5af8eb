//! Submission plumbing: payload, transport seam and feedback message.

mod feedback;
mod http;
mod transport;

pub use feedback::{show_form_message, FeedbackKind};
pub use http::HttpTransport;
pub use transport::{FormPayload, SubmissionOutcome, Transport, TransportError, TransportResponse};
