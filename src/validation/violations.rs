//! Field violations and their user-facing messages.

use thiserror::Error;

/// Reasons a single field fails validation.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Company name must be at least 2 characters")]
    CompanyTooShort,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("You must agree to the privacy policy")]
    TermsNotAccepted,
}

/// A violation attributed to the field that produced it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field_id}: {violation}")]
pub struct FieldError {
    pub field_id: String,
    pub violation: FieldViolation,
}
