//! Per-field validation rules.

use crate::validation::field::{Field, FieldKind, InputKind, ValidationResult};
use crate::validation::violations::FieldViolation;
use regex::Regex;
use std::sync::LazyLock;

// Something before and after a single @, and a dot somewhere in the domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Ten or more of: ASCII digits, whitespace, `+`, `(`, `)`, `-`.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\s+()\-]{10,}$").expect("PHONE_REGEX: invalid regex pattern")
});

const MIN_NAME_CHARS: usize = 2;
const MIN_COMPANY_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Run the rules in precedence order and return the first violation.
///
/// The value is trimmed before any emptiness or length check. Lengths are
/// counted in UTF-16 code units, the way a browser reports `value.length`.
pub fn check_field(field: &Field) -> Result<(), FieldViolation> {
    let value = field.value.trim();
    let len = value.encode_utf16().count();

    if field.required && value.is_empty() {
        return Err(FieldViolation::Required);
    }
    if value.is_empty() {
        return check_terms(field);
    }

    match field.kind() {
        FieldKind::Email if !is_valid_email(value) => Err(FieldViolation::InvalidEmail),
        FieldKind::Phone if !is_valid_phone(value) => Err(FieldViolation::InvalidPhone),
        FieldKind::Name if len < MIN_NAME_CHARS => Err(FieldViolation::NameTooShort),
        FieldKind::Company if len < MIN_COMPANY_CHARS => Err(FieldViolation::CompanyTooShort),
        FieldKind::Message if len < MIN_MESSAGE_CHARS => Err(FieldViolation::MessageTooShort),
        _ => check_terms(field),
    }
}

fn check_terms(field: &Field) -> Result<(), FieldViolation> {
    if field.kind() == FieldKind::Terms && field.input == InputKind::Checkbox && !field.checked {
        Err(FieldViolation::TermsNotAccepted)
    } else {
        Ok(())
    }
}

/// Validate one field.
///
/// # Example
///
/// ```rust
/// use formstate::validation::{validate, Field};
///
/// let phone = Field::new("phone", "phone", "(555) 123-4567");
/// assert!(validate(&phone).valid);
///
/// let short = Field::new("phone", "phone", "123");
/// assert_eq!(validate(&short).message, "Please enter a valid phone number");
/// ```
pub fn validate(field: &Field) -> ValidationResult {
    check_field(field).into()
}
