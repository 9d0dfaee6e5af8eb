//! Field and form validation.
//!
//! Single fields are checked by an ordered list of rules where the first
//! failing rule wins. Whole forms are checked with Stillwater's
//! `Validation`, which keeps evaluating after a failure so every invalid
//! field is reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use formstate::validation::{validate, Field, InputKind};
//!
//! let email = Field::new("email", "email", "not-an-email").input(InputKind::Email);
//! let result = validate(&email);
//!
//! assert!(!result.valid);
//! assert_eq!(result.message, "Please enter a valid email address");
//! ```

pub mod field;
pub mod form;
pub mod rules;
pub mod violations;

pub use field::{Field, FieldKind, InputKind, ValidationResult};
pub use form::validate_fields;
pub use rules::{check_field, is_valid_email, is_valid_phone, validate};
pub use violations::{FieldError, FieldViolation};
