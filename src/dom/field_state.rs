//! Rendering of a field's validation state.

use crate::dom::error::DomError;
use crate::dom::port::DocumentPort;
use crate::validation::ValidationResult;

pub const INVALID_BORDER: &str = "border-accent-600";
pub const VALID_BORDER: &str = "border-secondary-300";
const HIDDEN: &str = "hidden";

/// Id of the element holding a field's error text.
pub fn error_element_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Render `result` onto the field and its error element.
///
/// The output depends only on `result`, so applying the same result twice
/// leaves the document as the first call did. A field without an error
/// element only gets its border and `aria-invalid` updated.
pub fn apply_field_state<P: DocumentPort + ?Sized>(
    port: &mut P,
    field_id: &str,
    result: &ValidationResult,
) -> Result<(), DomError> {
    port.set_class(field_id, INVALID_BORDER, !result.valid)?;
    port.set_class(field_id, VALID_BORDER, result.valid)?;
    port.set_attribute(
        field_id,
        "aria-invalid",
        if result.valid { "false" } else { "true" },
    )?;

    let error_id = error_element_id(field_id);
    if port.contains(&error_id) {
        port.set_text(&error_id, &result.message)?;
        port.set_class(&error_id, HIDDEN, result.valid)?;
    }
    Ok(())
}

/// Clear any shown error, as on form reset.
pub fn clear_field_state<P: DocumentPort + ?Sized>(
    port: &mut P,
    field_id: &str,
) -> Result<(), DomError> {
    apply_field_state(port, field_id, &ValidationResult::valid())
}

/// Whether the field currently displays an error.
pub(crate) fn shows_error<P: DocumentPort + ?Sized>(
    port: &P,
    field_id: &str,
) -> Result<bool, DomError> {
    port.has_class(field_id, INVALID_BORDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{ElementBuilder, MemoryDocument};
    use crate::validation::FieldViolation;

    fn document() -> MemoryDocument {
        MemoryDocument::new()
            .with(
                "email",
                ElementBuilder::new("input")
                    .attr("name", "email")
                    .class(VALID_BORDER),
            )
            .with("email-error", ElementBuilder::new("p").class("hidden"))
    }

    #[test]
    fn invalid_result_shows_error() {
        let mut doc = document();
        let result = ValidationResult::invalid(FieldViolation::InvalidEmail);

        apply_field_state(&mut doc, "email", &result).unwrap();

        assert!(doc.has_class("email", INVALID_BORDER).unwrap());
        assert!(!doc.has_class("email", VALID_BORDER).unwrap());
        assert_eq!(
            doc.attribute("email", "aria-invalid").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(
            doc.text("email-error").unwrap(),
            "Please enter a valid email address"
        );
        assert!(!doc.has_class("email-error", "hidden").unwrap());
    }

    #[test]
    fn valid_result_clears_error() {
        let mut doc = document();
        apply_field_state(
            &mut doc,
            "email",
            &ValidationResult::invalid(FieldViolation::Required),
        )
        .unwrap();

        clear_field_state(&mut doc, "email").unwrap();

        assert!(!shows_error(&doc, "email").unwrap());
        assert_eq!(doc.text("email-error").unwrap(), "");
        assert!(doc.has_class("email-error", "hidden").unwrap());
        assert_eq!(
            doc.attribute("email", "aria-invalid").unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let result = ValidationResult::invalid(FieldViolation::NameTooShort);

        let mut once = document();
        apply_field_state(&mut once, "email", &result).unwrap();
        let mut twice = once.clone();
        apply_field_state(&mut twice, "email", &result).unwrap();

        for id in ["email", "email-error"] {
            assert_eq!(once.text(id).unwrap(), twice.text(id).unwrap());
            for class in [INVALID_BORDER, VALID_BORDER, "hidden"] {
                assert_eq!(
                    once.has_class(id, class).unwrap(),
                    twice.has_class(id, class).unwrap()
                );
            }
            assert_eq!(
                once.attribute(id, "aria-invalid").unwrap(),
                twice.attribute(id, "aria-invalid").unwrap()
            );
        }
    }

    #[test]
    fn missing_error_element_is_skipped() {
        let mut doc = MemoryDocument::new().with("company", ElementBuilder::new("input"));
        let result = ValidationResult::invalid(FieldViolation::CompanyTooShort);

        assert!(apply_field_state(&mut doc, "company", &result).is_ok());
        assert!(shows_error(&doc, "company").unwrap());
    }

    #[test]
    fn missing_field_is_an_error() {
        let mut doc = MemoryDocument::new();
        assert!(matches!(
            apply_field_state(&mut doc, "ghost", &ValidationResult::valid()),
            Err(DomError::ElementNotFound { .. })
        ));
    }
}
