//! Whole-form validation that accumulates every violation.

use crate::validation::field::Field;
use crate::validation::rules::check_field;
use crate::validation::violations::FieldError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every field, collecting ALL violations.
///
/// Evaluation never stops at the first invalid field.
pub fn validate_fields(fields: &[Field]) -> Validation<(), NonEmptyVec<FieldError>> {
    let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = fields
        .iter()
        .map(|field| match check_field(field) {
            Ok(()) => Validation::success(()),
            Err(violation) => Validation::fail(FieldError {
                field_id: field.id.clone(),
                violation,
            }),
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
