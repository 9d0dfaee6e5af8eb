//! Form field model.

use crate::validation::violations::FieldViolation;
use serde::{Deserialize, Serialize};

/// How the browser renders the control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Phone,
    Checkbox,
    Textarea,
}

impl InputKind {
    /// Infer the kind from an element's tag and `type` attribute.
    pub fn from_element(tag: &str, input_type: Option<&str>) -> Self {
        if tag.eq_ignore_ascii_case("textarea") {
            return Self::Textarea;
        }
        match input_type.map(str::to_ascii_lowercase).as_deref() {
            Some("email") => Self::Email,
            Some("tel") => Self::Phone,
            Some("checkbox") => Self::Checkbox,
            _ => Self::Text,
        }
    }
}

/// Validation category, inferred from the field's `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Email,
    Phone,
    Name,
    Company,
    Message,
    Terms,
    Other,
}

impl FieldKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "email" => Self::Email,
            "phone" => Self::Phone,
            "name" => Self::Name,
            "company" => Self::Company,
            "message" => Self::Message,
            "terms" => Self::Terms,
            _ => Self::Other,
        }
    }
}

/// Snapshot of one form control as read from the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub value: String,
    pub required: bool,
    pub input: InputKind,
    pub checked: bool,
}

impl Field {
    /// A non-required text field.
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
            required: false,
            input: InputKind::Text,
            checked: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn input(mut self, input: InputKind) -> Self {
        self.input = input;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::from_name(&self.name)
    }
}

/// Verdict for one field. `message` is empty exactly when `valid` is true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(violation: FieldViolation) -> Self {
        Self {
            valid: false,
            message: violation.to_string(),
        }
    }
}

impl From<Result<(), FieldViolation>> for ValidationResult {
    fn from(result: Result<(), FieldViolation>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(violation) => Self::invalid(violation),
        }
    }
}
