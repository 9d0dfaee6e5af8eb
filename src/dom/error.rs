//! Document access errors.

use thiserror::Error;

/// An element the markup contract promises is missing or has the wrong shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("Element '{id}' not found")]
    ElementNotFound { id: String },

    #[error("Element '{id}' is not a form")]
    NotAForm { id: String },

    #[error("Element '{id}' is not a form field")]
    NotAField { id: String },

    #[error("Element '{parent}' has no child with class '{class}'")]
    ChildNotFound { parent: String, class: String },
}
