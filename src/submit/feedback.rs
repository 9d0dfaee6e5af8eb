//! The form's feedback message container.

use crate::dom::{DocumentPort, DomError};

const HIDDEN: &str = "hidden";
const SUCCESS_CLASSES: [&str; 2] = ["bg-green-100", "text-green-800"];
const ERROR_CLASSES: [&str; 2] = ["bg-red-100", "text-red-800"];
const INFO_CLASSES: [&str; 2] = ["bg-blue-100", "text-blue-800"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
    Info,
}

impl FeedbackKind {
    fn classes(self) -> [&'static str; 2] {
        match self {
            Self::Success => SUCCESS_CLASSES,
            Self::Error => ERROR_CLASSES,
            Self::Info => INFO_CLASSES,
        }
    }
}

/// Show `message` styled as `kind`, or hide the container when empty.
///
/// A page without the container gets no feedback and no error.
pub fn show_form_message<P: DocumentPort + ?Sized>(
    port: &mut P,
    container: &str,
    kind: FeedbackKind,
    message: &str,
) -> Result<(), DomError> {
    if !port.contains(container) {
        return Ok(());
    }

    port.remove_class(container, HIDDEN)?;
    for class in SUCCESS_CLASSES.iter().chain(&ERROR_CLASSES).chain(&INFO_CLASSES) {
        port.remove_class(container, class)?;
    }

    if message.is_empty() {
        return port.add_class(container, HIDDEN);
    }

    for class in kind.classes() {
        port.add_class(container, class)?;
    }
    port.set_text(container, message)?;
    port.scroll_into_view(container)
}
