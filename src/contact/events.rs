//! Typed UI events delivered to the controller.

use crate::button::PointerFeedback;
use crate::contact::controller::SubmitAttempt;
use crate::schedule::TaskKind;
use crate::validation::ValidationResult;

/// Everything the page forwards to a contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A field lost focus.
    Blur(String),
    /// A field's value changed.
    Input(String),
    /// The form was submitted.
    Submit,
    /// The user reset the form.
    Reset,
    /// Pointer activity over the submit button.
    Pointer(PointerFeedback),
    /// The event loop's timer woke up.
    TimerTick,
}

/// What handling an event produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventResponse {
    Validated(ValidationResult),
    /// The event did not warrant any work.
    Ignored,
    Submitted(SubmitAttempt),
    TimersFired(Vec<TaskKind>),
    Updated,
}
