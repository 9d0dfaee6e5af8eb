//! Button state machine bound to a document element.

use crate::button::state::ButtonState;
use crate::button::transition::{resolve, ButtonTransition, TransitionError};
use crate::button::view::{ButtonParts, ButtonView, PointerFeedback};
use crate::core::{State, StateHistory, StateTransition};
use crate::dom::{DocumentPort, DomError};
use chrono::Utc;

/// Owns a submit button's state and renders it on every transition.
#[derive(Clone, Debug)]
pub struct ButtonMachine {
    parts: ButtonParts,
    current: ButtonState,
    transitions: Vec<ButtonTransition>,
    history: StateHistory<ButtonState>,
    submission: u64,
}

impl ButtonMachine {
    /// Bind to the button in the document, starting in Default.
    pub fn locate<P: DocumentPort + ?Sized>(port: &P, button_id: &str) -> Result<Self, DomError> {
        Ok(Self::new(ButtonParts::locate(port, button_id)?))
    }

    pub fn new(parts: ButtonParts) -> Self {
        Self {
            parts,
            current: ButtonState::Default,
            transitions: ButtonTransition::standard(),
            history: StateHistory::new(),
            submission: 0,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> ButtonState {
        self.current
    }

    /// Whether the button accepts clicks (pure)
    pub fn is_interactive(&self) -> bool {
        self.current.is_interactive()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<ButtonState> {
        &self.history
    }

    pub fn id(&self) -> &str {
        &self.parts.button
    }

    /// Number of submissions started so far.
    pub fn submission(&self) -> u64 {
        self.submission
    }

    /// Move to `to` if the graph allows it, then render.
    ///
    /// Entering Loading starts a new submission number.
    pub fn transition_to<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
        to: ButtonState,
    ) -> Result<ButtonState, ButtonError> {
        resolve(&self.transitions, &self.current, &to)?;

        if to == ButtonState::Loading {
            self.submission += 1;
        }
        let from = self.current;
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            submission: self.submission,
        });
        self.current = to;
        tracing::debug!(
            button = %self.parts.button,
            from = from.name(),
            to = to.name(),
            submission = self.submission,
            "button transition"
        );

        self.render(port)?;
        Ok(to)
    }

    /// Return to Default from wherever the graph allows. Already in
    /// Default just re-renders.
    pub fn reset<P: DocumentPort + ?Sized>(&mut self, port: &mut P) -> Result<(), ButtonError> {
        if self.current == ButtonState::Default {
            self.render(port)?;
            return Ok(());
        }
        self.transition_to(port, ButtonState::Default)?;
        Ok(())
    }

    /// Render the current state. Idempotent.
    pub fn render<P: DocumentPort + ?Sized>(&self, port: &mut P) -> Result<(), DomError> {
        ButtonView::of(self.current).apply(port, &self.parts)
    }

    pub fn pointer<P: DocumentPort + ?Sized>(
        &self,
        port: &mut P,
        feedback: PointerFeedback,
    ) -> Result<(), DomError> {
        feedback.apply(port, &self.parts.button)
    }
}

/// Errors from driving the button.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ButtonError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Dom(#[from] DomError),
}
