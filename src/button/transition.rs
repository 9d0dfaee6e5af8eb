//! Allowed button transitions.

use crate::button::state::ButtonState;
use crate::core::{Guard, State};

/// Errors raised when a transition is attempted.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("No transition from '{from}' to '{to}'")]
    NotAllowed { from: String, to: String },

    #[error("Guard blocked transition from '{from}' to '{to}'")]
    GuardBlocked { from: String, to: String },
}

/// One edge of the button state graph.
#[derive(Clone, Debug)]
pub struct ButtonTransition {
    pub from: ButtonState,
    pub to: ButtonState,
    pub guard: Option<Guard<ButtonState>>,
}

impl ButtonTransition {
    pub fn new(from: ButtonState, to: ButtonState) -> Self {
        Self {
            from,
            to,
            guard: None,
        }
    }

    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ButtonState) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Whether this edge leads from `current` to `to` (pure).
    pub fn matches(&self, current: &ButtonState, to: &ButtonState) -> bool {
        self.from == *current && self.to == *to
    }

    /// Check the guard, if any (pure).
    pub fn can_execute(&self, current: &ButtonState) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    /// The standard morphing-button graph.
    ///
    /// Loading is only entered from the interactive states, which is what
    /// keeps a form to one submission in flight. The table expresses this
    /// on its own, so no edge carries a guard.
    pub fn standard() -> Vec<Self> {
        use ButtonState::*;

        vec![
            Self::new(Default, Loading),
            Self::new(Error, Loading),
            Self::new(Loading, Success),
            Self::new(Loading, Error),
            Self::new(Error, Default),
            Self::new(Success, Default),
        ]
    }
}

/// Find the edge for `current -> to` and check its guard.
pub(crate) fn resolve<'a>(
    transitions: &'a [ButtonTransition],
    current: &ButtonState,
    to: &ButtonState,
) -> Result<&'a ButtonTransition, TransitionError> {
    let transition = transitions
        .iter()
        .find(|t| t.matches(current, to))
        .ok_or_else(|| TransitionError::NotAllowed {
            from: current.name().to_string(),
            to: to.name().to_string(),
        })?;

    if transition.can_execute(current) {
        Ok(transition)
    } else {
        Err(TransitionError::GuardBlocked {
            from: current.name().to_string(),
            to: to.name().to_string(),
        })
    }
}
