//! State transition history tracking.
//!
//! History is an immutable log of the transitions a component went
//! through, mostly useful for diagnostics and tests.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use formstate::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Panel {
///     Hidden,
///     Shown,
/// }
///
/// impl State for Panel {
///     fn name(&self) -> &str {
///         match self {
///             Self::Hidden => "Hidden",
///             Self::Shown => "Shown",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Panel::Hidden,
///     to: Panel::Shown,
///     timestamp: Utc::now(),
///     submission: 0,
/// };
/// assert_eq!(transition.to, Panel::Shown);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Submission attempt the transition belongs to (0 before the first)
    pub submission: u64,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use formstate::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step {
///     Start,
///     Middle,
///     End,
/// }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Middle => "Middle",
///             Self::End => "End",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Step::Start,
///         to: Step::Middle,
///         timestamp: Utc::now(),
///         submission: 1,
///     })
///     .record(StateTransition {
///         from: Step::Middle,
///         to: Step::End,
///         timestamp: Utc::now(),
///         submission: 1,
///     });
///
/// assert_eq!(history.get_path(), vec![&Step::Start, &Step::Middle, &Step::End]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Transitions belonging to one submission attempt.
    pub fn for_submission(&self, submission: u64) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions
            .iter()
            .filter(move |t| t.submission == submission)
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Done,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Done => "Done",
                Self::Broken => "Broken",
            }
        }
    }

    fn transition(from: TestState, to: TestState, submission: u64) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            submission,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(TestState::Idle, TestState::Busy, 1));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(TestState::Idle, TestState::Busy, 1))
            .record(transition(TestState::Busy, TestState::Broken, 1))
            .record(transition(TestState::Broken, TestState::Idle, 1));

        assert_eq!(
            history.get_path(),
            vec![
                &TestState::Idle,
                &TestState::Busy,
                &TestState::Broken,
                &TestState::Idle
            ]
        );
    }

    #[test]
    fn for_submission_filters_by_attempt() {
        let history = StateHistory::new()
            .record(transition(TestState::Idle, TestState::Busy, 1))
            .record(transition(TestState::Busy, TestState::Broken, 1))
            .record(transition(TestState::Broken, TestState::Busy, 2))
            .record(transition(TestState::Busy, TestState::Done, 2));

        let second: Vec<_> = history.for_submission(2).map(|t| &t.to).collect();
        assert_eq!(second, vec![&TestState::Busy, &TestState::Done]);
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(TestState::Idle, TestState::Busy, 0));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(TestState::Idle, TestState::Busy, 3));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].submission, 3);
    }
}
