//! State trait for UI state machines.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the states of an interactive component.
///
/// All methods are pure. A state value says nothing about how it is
/// rendered; renderers derive their output from it.
///
/// # Example
///
/// ```rust
/// use formstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum MenuState {
///     Closed,
///     Open,
/// }
///
/// impl State for MenuState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(MenuState::Open.name(), "Open");
/// assert!(!MenuState::Open.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and transition errors.
    fn name(&self) -> &str;

    /// Whether the state only changes through an external reset.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether the state reports a failure to the user.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
