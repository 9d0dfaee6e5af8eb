//! Button states.

use crate::state_enum;

state_enum! {
    /// Visual and behavioral state of a submit button.
    ///
    /// Success only leaves through a form reset. Error accepts input again
    /// and recovers to Default on its own after a delay.
    pub enum ButtonState {
        Default,
        Loading,
        Success,
        Error,
    }
    final: [Success]
    error: [Error]
    interactive: [Default, Error]
}

impl std::default::Default for ButtonState {
    fn default() -> Self {
        Self::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn interactive_iff_default_or_error() {
        assert!(ButtonState::Default.is_interactive());
        assert!(ButtonState::Error.is_interactive());
        assert!(!ButtonState::Loading.is_interactive());
        assert!(!ButtonState::Success.is_interactive());
    }

    #[test]
    fn success_is_final_and_error_is_error() {
        assert!(ButtonState::Success.is_final());
        assert!(ButtonState::Error.is_error());
        assert!(!ButtonState::Error.is_final());
    }

    #[test]
    fn starts_in_default() {
        assert_eq!(ButtonState::default(), ButtonState::Default);
    }
}
