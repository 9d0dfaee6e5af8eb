//! The morphing submit button.
//!
//! The button moves through Default, Loading, Success and Error. Allowed
//! moves live in a transition table with guards; the visible markup is
//! rendered from the current state alone.

mod machine;
mod state;
mod transition;
mod view;

pub use machine::{ButtonError, ButtonMachine};
pub use state::ButtonState;
pub use transition::{ButtonTransition, TransitionError};
pub use view::{ButtonParts, ButtonView, PointerFeedback};
