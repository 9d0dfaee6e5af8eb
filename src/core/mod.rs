//! Pure core shared by every interactive component.
//!
//! - `State` describes a position in a small UI state machine
//! - `Guard` holds the pure precondition for entering a state
//! - `StateHistory` records transitions immutably
//!
//! Nothing in this module touches the document or the clock beyond
//! timestamping history entries.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
