//! The contact form controller.
//!
//! `ContactForm` validates fields as the user works through them, runs
//! the submission flow, drives the morphing submit button and owns the
//! delayed recovery and reset tasks.

mod controller;
mod events;

pub use controller::{ContactError, ContactForm, SubmitAttempt};
pub use events::{EventResponse, UiEvent};
