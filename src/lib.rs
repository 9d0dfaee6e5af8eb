//! Formstate: interaction core for a landing-page contact form
//!
//! Formstate keeps the same split between a pure core and an imperative
//! shell. Validation rules and the button's transition graph are pure
//! functions; everything that touches the page goes through a
//! [`DocumentPort`], and everything that touches the network goes through a
//! [`Transport`].
//!
//! # Core Concepts
//!
//! - **Validation**: per-field rules accumulated with Stillwater's `Validation`
//! - **Button**: a four-state machine (Default, Loading, Success, Error)
//!   rendered declaratively from its state
//! - **Submission**: validate, post, show feedback, then reset or recover
//!   on a cancelable timer
//! - **Widgets**: active-section highlighting, reveal on scroll, counters
//!   and keyboard navigation for testimonials
//!
//! # Example
//!
//! ```rust
//! use formstate::validation::{validate, Field, FieldKind, InputKind};
//!
//! let field = Field::new("email", "email", "not-an-email")
//!     .required()
//!     .input(InputKind::Email);
//! assert_eq!(field.kind(), FieldKind::Email);
//!
//! let result = validate(&field);
//! assert!(!result.valid);
//! assert_eq!(result.message, "Please enter a valid email address");
//! ```

pub mod button;
pub mod config;
pub mod contact;
pub mod core;
pub mod dom;
mod macros;
pub mod page;
pub mod schedule;
pub mod submit;
pub mod validation;
pub mod widgets;

// Re-export commonly used types
pub use button::{ButtonMachine, ButtonState};
pub use config::{ConfigError, ContactConfig};
pub use contact::{ContactError, ContactForm, EventResponse, SubmitAttempt, UiEvent};
pub use core::{Guard, State, StateHistory, StateTransition};
pub use dom::{DocumentPort, DomError, MemoryDocument};
pub use page::{Page, PageLayout};
pub use submit::{HttpTransport, Transport, TransportError};
pub use validation::{validate, Field, FieldViolation, ValidationResult};
