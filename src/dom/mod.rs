//! Document access behind an injected port.
//!
//! Controllers never query a live document directly. They receive a
//! `DocumentPort`, which a browser binding or the in-memory
//! `MemoryDocument` implements.

mod error;
mod field_state;
mod memory;
mod port;

pub use error::DomError;
pub use field_state::{apply_field_state, clear_field_state, error_element_id};
pub(crate) use field_state::shows_error;
pub use memory::{ElementBuilder, MemoryDocument};
pub use port::DocumentPort;
