//! Cancelable delayed tasks.
//!
//! Tasks are keyed by the identity of what they act on plus their kind,
//! so a newer task replaces an older one and a submission can cancel a
//! pending recovery before it fires.

mod scheduler;

pub use scheduler::{Scheduler, TaskKey, TaskKind};
