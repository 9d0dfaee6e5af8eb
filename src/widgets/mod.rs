//! Small landing-page widgets driven by intersection and keyboard events.

mod counter;
mod nav;
mod reveal;
mod testimonials;

pub use counter::{parse_target, CounterAnimation, CounterTracker, COUNTER_DURATION};
pub use nav::{ActiveSectionTracker, NavLink};
pub use reveal::RevealTracker;
pub use testimonials::{next_card_index, prepare_cards, CardKey};

/// One entry of an intersection observer callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub id: String,
    pub is_intersecting: bool,
}

impl Intersection {
    pub fn entering(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: true,
        }
    }

    pub fn leaving(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_intersecting: false,
        }
    }
}
