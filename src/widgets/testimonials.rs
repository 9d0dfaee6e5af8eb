//! Keyboard navigation between testimonial cards.

use crate::dom::{DocumentPort, DomError};

/// Keys that move focus between cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKey {
    Next,
    Previous,
    First,
    Last,
}

impl CardKey {
    /// Map a `KeyboardEvent.key` value. Other keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Index of the card to focus after `key`, wrapping at both ends.
pub fn next_card_index(key: CardKey, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    Some(match key {
        CardKey::Next => (current + 1) % len,
        CardKey::Previous => (current + len - 1) % len,
        CardKey::First => 0,
        CardKey::Last => len - 1,
    })
}

/// Make cards focusable and label them, numbering from 1.
pub fn prepare_cards<P: DocumentPort + ?Sized>(port: &mut P, ids: &[String]) -> Result<(), DomError> {
    for (i, id) in ids.iter().enumerate() {
        port.set_attribute(id, "tabindex", "0")?;
        port.set_attribute(id, "role", "article")?;
        port.set_attribute(id, "aria-label", &format!("Customer testimonial {}", i + 1))?;
    }
    Ok(())
}
