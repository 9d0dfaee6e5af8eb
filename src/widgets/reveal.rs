//! Once-only reveal of elements entering the viewport.

use crate::dom::{DocumentPort, DomError};
use crate::widgets::Intersection;
use std::collections::BTreeSet;

const CONCEALED: [&str; 2] = ["opacity-0", "translate-y-8"];
const TRANSITION: [&str; 2] = ["transition-all", "duration-700"];
const REVEALED: [&str; 2] = ["opacity-100", "translate-y-0"];

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    pending: BTreeSet<String>,
}

impl RevealTracker {
    /// Hide every element until it is first seen. Ids missing from the
    /// document are skipped.
    pub fn prepare<P: DocumentPort + ?Sized>(
        port: &mut P,
        ids: &[String],
    ) -> Result<Self, DomError> {
        let mut pending = BTreeSet::new();
        for id in ids {
            if !port.contains(id) {
                continue;
            }
            for class in CONCEALED.iter().chain(&TRANSITION) {
                port.add_class(id, class)?;
            }
            pending.insert(id.clone());
        }
        Ok(Self { pending })
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Reveal intersecting elements that have not been revealed yet.
    /// Returns the ids revealed by this call.
    pub fn observe<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
        entries: &[Intersection],
    ) -> Result<Vec<String>, DomError> {
        let mut revealed = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.pending.remove(&entry.id) {
                continue;
            }
            for class in REVEALED {
                port.add_class(&entry.id, class)?;
            }
            for class in CONCEALED {
                port.remove_class(&entry.id, class)?;
            }
            revealed.push(entry.id.clone());
        }
        Ok(revealed)
    }
}
