//! Active-section highlighting for in-page navigation links.

use crate::dom::{DocumentPort, DomError};
use crate::widgets::Intersection;

const ACTIVE_CLASS: &str = "nav-link-active";

/// A navigation anchor and the fragment it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub href: String,
}

impl NavLink {
    pub fn new(id: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
        }
    }

    fn target(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|t| !t.is_empty())
    }
}

/// Tracks which sections are in view. The earliest section that entered
/// and has not left yet is the active one.
#[derive(Clone, Debug, Default)]
pub struct ActiveSectionTracker {
    visible: Vec<String>,
    links: Vec<NavLink>,
}

impl ActiveSectionTracker {
    /// Track `links`, ignoring those that do not point at a fragment.
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            visible: Vec::new(),
            links: links.into_iter().filter(|l| l.target().is_some()).collect(),
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.visible.first().map(String::as_str)
    }

    /// Fold observer entries into the visible set, then re-render links.
    pub fn observe<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
        entries: &[Intersection],
    ) -> Result<Option<&str>, DomError> {
        for entry in entries {
            let known = self.visible.iter().position(|id| *id == entry.id);
            match (entry.is_intersecting, known) {
                (true, None) => self.visible.push(entry.id.clone()),
                (false, Some(pos)) => {
                    self.visible.remove(pos);
                }
                _ => {}
            }
        }
        self.render(port)?;
        Ok(self.active())
    }

    fn render<P: DocumentPort + ?Sized>(&self, port: &mut P) -> Result<(), DomError> {
        let active = self.active();
        for link in &self.links {
            if link.target() == active {
                port.add_class(&link.id, ACTIVE_CLASS)?;
                port.set_attribute(&link.id, "aria-current", "location")?;
            } else {
                port.remove_class(&link.id, ACTIVE_CLASS)?;
                port.remove_attribute(&link.id, "aria-current")?;
            }
        }
        Ok(())
    }
}
