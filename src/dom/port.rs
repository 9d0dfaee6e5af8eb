//! The document capability consumed by controllers and widgets.

use crate::dom::error::DomError;
use crate::validation::Field;

/// Capability to read and mutate the page.
///
/// Elements are addressed by id. Mutations are expected to be idempotent:
/// adding a class that is present or setting an attribute to its current
/// value changes nothing.
pub trait DocumentPort {
    fn contains(&self, id: &str) -> bool;

    /// Id of the first descendant of `parent` carrying `class`.
    fn child_by_class(&self, parent: &str, class: &str) -> Option<String>;

    fn has_class(&self, id: &str, class: &str) -> Result<bool, DomError>;

    fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError>;

    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError>;

    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, DomError>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), DomError>;

    fn remove_attribute(&mut self, id: &str, name: &str) -> Result<(), DomError>;

    fn text(&self, id: &str) -> Result<String, DomError>;

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError>;

    /// Snapshot of one input or textarea.
    fn field(&self, id: &str) -> Result<Field, DomError>;

    /// Snapshots of every input and textarea inside the form, in document order.
    fn form_fields(&self, form_id: &str) -> Result<Vec<Field>, DomError>;

    /// Restore every control of the form to its initial value.
    fn reset_form(&mut self, form_id: &str) -> Result<(), DomError>;

    /// Ask the viewport to bring the element into view. No-op by default.
    fn scroll_into_view(&mut self, id: &str) -> Result<(), DomError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomError::ElementNotFound { id: id.to_string() })
        }
    }

    /// Add or remove `class` so that its presence equals `present`.
    fn set_class(&mut self, id: &str, class: &str, present: bool) -> Result<(), DomError> {
        if present {
            self.add_class(id, class)
        } else {
            self.remove_class(id, class)
        }
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), DomError> {
        if disabled {
            self.set_attribute(id, "disabled", "")
        } else {
            self.remove_attribute(id, "disabled")
        }
    }

    fn is_disabled(&self, id: &str) -> Result<bool, DomError> {
        Ok(self.attribute(id, "disabled")?.is_some())
    }
}
