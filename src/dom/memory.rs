//! In-memory document used headless and in tests.

use crate::dom::error::DomError;
use crate::dom::port::DocumentPort;
use crate::validation::{Field, InputKind};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Element {
    tag: String,
    parent: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    checked: bool,
    default_value: String,
    default_checked: bool,
}

impl Element {
    fn is_control(&self) -> bool {
        self.tag == "input" || self.tag == "textarea"
    }
}

/// Describes an element before it is inserted into a `MemoryDocument`.
#[derive(Clone, Debug, Default)]
pub struct ElementBuilder {
    element: Element,
    value_set: bool,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            element: Element {
                tag: tag.into().to_ascii_lowercase(),
                ..Element::default()
            },
            value_set: false,
        }
    }

    pub fn parent(mut self, id: impl Into<String>) -> Self {
        self.element.parent = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.element.classes.insert(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.element.attributes.insert(name.into(), value.into());
        self
    }

    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.text = text.into();
        self
    }

    /// Initial value; also the value a form reset restores.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.element.value = value.into();
        self.value_set = true;
        self
    }

    /// Initial checkedness; also what a form reset restores.
    pub fn checked(mut self, checked: bool) -> Self {
        self.element.checked = checked;
        self
    }

    fn finish(mut self) -> Element {
        let is_checkbox = self.element.tag == "input"
            && self.element.attributes.get("type").map(String::as_str) == Some("checkbox");
        if is_checkbox && !self.value_set {
            // Browsers submit "on" for checkboxes without an explicit value.
            self.element.value = "on".to_string();
        }
        self.element.default_value = self.element.value.clone();
        self.element.default_checked = self.element.checked;
        self.element
    }
}

/// A flat, id-addressed document tree.
///
/// Insertion order is document order.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Vec<(String, Element)>,
    index: BTreeMap<String, usize>,
    scrolled: Vec<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, replacing any element with the same id.
    pub fn insert(&mut self, id: impl Into<String>, builder: ElementBuilder) {
        let id = id.into();
        let element = builder.finish();
        match self.index.get(&id) {
            Some(&pos) => self.elements[pos].1 = element,
            None => {
                self.index.insert(id.clone(), self.elements.len());
                self.elements.push((id, element));
            }
        }
    }

    /// Builder-style variant of `insert`.
    pub fn with(mut self, id: impl Into<String>, builder: ElementBuilder) -> Self {
        self.insert(id, builder);
        self
    }

    /// Simulate the user typing into a control.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(id)?.value = value.into();
        Ok(())
    }

    /// Simulate the user toggling a checkbox.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<(), DomError> {
        self.element_mut(id)?.checked = checked;
        Ok(())
    }

    /// Ids passed to `scroll_into_view`, oldest first.
    pub fn scrolled(&self) -> &[String] {
        &self.scrolled
    }

    fn element(&self, id: &str) -> Result<&Element, DomError> {
        self.index
            .get(id)
            .map(|&pos| &self.elements[pos].1)
            .ok_or_else(|| DomError::ElementNotFound { id: id.to_string() })
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        match self.index.get(id) {
            Some(&pos) => Ok(&mut self.elements[pos].1),
            None => Err(DomError::ElementNotFound { id: id.to_string() }),
        }
    }

    fn is_descendant(&self, id: &str, ancestor: &str) -> bool {
        let mut current = self.element(id).ok().and_then(|e| e.parent.clone());
        // Bounded walk so a malformed parent cycle cannot loop forever.
        for _ in 0..self.elements.len() {
            match current {
                Some(ref parent) if parent == ancestor => return true,
                Some(parent) => {
                    current = self.element(&parent).ok().and_then(|e| e.parent.clone());
                }
                None => return false,
            }
        }
        false
    }

    fn form(&self, form_id: &str) -> Result<&Element, DomError> {
        let form = self.element(form_id)?;
        if form.tag == "form" {
            Ok(form)
        } else {
            Err(DomError::NotAForm {
                id: form_id.to_string(),
            })
        }
    }

    fn control_ids(&self, form_id: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(id, element)| element.is_control() && self.is_descendant(id, form_id))
            .map(|(id, _)| id.clone())
            .collect()
    }
}

impl DocumentPort for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn child_by_class(&self, parent: &str, class: &str) -> Option<String> {
        self.elements
            .iter()
            .find(|(id, element)| element.classes.contains(class) && self.is_descendant(id, parent))
            .map(|(id, _)| id.clone())
    }

    fn has_class(&self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element(id)?.classes.contains(class))
    }

    fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.classes.remove(class);
        Ok(())
    }

    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element(id)?.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, id: &str, name: &str) -> Result<(), DomError> {
        self.element_mut(id)?.attributes.remove(name);
        Ok(())
    }

    fn text(&self, id: &str) -> Result<String, DomError> {
        Ok(self.element(id)?.text.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError> {
        self.element_mut(id)?.text = text.to_string();
        Ok(())
    }

    fn field(&self, id: &str) -> Result<Field, DomError> {
        let element = self.element(id)?;
        if !element.is_control() {
            return Err(DomError::NotAField { id: id.to_string() });
        }
        let input_type = element.attributes.get("type").map(String::as_str);
        Ok(Field {
            id: id.to_string(),
            name: element.attributes.get("name").cloned().unwrap_or_default(),
            value: element.value.clone(),
            required: element.attributes.contains_key("required"),
            input: InputKind::from_element(&element.tag, input_type),
            checked: element.checked,
        })
    }

    fn form_fields(&self, form_id: &str) -> Result<Vec<Field>, DomError> {
        self.form(form_id)?;
        self.control_ids(form_id)
            .iter()
            .map(|id| self.field(id))
            .collect()
    }

    fn reset_form(&mut self, form_id: &str) -> Result<(), DomError> {
        self.form(form_id)?;
        for id in self.control_ids(form_id) {
            let element = self.element_mut(&id)?;
            element.value = element.default_value.clone();
            element.checked = element.default_checked;
        }
        Ok(())
    }

    fn scroll_into_view(&mut self, id: &str) -> Result<(), DomError> {
        self.element(id)?;
        self.scrolled.push(id.to_string());
        Ok(())
    }
}
