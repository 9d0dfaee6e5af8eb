//! Rendering of the button from its state.

use crate::button::state::ButtonState;
use crate::dom::{DocumentPort, DomError};

const HIDDEN: &str = "hidden";
const DIMMED: [&str; 2] = ["opacity-75", "cursor-not-allowed"];
const SUCCESS_STYLE: [&str; 2] = ["bg-green-600", "hover:bg-green-700"];
const HOVER_SCALE: &str = "scale-105";
const PRESS_SCALE: &str = "scale-95";

/// Element ids of the button and its three visual sub-elements.
///
/// Sub-elements are optional; a missing one is simply not rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonParts {
    pub button: String,
    pub text: Option<String>,
    pub spinner: Option<String>,
    pub success: Option<String>,
}

impl ButtonParts {
    /// Locate the button and its `.btn-text`, `.btn-spinner` and
    /// `.btn-success` children.
    pub fn locate<P: DocumentPort + ?Sized>(port: &P, button_id: &str) -> Result<Self, DomError> {
        if !port.contains(button_id) {
            return Err(DomError::ElementNotFound {
                id: button_id.to_string(),
            });
        }
        let parts = Self {
            button: button_id.to_string(),
            text: port.child_by_class(button_id, "btn-text"),
            spinner: port.child_by_class(button_id, "btn-spinner"),
            success: port.child_by_class(button_id, "btn-success"),
        };
        if parts.text.is_none() || parts.spinner.is_none() || parts.success.is_none() {
            tracing::warn!(button = button_id, "submit button is missing visual sub-elements");
        }
        Ok(parts)
    }
}

/// Everything the document shows for one button state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub text_visible: bool,
    pub spinner_visible: bool,
    pub success_visible: bool,
    pub busy: bool,
    pub disabled: bool,
    pub dimmed: bool,
    pub success_style: bool,
}

impl ButtonView {
    pub fn of(state: ButtonState) -> Self {
        Self {
            text_visible: state == ButtonState::Default,
            spinner_visible: state == ButtonState::Loading,
            success_visible: state == ButtonState::Success,
            busy: state == ButtonState::Loading,
            disabled: !state.is_interactive(),
            dimmed: state == ButtonState::Loading,
            success_style: state == ButtonState::Success,
        }
    }

    /// Write the view to the document. Idempotent.
    pub fn apply<P: DocumentPort + ?Sized>(
        &self,
        port: &mut P,
        parts: &ButtonParts,
    ) -> Result<(), DomError> {
        let visibility = [
            (&parts.text, self.text_visible),
            (&parts.spinner, self.spinner_visible),
            (&parts.success, self.success_visible),
        ];
        for (part, visible) in visibility {
            if let Some(id) = part {
                port.set_class(id, HIDDEN, !visible)?;
            }
        }

        let button = parts.button.as_str();
        port.set_attribute(button, "aria-busy", if self.busy { "true" } else { "false" })?;
        port.set_disabled(button, self.disabled)?;
        for class in DIMMED {
            port.set_class(button, class, self.dimmed)?;
        }
        for class in SUCCESS_STYLE {
            port.set_class(button, class, self.success_style)?;
        }
        Ok(())
    }
}

/// Pointer events that only affect the button's scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerFeedback {
    Enter,
    Leave,
    Down,
    Up,
}

impl PointerFeedback {
    /// Enter and down only scale an enabled button; leave and up always
    /// remove the scale.
    pub fn apply<P: DocumentPort + ?Sized>(self, port: &mut P, button: &str) -> Result<(), DomError> {
        match self {
            Self::Enter if !port.is_disabled(button)? => port.add_class(button, HOVER_SCALE),
            Self::Down if !port.is_disabled(button)? => port.add_class(button, PRESS_SCALE),
            Self::Leave => port.remove_class(button, HOVER_SCALE),
            Self::Up => port.remove_class(button, PRESS_SCALE),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementBuilder, MemoryDocument};

    fn document() -> MemoryDocument {
        MemoryDocument::new()
            .with("submit-btn", ElementBuilder::new("button"))
            .with(
                "label",
                ElementBuilder::new("span").parent("submit-btn").class("btn-text"),
            )
            .with(
                "spinner",
                ElementBuilder::new("span")
                    .parent("submit-btn")
                    .class("btn-spinner")
                    .class("hidden"),
            )
            .with(
                "tick",
                ElementBuilder::new("span")
                    .parent("submit-btn")
                    .class("btn-success")
                    .class("hidden"),
            )
    }

    fn hidden(doc: &MemoryDocument, id: &str) -> bool {
        doc.has_class(id, "hidden").unwrap()
    }

    #[test]
    fn locate_finds_sub_elements() {
        let parts = ButtonParts::locate(&document(), "submit-btn").unwrap();
        assert_eq!(parts.text.as_deref(), Some("label"));
        assert_eq!(parts.spinner.as_deref(), Some("spinner"));
        assert_eq!(parts.success.as_deref(), Some("tick"));
    }

    #[test]
    fn locate_requires_the_button() {
        assert!(ButtonParts::locate(&MemoryDocument::new(), "submit-btn").is_err());
    }

    #[test]
    fn loading_shows_spinner_and_disables() {
        let mut doc = document();
        let parts = ButtonParts::locate(&doc, "submit-btn").unwrap();

        ButtonView::of(ButtonState::Loading).apply(&mut doc, &parts).unwrap();

        assert!(hidden(&doc, "label"));
        assert!(!hidden(&doc, "spinner"));
        assert!(hidden(&doc, "tick"));
        assert!(doc.is_disabled("submit-btn").unwrap());
        assert_eq!(
            doc.attribute("submit-btn", "aria-busy").unwrap().as_deref(),
            Some("true")
        );
        assert!(doc.has_class("submit-btn", "opacity-75").unwrap());
        assert!(doc.has_class("submit-btn", "cursor-not-allowed").unwrap());
    }

    #[test]
    fn success_keeps_disabled_with_success_style() {
        let mut doc = document();
        let parts = ButtonParts::locate(&doc, "submit-btn").unwrap();

        ButtonView::of(ButtonState::Loading).apply(&mut doc, &parts).unwrap();
        ButtonView::of(ButtonState::Success).apply(&mut doc, &parts).unwrap();

        assert!(!hidden(&doc, "tick"));
        assert!(hidden(&doc, "spinner"));
        assert!(doc.is_disabled("submit-btn").unwrap());
        assert_eq!(
            doc.attribute("submit-btn", "aria-busy").unwrap().as_deref(),
            Some("false")
        );
        assert!(!doc.has_class("submit-btn", "opacity-75").unwrap());
        assert!(doc.has_class("submit-btn", "bg-green-600").unwrap());
    }

    #[test]
    fn error_reenables_and_default_clears_styling() {
        let mut doc = document();
        let parts = ButtonParts::locate(&doc, "submit-btn").unwrap();

        ButtonView::of(ButtonState::Error).apply(&mut doc, &parts).unwrap();
        assert!(!doc.is_disabled("submit-btn").unwrap());
        assert!(hidden(&doc, "label"));

        ButtonView::of(ButtonState::Success).apply(&mut doc, &parts).unwrap();
        ButtonView::of(ButtonState::Default).apply(&mut doc, &parts).unwrap();
        assert!(!hidden(&doc, "label"));
        assert!(!doc.is_disabled("submit-btn").unwrap());
        for class in ["opacity-75", "cursor-not-allowed", "bg-green-600", "hover:bg-green-700"] {
            assert!(!doc.has_class("submit-btn", class).unwrap(), "{class}");
        }
    }

    #[test]
    fn pointer_feedback_skips_disabled_button() {
        let mut doc = document();
        PointerFeedback::Enter.apply(&mut doc, "submit-btn").unwrap();
        assert!(doc.has_class("submit-btn", "scale-105").unwrap());
        PointerFeedback::Leave.apply(&mut doc, "submit-btn").unwrap();
        assert!(!doc.has_class("submit-btn", "scale-105").unwrap());

        doc.set_disabled("submit-btn", true).unwrap();
        PointerFeedback::Down.apply(&mut doc, "submit-btn").unwrap();
        assert!(!doc.has_class("submit-btn", "scale-95").unwrap());
    }
}
