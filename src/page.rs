//! Page initialization.
//!
//! Each feature is set up on its own. A feature whose setup fails is
//! logged and left out; the rest of the page still works.

use crate::config::ContactConfig;
use crate::contact::{ContactError, ContactForm};
use crate::dom::{DocumentPort, DomError};
use crate::submit::Transport;
use crate::widgets::{
    next_card_index, prepare_cards, ActiveSectionTracker, CardKey, CounterTracker, NavLink,
    RevealTracker,
};
use serde::{Deserialize, Serialize};

/// Ids of the page elements each feature works on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageLayout {
    pub reveal: Vec<String>,
    /// `(link id, href)` pairs for in-page navigation.
    pub nav_links: Vec<(String, String)>,
    pub counters: Vec<String>,
    pub testimonials: Vec<String>,
    /// `None` when the page has no contact form.
    pub contact: Option<ContactConfig>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// Features of one page. A `None` feature failed to initialize or is not
/// on this page.
pub struct Page<T: Transport> {
    pub reveal: Option<RevealTracker>,
    pub navigation: Option<ActiveSectionTracker>,
    pub counters: Option<CounterTracker>,
    pub testimonials: Option<Vec<String>>,
    pub contact: Option<ContactForm<T>>,
}

impl<T: Transport> Page<T> {
    /// Set up every feature named in `layout`.
    pub fn init<P: DocumentPort + ?Sized>(port: &mut P, layout: &PageLayout, transport: T) -> Self {
        let reveal = report("reveal", RevealTracker::prepare(port, &layout.reveal));
        let navigation = report("navigation", navigation(port, &layout.nav_links));
        let counters = report(
            "counters",
            require_all(port, &layout.counters).map(|()| CounterTracker::new()),
        );
        let testimonials = report(
            "testimonials",
            prepare_cards(port, &layout.testimonials).map(|()| layout.testimonials.clone()),
        );
        let contact = match &layout.contact {
            Some(config) => report("contact", ContactForm::mount(port, transport, config.clone())),
            None => None,
        };

        Self {
            reveal,
            navigation,
            counters,
            testimonials,
            contact,
        }
    }

    /// Id of the testimonial card to focus after `key` on card `current`.
    pub fn card_to_focus(&self, current: &str, key: &str) -> Option<&str> {
        let cards = self.testimonials.as_ref()?;
        let key = CardKey::from_key(key)?;
        let index = cards.iter().position(|id| id == current)?;
        next_card_index(key, index, cards.len()).map(|i| cards[i].as_str())
    }
}

fn navigation<P: DocumentPort + ?Sized>(
    port: &P,
    links: &[(String, String)],
) -> Result<ActiveSectionTracker, DomError> {
    let ids: Vec<String> = links.iter().map(|(id, _)| id.clone()).collect();
    require_all(port, &ids)?;
    Ok(ActiveSectionTracker::new(
        links
            .iter()
            .map(|(id, href)| NavLink::new(id.clone(), href.clone()))
            .collect(),
    ))
}

fn require_all<P: DocumentPort + ?Sized>(port: &P, ids: &[String]) -> Result<(), DomError> {
    match ids.iter().find(|id| !port.contains(id)) {
        Some(missing) => Err(DomError::ElementNotFound {
            id: missing.clone(),
        }),
        None => Ok(()),
    }
}

/// Log the outcome of one feature's setup and keep it only on success.
fn report<R, E>(name: &str, result: Result<R, E>) -> Option<R>
where
    E: Into<PageError>,
{
    match result.map_err(Into::into) {
        Ok(feature) => {
            tracing::info!(feature = name, "feature initialized");
            Some(feature)
        }
        Err(err) => {
            tracing::error!(feature = name, error = %err, "feature failed to initialize");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementBuilder, MemoryDocument};
    use crate::submit::{FormPayload, TransportError, TransportResponse};
    use async_trait::async_trait;

    struct NoopTransport;

    #[async_trait]
    impl Transport for NoopTransport {
        async fn post_form(
            &self,
            _endpoint: &str,
            _payload: &FormPayload,
        ) -> Result<TransportResponse, TransportError> {
            Ok(TransportResponse { status: 200 })
        }
    }

    fn document() -> MemoryDocument {
        MemoryDocument::new()
            .with("services", ElementBuilder::new("section"))
            .with("nav-services", ElementBuilder::new("a").attr("href", "#services"))
            .with("t1", ElementBuilder::new("div"))
            .with("t2", ElementBuilder::new("div"))
            .with("t3", ElementBuilder::new("div"))
            .with("contact-form", ElementBuilder::new("form"))
    }

    fn layout() -> PageLayout {
        PageLayout {
            reveal: vec!["services".to_string()],
            nav_links: vec![("nav-services".to_string(), "#services".to_string())],
            counters: vec![],
            testimonials: vec!["t1".to_string(), "t2".to_string(), "t3".to_string()],
            contact: Some(ContactConfig::default()),
        }
    }

    #[test]
    fn every_feature_initializes() {
        let mut doc = document();
        let page = Page::init(&mut doc, &layout(), NoopTransport);

        assert!(page.reveal.is_some());
        assert!(page.navigation.is_some());
        assert!(page.counters.is_some());
        assert!(page.testimonials.is_some());
        assert!(page.contact.is_some());
    }

    #[test]
    fn failing_feature_is_isolated() {
        let mut doc = document();
        let mut layout = layout();
        layout.testimonials.push("missing-card".to_string());
        layout.counters.push("missing-counter".to_string());
        layout.contact = Some(ContactConfig {
            form_id: "no-such-form".to_string(),
            ..ContactConfig::default()
        });

        let page = Page::init(&mut doc, &layout, NoopTransport);

        assert!(page.testimonials.is_none());
        assert!(page.counters.is_none());
        assert!(page.contact.is_none());
        assert!(page.reveal.is_some());
        assert!(page.navigation.is_some());
    }

    #[test]
    fn card_focus_follows_keys() {
        let mut doc = document();
        let page = Page::init(&mut doc, &layout(), NoopTransport);

        assert_eq!(page.card_to_focus("t3", "ArrowRight"), Some("t1"));
        assert_eq!(page.card_to_focus("t1", "ArrowLeft"), Some("t3"));
        assert_eq!(page.card_to_focus("t2", "End"), Some("t3"));
        assert_eq!(page.card_to_focus("t2", "Tab"), None);
        assert_eq!(page.card_to_focus("nope", "Home"), None);
    }

    #[test]
    fn layout_from_json() {
        let layout: PageLayout =
            serde_json::from_str(r##"{"reveal": ["a"], "nav_links": [["l", "#a"]]}"##).unwrap();
        assert_eq!(layout.nav_links, vec![("l".to_string(), "#a".to_string())]);
        assert!(layout.contact.is_none());
    }
}
