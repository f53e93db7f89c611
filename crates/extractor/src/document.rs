//! Thin query layer over a parsed HTML page.
//!
//! Strategies only ever talk to [`HtmlDocument`] and [`Node`]. Every lookup
//! that misses returns `None` or an empty list, so a strategy cannot fail
//! halfway through a page.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use interface::RateError;

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses `source`. Only input that carries no markup at all is rejected;
    /// anything else is handed to the lenient HTML parser.
    pub fn parse(source: &str) -> Result<Self, RateError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(RateError::MalformedDocument("empty document".to_string()));
        }
        if !trimmed.contains('<') {
            return Err(RateError::MalformedDocument(
                "no markup in document".to_string(),
            ));
        }

        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            debug!("html parsed with {} recoverable errors", html.errors.len());
        }
        Ok(Self { html })
    }

    pub fn find_all(&self, css: &str) -> Vec<Node<'_>> {
        match selector(css) {
            Some(sel) => self.html.select(&sel).map(Node).collect(),
            None => Vec::new(),
        }
    }

    pub fn nth(&self, css: &str, n: usize) -> Option<Node<'_>> {
        let sel = selector(css)?;
        let found = self.html.select(&sel).nth(n).map(Node);
        found
    }

    pub fn first(&self, css: &str) -> Option<Node<'_>> {
        self.nth(css, 0)
    }
}

/// An element inside an [`HtmlDocument`].
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// Descendants matching `css`, in document order.
    pub fn find_all(&self, css: &str) -> Vec<Node<'a>> {
        match selector(css) {
            Some(sel) => self.0.select(&sel).map(Node).collect(),
            None => Vec::new(),
        }
    }

    pub fn nth(&self, css: &str, n: usize) -> Option<Node<'a>> {
        let sel = selector(css)?;
        let found = self.0.select(&sel).nth(n).map(Node);
        found
    }

    pub fn find(&self, css: &str) -> Option<Node<'a>> {
        self.nth(css, 0)
    }

    /// All text below this element with whitespace runs collapsed.
    pub fn text(&self) -> String {
        let raw: String = self.0.text().collect();
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text().contains(needle)
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            debug!("invalid selector {:?}: {:?}", css, e);
            None
        }
    }
}
