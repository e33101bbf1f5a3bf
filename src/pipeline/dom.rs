//! Document abstraction used to inject the panel into rendered ePI HTML.
//!
//! The lens only needs two capabilities: insert a fragment as the first
//! child of the body (or of the root when there is no body), and serialize
//! the whole document. Hosts with a real DOM plug in their own provider.

use std::sync::LazyLock;

use regex::Regex;

use super::LensError;

/// Skeleton used when the host supplies no HTML at all.
pub const EMPTY_DOCUMENT: &str = "<html><head></head><body></body></html>";

static BODY_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body\b[^>]*>").expect("valid regex"));
static ROOT_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html\b[^>]*>").expect("valid regex"));

/// A parsed, mutable HTML document.
pub trait HtmlDocument {
    /// Insert `fragment` as the first child of `<body>`, falling back to the
    /// document root.
    fn prepend_to_body(&mut self, fragment: &str) -> Result<(), LensError>;

    /// Serialize the whole document back to HTML.
    fn serialize(&self) -> String;
}

/// Obtains a document abstraction from an HTML string.
pub trait DocumentProvider {
    fn load(&self, html: &str) -> Result<Box<dyn HtmlDocument>, LensError>;
}

/// Default provider operating directly on the markup string.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupProvider;

impl DocumentProvider for MarkupProvider {
    fn load(&self, html: &str) -> Result<Box<dyn HtmlDocument>, LensError> {
        Ok(Box::new(MarkupDocument::parse(html)))
    }
}

/// HTML held as text; insertion points are located by tag pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDocument {
    html: String,
}

impl MarkupDocument {
    pub fn parse(html: &str) -> Self {
        let html = if html.trim().is_empty() {
            EMPTY_DOCUMENT.to_string()
        } else {
            html.to_string()
        };
        Self { html }
    }

    /// Byte offset just after the `<body>` (or `<html>`) opening tag.
    fn insertion_offset(&self) -> usize {
        BODY_OPEN_RE
            .find(&self.html)
            .or_else(|| ROOT_OPEN_RE.find(&self.html))
            .map(|m| m.end())
            .unwrap_or(0)
    }
}

impl HtmlDocument for MarkupDocument {
    fn prepend_to_body(&mut self, fragment: &str) -> Result<(), LensError> {
        let offset = self.insertion_offset();
        self.html.insert_str(offset, fragment);
        Ok(())
    }

    fn serialize(&self) -> String {
        self.html.clone()
    }
}
