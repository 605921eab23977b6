//! Element lookup over a rendered page.
//!
//! A thin layer on top of `scraper` that turns "no such element" into the
//! explicit [`Error::ElementNotFound`] kind instead of a silent `None`, so
//! callers can tell an absent optional sub-field apart from a broken selector.

use crate::errors::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// One parsed page. Owns the DOM; [`Node`]s borrow from it.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// First element matching `selector`, or [`Error::ElementNotFound`].
    pub fn find_one(&self, selector: &str) -> Result<Node<'_>> {
        let compiled = compile(selector)?;
        self.html
            .select(&compiled)
            .next()
            .map(Node)
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    /// All elements matching `selector`, in document order. Absence is an
    /// empty vector, not an error.
    pub fn find_many(&self, selector: &str) -> Result<Vec<Node<'_>>> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).map(Node).collect())
    }
}

/// A handle on one element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First descendant matching `selector`, or [`Error::ElementNotFound`].
    pub fn find_child(&self, selector: &str) -> Result<Node<'a>> {
        let compiled = compile(selector)?;
        self.0
            .select(&compiled)
            .next()
            .map(Node)
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    /// The element's text content, with text nodes joined and trimmed.
    pub fn text(&self) -> String {
        self.0
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// The element's outer HTML, used for diagnostic snapshots.
    pub fn html(&self) -> String {
        self.0.html()
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector(format!("{selector}: {e}")))
}
