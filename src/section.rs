//! Section representation for sectioned lists.
//!
//! A section pairs a header with the ordered elements listed beneath it. The
//! reorder engine never looks inside either; it only stores them and tracks
//! their position, so both are left generic.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A header followed by the ordered elements grouped under it.
pub struct Section<H, E> {
    /// Value shown as the section's header row.
    pub header: H,
    /// Rows belonging to this section, in display order.
    pub elements: Vec<E>,
}

impl<H, E> Section<H, E> {
    #[must_use]
    /// Pairs a header with its elements. Any elements are accepted, including none.
    pub fn new(header: H, elements: Vec<E>) -> Self {
        Self { header, elements }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Markdown heading used as the header type when sections come from a document.
pub struct Heading {
    /// ATX depth: 1 for `#`, 2 for `##` and so on; 0 when unknown.
    #[serde(default)]
    pub level: usize,
    /// Heading text without the leading markers.
    pub title: String,
    /// Markdown kept verbatim between the heading line and the section's list.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
}

impl Heading {
    #[must_use]
    /// Builds a heading at the given depth.
    pub fn new(level: usize, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: String::new(),
        }
    }

    #[must_use]
    /// Attaches the text written between the heading and its list.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
