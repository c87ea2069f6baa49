//! Flat rows derived from a list of sections.
//!
//! The flat sequence is the coordinate space drag gestures are expressed in:
//! every header becomes a row, followed by one row per element.

use crate::section::Section;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// What a flat row holds.
pub enum ItemKind<H, E> {
    /// A section header; never dragged.
    Header(H),
    /// A regular row belonging to the nearest header above it.
    Element(E),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A single flat row tagged with an id for UI diffing.
///
/// The id equals the row's position at the time the sequence was last built,
/// so it identifies a row only until the next move.
pub struct Item<H, E> {
    /// Position-derived identity, unique within one flattening.
    pub id: usize,
    /// Header or element payload.
    pub kind: ItemKind<H, E>,
}

impl<H, E> Item<H, E> {
    #[must_use]
    /// Whether this row is a section header.
    pub fn is_header(&self) -> bool {
        matches!(self.kind, ItemKind::Header(_))
    }

    #[must_use]
    /// Header payload, if this row is a header.
    pub fn header(&self) -> Option<&H> {
        match &self.kind {
            ItemKind::Header(header) => Some(header),
            ItemKind::Element(_) => None,
        }
    }

    #[must_use]
    /// Element payload, if this row is an element.
    pub fn element(&self) -> Option<&E> {
        match &self.kind {
            ItemKind::Header(_) => None,
            ItemKind::Element(element) => Some(element),
        }
    }
}

/// Interleaves each section's header with its elements and numbers the result.
pub(crate) fn flatten<H: Clone, E: Clone>(sections: &[Section<H, E>]) -> Vec<Item<H, E>> {
    let kinds = sections.iter().flat_map(|section| {
        std::iter::once(ItemKind::Header(section.header.clone())).chain(
            section
                .elements
                .iter()
                .map(|element| ItemKind::Element(element.clone())),
        )
    });
    number(kinds)
}

/// Assigns ids from scratch by enumeration order.
pub(crate) fn number<H, E>(kinds: impl IntoIterator<Item = ItemKind<H, E>>) -> Vec<Item<H, E>> {
    kinds
        .into_iter()
        .enumerate()
        .map(|(id, kind)| Item { id, kind })
        .collect()
}
