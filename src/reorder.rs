//! The reorder engine: flatten sections, relocate rows, rebuild sections.
//!
//! A drag gesture arrives as a set of row indices and a destination offset,
//! both in rest space (flat positions with the pinned first header left out).
//! The engine relocates those rows within the flat sequence and then regroups
//! the sequence into sections, so a row dropped below another header joins
//! that header's section.
//!
//! ```text
//! sections ──flatten──▶ items ──relocate(rest)──▶ items' ──rebuild──▶ sections'
//! ```
//!
//! All validation happens before anything is replaced, so a rejected move
//! leaves both views untouched.

use crate::error::MoveError;
use crate::item::{flatten, number, Item, ItemKind};
use crate::section::Section;
use std::collections::BTreeSet;
use std::fmt;

/// Handle returned by [`ReorderList::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener<H, E> = Box<dyn FnMut(&[Item<H, E>], &[Section<H, E>])>;

/// Owns a list of sections and the flat rows derived from them.
///
/// The two views are kept consistent: `sections` is always the regrouping of
/// `items`. Callers read both through slices and change them only through
/// [`ReorderList::move_items`].
pub struct ReorderList<H, E> {
    items: Vec<Item<H, E>>,
    sections: Vec<Section<H, E>>,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener<H, E>)>,
    next_subscription: usize,
}

impl<H: Clone, E: Clone> ReorderList<H, E> {
    #[must_use]
    /// Stores the sections as given and flattens them into numbered rows.
    pub fn new(sections: Vec<Section<H, E>>) -> Self {
        let items = flatten(&sections);
        Self {
            items,
            sections,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Moves the rows at `from` to `to`, then regroups the rows into sections.
    ///
    /// Both arguments are in rest space. The rows named by `from` are lifted
    /// out keeping their relative order and reinserted as one block before the
    /// row that sits at `to` once they are gone; `to` equal to the remaining
    /// row count appends them at the end.
    ///
    /// An empty list accepts any request and does nothing. An empty `from`
    /// is checked like any other request but changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the list unchanged, if:
    /// - an index in `from` is past the last movable row
    /// - an index in `from` names a header row
    /// - `to` is past the end of the list with the moved rows removed
    pub fn move_items(&mut self, from: &BTreeSet<usize>, to: usize) -> Result<(), MoveError> {
        let Some((first, rest)) = self.items.split_first() else {
            return Ok(());
        };

        if let Err(err) = check_move(rest, from, to) {
            log::warn!("rejected move of {from:?} to {to}: {err}");
            return Err(err);
        }

        if from.is_empty() {
            return Ok(());
        }

        let mut moved = Vec::with_capacity(from.len());
        let mut kept = Vec::with_capacity(rest.len() - from.len());
        for (index, item) in rest.iter().enumerate() {
            if from.contains(&index) {
                moved.push(item.kind.clone());
            } else {
                kept.push(item.kind.clone());
            }
        }
        kept.splice(to..to, moved);

        let items = number(std::iter::once(first.kind.clone()).chain(kept));
        let sections = rebuild(&items)?;

        log::debug!(
            "moved {} row(s) to offset {to}: {} rows in {} sections",
            from.len(),
            items.len(),
            sections.len()
        );

        self.items = items;
        self.sections = sections;
        self.revision += 1;
        self.notify();
        Ok(())
    }

    /// Registers a callback run after every applied move.
    ///
    /// The callback sees the fully rebuilt rows and sections. Rejected moves
    /// and requests that change nothing do not trigger it.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Item<H, E>], &[Section<H, E>]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.items, &self.sections);
        }
    }
}

impl<H, E> ReorderList<H, E> {
    #[must_use]
    /// Flat rows, headers interleaved with elements.
    pub fn items(&self) -> &[Item<H, E>] {
        &self.items
    }

    #[must_use]
    /// Sections regrouped from the current rows.
    pub fn sections(&self) -> &[Section<H, E>] {
        &self.sections
    }

    #[must_use]
    /// Consumes the list, keeping only its sections.
    pub fn into_sections(self) -> Vec<Section<H, E>> {
        self.sections
    }

    #[must_use]
    /// Total number of flat rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    /// Whether there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    /// Number of rows after the pinned first row; the size of rest space.
    pub fn rest_len(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    #[must_use]
    /// Number of applied moves so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    /// Whether the flat row may be picked up by a drag.
    ///
    /// The first row and every header row stay put.
    pub fn is_draggable(&self, row: usize) -> bool {
        row > 0 && self.items.get(row).is_some_and(|item| !item.is_header())
    }

    #[must_use]
    /// Index of the section the flat row belongs to.
    pub fn section_index(&self, row: usize) -> Option<usize> {
        if row >= self.items.len() {
            return None;
        }
        self.items[..=row]
            .iter()
            .filter(|item| item.is_header())
            .count()
            .checked_sub(1)
    }
}

impl<H: fmt::Debug, E: fmt::Debug> fmt::Debug for ReorderList<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderList")
            .field("items", &self.items)
            .field("sections", &self.sections)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn check_move<H, E>(rest: &[Item<H, E>], from: &BTreeSet<usize>, to: usize) -> Result<(), MoveError> {
    for &index in from {
        match rest.get(index) {
            None => {
                return Err(MoveError::IndexOutOfBounds {
                    index,
                    len: rest.len(),
                })
            }
            Some(item) if item.is_header() => return Err(MoveError::HeaderNotMovable { index }),
            Some(_) => {}
        }
    }

    let max = rest.len() - from.len();
    if to > max {
        return Err(MoveError::OffsetOutOfBounds { offset: to, max });
    }
    Ok(())
}

/// Regroups flat rows into sections: each header closes the section before it.
pub(crate) fn rebuild<H: Clone, E: Clone>(
    items: &[Item<H, E>],
) -> Result<Vec<Section<H, E>>, MoveError> {
    let mut sections = Vec::new();
    let mut pending: Option<Section<H, E>> = None;

    for (position, item) in items.iter().enumerate() {
        match &item.kind {
            ItemKind::Header(header) => {
                if let Some(done) = pending.replace(Section::new(header.clone(), Vec::new())) {
                    sections.push(done);
                }
            }
            ItemKind::Element(element) => match pending.as_mut() {
                Some(section) => section.elements.push(element.clone()),
                None => return Err(MoveError::OrphanElement { position }),
            },
        }
    }

    sections.extend(pending);
    Ok(sections)
}

#[cfg(test)]
#[path = "tests/reorder.rs"]
mod tests;
