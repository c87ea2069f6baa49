//! Errors raised when a move breaks the caller contract.
//!
//! A rejected move leaves the list exactly as it was.

/// Reasons a move request is refused.
///
/// Indices and offsets are in rest space: flat positions minus one, since the
/// first row is pinned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A source index does not name a movable row.
    #[error("source index {index} is out of bounds for {len} movable rows")]
    IndexOutOfBounds {
        /// The offending rest-space index.
        index: usize,
        /// Number of rows after the pinned first row.
        len: usize,
    },

    /// The destination lies past the end of the list once the moved rows are lifted out.
    #[error("target offset {offset} is out of bounds (at most {max} after removal)")]
    OffsetOutOfBounds {
        /// The requested rest-space offset.
        offset: usize,
        /// Largest valid offset for this move.
        max: usize,
    },

    /// A source index names a section header.
    #[error("row at index {index} is a section header and cannot be moved")]
    HeaderNotMovable {
        /// Rest-space index of the header row.
        index: usize,
    },

    /// Rebuilding met an element with no header above it.
    #[error("element at flat position {position} has no section header above it")]
    OrphanElement {
        /// Flat position of the element.
        position: usize,
    },
}
