//! sectionsort: drag-to-reorder engine for sectioned lists.
//!
//! A list of sections (a header plus its elements) is flattened into rows, rows are relocated the
//! way a drag-and-drop gesture would move them, and the rows are regrouped into sections again.
//! The first header is pinned and headers never move, so a dropped row always joins the section
//! of the nearest header above it.
//!
//! ```
//! use sectionsort::{ReorderList, Section};
//! use std::collections::BTreeSet;
//!
//! let mut list = ReorderList::new(vec![
//!     Section::new("Active", vec!['A', 'B', 'C']),
//!     Section::new("Inactive", vec!['D', 'E', 'F']),
//! ]);
//!
//! // Drop C (rest index 2) just under the "Inactive" header.
//! list.move_items(&BTreeSet::from([2]), 3).unwrap();
//!
//! assert_eq!(list.sections()[0].elements, vec!['A', 'B']);
//! assert_eq!(list.sections()[1].elements, vec!['C', 'D', 'E', 'F']);
//! ```

pub mod app_state;
pub mod cli;
pub mod config;
pub mod error;
pub mod formats;
pub mod item;
pub mod reorder;
pub mod section;
pub mod ui;

pub use error::MoveError;
pub use item::{Item, ItemKind};
pub use reorder::{ReorderList, SubscriptionId};
pub use section::{Heading, Section};
