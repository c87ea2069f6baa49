//! The state machine bridging the reorder engine and the terminal front-end.
//!
//! The front-end plays the part of the drag gesture: a row is picked up, nudged around with the
//! keyboard and dropped. Every nudge is translated into one rest-space move on the engine, so the
//! list shown is always the engine's rebuilt state. The drag policy lives here: the first row and
//! header rows cannot be picked up, and nothing can be dropped above the first header.

use crate::config::Config;
use crate::formats::{self, Document};
use crate::reorder::ReorderList;
use crate::section::Heading;
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

#[derive(Clone, PartialEq, Debug)]
/// Tracks the lifecycle of a row being dragged.
///
/// ```text
/// None -> Selected -> Moved -> None (after save or cancel)
///           |                   ^
///           |___________________|
///                 (cancel)
/// ```
///
/// # Visual Feedback
///
/// - `None`: normal rendering, cursor row reversed
/// - `Selected`: orange, bold (row picked up)
/// - `Moved`: red, bold (unsaved changes)
pub enum MoveState {
    /// No row is picked up; arrows move the cursor.
    None,
    /// A row has been picked up but not moved yet.
    ///
    /// `Ctrl+↑/↓` move it by one row, `Ctrl+Home/End` send it to the top or bottom and `Esc`
    /// puts it back.
    Selected,
    /// The row has been moved and the new order is not yet written to disk.
    ///
    /// `:w` writes the document and returns to `None`; `Esc` restores the order from before the
    /// row was picked up.
    Moved,
}

#[derive(PartialEq, Debug)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Shows the sectioned list.
    List,
    /// Captures vim-style command input after ':' keystroke.
    Command,
}

#[derive(PartialEq, Debug)]
/// What the event loop should do after a command runs.
pub enum CommandOutcome {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Owns the reorder engine for one document plus the cursor and drag state around it.
pub struct AppState {
    /// The engine holding the document's rows and sections.
    pub list: ReorderList<Heading, String>,
    /// Document the list was loaded from and is saved back to.
    pub path: PathBuf,
    /// Preferences used when writing the document.
    pub config: Config,
    /// Flat row under the cursor.
    pub cursor: usize,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Drag lifecycle for visual feedback.
    pub move_state: MoveState,
    /// Flat row of the row being dragged, if any.
    pub moving_row: Option<usize>,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Flat row the dragged row was picked up from.
    origin: Option<usize>,
}

impl AppState {
    #[must_use]
    /// Wraps a document's sections in a reorder engine with the cursor on the first row.
    pub fn new(path: PathBuf, sections: Document, config: Config) -> Self {
        Self {
            list: ReorderList::new(sections),
            path,
            config,
            cursor: 0,
            current_view: View::List,
            move_state: MoveState::None,
            moving_row: None,
            command_buffer: String::new(),
            message: None,
            origin: None,
        }
    }

    // --- Navigation ---

    /// Moves the cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.list.len() {
            self.cursor += 1;
        }
    }

    #[must_use]
    /// Finds the next header row below the cursor.
    pub fn navigate_to_next_header(&self) -> Option<usize> {
        ((self.cursor + 1)..self.list.len()).find(|&row| self.list.items()[row].is_header())
    }

    #[must_use]
    /// Finds the nearest header row above the cursor.
    pub fn navigate_to_prev_header(&self) -> Option<usize> {
        (0..self.cursor)
            .rev()
            .find(|&row| self.list.items()[row].is_header())
    }

    #[must_use]
    /// Jumps to the first row.
    pub fn navigate_to_first(&self) -> Option<usize> {
        if self.list.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    #[must_use]
    /// Jumps to the last row.
    pub fn navigate_to_last(&self) -> Option<usize> {
        self.list.len().checked_sub(1)
    }

    // --- Row Movement ---

    /// Picks up the row under the cursor.
    ///
    /// Returns `false` and leaves the state alone if the row is the first row or a header.
    pub fn start_move(&mut self) -> bool {
        if !self.list.is_draggable(self.cursor) {
            self.message = Some("Headers stay in place".to_string());
            return false;
        }

        self.origin = Some(self.cursor);
        self.moving_row = Some(self.cursor);
        self.move_state = MoveState::Selected;
        self.message = None;
        true
    }

    /// Puts the list back the way it was when the row was picked up.
    ///
    /// The return trip is an ordinary move on the same engine, so the revision keeps counting
    /// and subscribers are notified of it.
    pub fn cancel_move(&mut self) {
        if let (Some(origin), Some(row)) = (self.origin.take(), self.moving_row) {
            if row != origin {
                // Drag it straight back: the other rows never changed relative order.
                if let Err(e) = self.list.move_items(&BTreeSet::from([row - 1]), origin - 1) {
                    log::warn!("could not return row {row} to {origin}: {e}");
                    self.message = Some(format!("Cancel failed: {e}"));
                }
            }
            self.cursor = origin;
        }
        self.moving_row = None;
        self.move_state = MoveState::None;
    }

    /// Move the dragged row up by one position.
    pub fn move_row_up(&mut self) -> bool {
        match self.moving_row {
            Some(row) => self.drop_at(row.saturating_sub(1)),
            None => false,
        }
    }

    /// Move the dragged row down by one position.
    pub fn move_row_down(&mut self) -> bool {
        match self.moving_row {
            Some(row) => self.drop_at(row + 1),
            None => false,
        }
    }

    /// Move the dragged row directly under the first header.
    pub fn move_row_to_top(&mut self) -> bool {
        self.drop_at(1)
    }

    /// Move the dragged row to the end of the list.
    pub fn move_row_to_bottom(&mut self) -> bool {
        match self.list.len().checked_sub(1) {
            Some(last) => self.drop_at(last),
            None => false,
        }
    }

    /// Drops the dragged row so that it ends up at flat row `target`.
    ///
    /// With the row lifted out, flat row `target` is rest offset `target - 1`; row 0 is refused
    /// because nothing may land above the first header.
    fn drop_at(&mut self, target: usize) -> bool {
        let Some(row) = self.moving_row else {
            return false;
        };
        if target == 0 || target == row || target >= self.list.len() {
            return false;
        }

        match self.list.move_items(&BTreeSet::from([row - 1]), target - 1) {
            Ok(()) => {
                self.moving_row = Some(target);
                self.cursor = target;
                self.move_state = MoveState::Moved;
                true
            }
            Err(err) => {
                self.message = Some(format!("Cannot move: {err}"));
                false
            }
        }
    }

    /// Writes the reordered document back to its file.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be rendered or written.
    pub fn save(&mut self) -> io::Result<()> {
        formats::save(&self.path, self.list.sections(), &self.config)?;
        self.origin = None;
        self.moving_row = None;
        self.move_state = MoveState::None;
        self.message = Some("Saved".to_string());
        Ok(())
    }

    /// Runs a vim-style command typed after ':'.
    pub fn execute_command(&mut self, cmd: &str) -> CommandOutcome {
        self.current_view = View::List;

        match cmd {
            "w" => {
                self.save_or_report();
                CommandOutcome::Continue
            }
            "x" | "wq" => {
                if self.save_or_report() {
                    CommandOutcome::Quit
                } else {
                    CommandOutcome::Continue
                }
            }
            "q" => {
                if self.move_state == MoveState::Moved {
                    self.message = Some("Unsaved changes (use :q! to discard)".to_string());
                    CommandOutcome::Continue
                } else {
                    CommandOutcome::Quit
                }
            }
            "q!" => CommandOutcome::Quit,
            _ => {
                self.message = Some(format!("Unknown command: {cmd}"));
                CommandOutcome::Continue
            }
        }
    }

    fn save_or_report(&mut self) -> bool {
        if self.move_state != MoveState::Moved {
            self.message = Some("Nothing to save".to_string());
            return true;
        }
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                self.message = Some(format!("Error saving: {e}"));
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
