use super::{AppState, CommandOutcome, MoveState};
use crate::config::Config;
use crate::section::{Heading, Section};
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

fn board() -> Vec<Section<Heading, String>> {
    vec![
        Section::new(
            Heading::new(2, "Active"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
        ),
        Section::new(
            Heading::new(2, "Inactive"),
            vec!["D".to_string(), "E".to_string(), "F".to_string()],
        ),
    ]
}

fn titles(app: &AppState) -> Vec<Vec<&str>> {
    app.list
        .sections()
        .iter()
        .map(|s| s.elements.iter().map(String::as_str).collect())
        .collect()
}

fn app() -> AppState {
    AppState::new(PathBuf::from("board.md"), board(), Config::default())
}

#[test]
fn test_headers_cannot_be_picked_up() {
    let mut app = app();

    app.cursor = 0;
    assert!(!app.start_move());
    app.cursor = 4;
    assert!(!app.start_move());

    assert_eq!(app.move_state, MoveState::None);
    assert_eq!(app.moving_row, None);
    assert!(app.message.is_some());
}

#[test]
fn test_row_moves_down_across_header() {
    let mut app = app();
    app.cursor = 3; // C

    assert!(app.start_move());
    assert_eq!(app.move_state, MoveState::Selected);

    assert!(app.move_row_down());
    assert_eq!(titles(&app), vec![vec!["A", "B"], vec!["C", "D", "E", "F"]]);
    assert_eq!(app.moving_row, Some(4));
    assert_eq!(app.cursor, 4);
    assert_eq!(app.move_state, MoveState::Moved);
}

#[test]
fn test_row_moves_up_into_previous_section() {
    let mut app = app();
    app.cursor = 5; // D

    app.start_move();
    assert!(app.move_row_up());

    assert_eq!(titles(&app), vec![vec!["A", "B", "C", "D"], vec!["E", "F"]]);
    assert_eq!(app.moving_row, Some(4));
}

#[test]
fn test_row_stops_below_first_header() {
    let mut app = app();
    app.cursor = 2; // B

    app.start_move();
    assert!(app.move_row_up());
    assert!(!app.move_row_up(), "row 0 belongs to the first header");

    assert_eq!(titles(&app), vec![vec!["B", "A", "C"], vec!["D", "E", "F"]]);
    assert_eq!(app.moving_row, Some(1));
}

#[test]
fn test_top_and_bottom() {
    let mut app = app();
    app.cursor = 6; // E

    app.start_move();
    assert!(app.move_row_to_top());
    assert_eq!(titles(&app), vec![vec!["E", "A", "B", "C"], vec!["D", "F"]]);

    assert!(app.move_row_to_bottom());
    assert_eq!(titles(&app), vec![vec!["A", "B", "C"], vec!["D", "F", "E"]]);
    assert!(!app.move_row_down());
}

#[test]
fn test_cancel_restores_order_and_cursor() {
    let mut app = app();
    app.cursor = 2;

    app.start_move();
    app.move_row_to_bottom();
    app.cancel_move();

    assert_eq!(titles(&app), vec![vec!["A", "B", "C"], vec!["D", "E", "F"]]);
    assert_eq!(app.cursor, 2);
    assert_eq!(app.move_state, MoveState::None);
    assert!(!app.move_row_up(), "nothing is picked up after cancel");
}

#[test]
fn test_cancel_keeps_revision_and_subscribers() {
    let mut app = app();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    app.list.subscribe(move |_, sections| {
        sink.borrow_mut().push(sections[0].elements.len());
    });
    app.cursor = 1;

    app.start_move();
    app.move_row_down();
    app.move_row_down();
    let revision = app.list.revision();
    app.cancel_move();

    assert_eq!(titles(&app), vec![vec!["A", "B", "C"], vec!["D", "E", "F"]]);
    assert_eq!(app.cursor, 1);
    assert_eq!(app.list.revision(), revision + 1);
    assert_eq!(seen.borrow().len(), 3, "the return trip is reported like any move");
}

#[test]
fn test_cancel_without_moving_changes_nothing() {
    let mut app = app();
    app.cursor = 5;

    app.start_move();
    app.cancel_move();

    assert_eq!(titles(&app), vec![vec!["A", "B", "C"], vec!["D", "E", "F"]]);
    assert_eq!(app.list.revision(), 0);
    assert_eq!(app.cursor, 5);
}

#[test]
fn test_header_navigation() {
    let mut app = app();
    app.cursor = 2;

    assert_eq!(app.navigate_to_next_header(), Some(4));
    assert_eq!(app.navigate_to_prev_header(), Some(0));
    app.cursor = 4;
    assert_eq!(app.navigate_to_next_header(), None);
    assert_eq!(app.navigate_to_last(), Some(7));

    app.cursor = 7;
    app.cursor_down();
    assert_eq!(app.cursor, 7);
    app.cursor = 0;
    app.cursor_up();
    assert_eq!(app.cursor, 0);
}

#[test]
fn test_write_command_saves_document() {
    let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
    writeln!(file, "placeholder").unwrap();
    let mut app = AppState::new(file.path().to_path_buf(), board(), Config::default());

    app.cursor = 3;
    app.start_move();
    app.move_row_down();

    assert_eq!(app.execute_command("q"), CommandOutcome::Continue);
    assert_eq!(app.execute_command("w"), CommandOutcome::Continue);
    assert_eq!(app.move_state, MoveState::None);
    assert_eq!(app.message.as_deref(), Some("Saved"));

    let content = fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        content,
        "## Active\n\n- A\n- B\n\n## Inactive\n\n- C\n- D\n- E\n- F\n"
    );

    assert_eq!(app.execute_command("q"), CommandOutcome::Quit);
}

#[test]
fn test_unknown_and_force_quit_commands() {
    let mut app = app();

    assert_eq!(app.execute_command("zz"), CommandOutcome::Continue);
    assert_eq!(app.message.as_deref(), Some("Unknown command: zz"));
    assert_eq!(app.execute_command("w"), CommandOutcome::Continue);
    assert_eq!(app.message.as_deref(), Some("Nothing to save"));
    assert_eq!(app.execute_command("q!"), CommandOutcome::Quit);
}
