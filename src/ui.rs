//! The UI renders the application state into a sectioned list.
//!
//! Headers render bold and flush left, elements indented under them. The dragged row is coloured
//! by its move state and the bottom bar shows either key help, a status message or the command
//! being typed.

use crate::app_state::{AppState, MoveState, View};
use crate::item::ItemKind;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the list and the bottom bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    draw_list(f, app, chunks[0]);

    let bar = if app.current_view == View::Command {
        Paragraph::new(format!(":{}", app.command_buffer))
            .block(Block::default().borders(Borders::ALL).title("Command"))
    } else {
        Paragraph::new(help_text(app)).block(Block::default().borders(Borders::ALL))
    };
    f.render_widget(bar, chunks[1]);
}

fn draw_list(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let rows: Vec<ListItem> = app
        .list
        .items()
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let line = match &item.kind {
                ItemKind::Header(heading) => Line::from(Span::styled(
                    heading.title.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                ItemKind::Element(text) => {
                    Line::from(vec![Span::raw("  • "), Span::raw(text.clone())])
                }
            };

            ListItem::new(line).style(row_style(app, row))
        })
        .collect();

    let title = match app.move_state {
        MoveState::None => app.path.display().to_string(),
        MoveState::Selected | MoveState::Moved => format!("{} (MOVING)", app.path.display()),
    };

    let list = List::new(rows).block(Block::default().borders(Borders::ALL).title(title));
    let mut state = ListState::default().with_selected(Some(app.cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn row_style(app: &AppState, row: usize) -> Style {
    if app.moving_row == Some(row) {
        match app.move_state {
            MoveState::Selected => Style::default()
                .fg(Color::Rgb(255, 165, 0)) // Orange
                .add_modifier(Modifier::BOLD),
            MoveState::Moved => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            MoveState::None => Style::default().add_modifier(Modifier::REVERSED),
        }
    } else if row == app.cursor {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn help_text(app: &AppState) -> String {
    if let Some(ref msg) = app.message {
        return msg.clone();
    }
    if app.move_state == MoveState::None {
        "↑/↓: Navigate | Shift+↑/↓: Headers | Ctrl+↑/↓: Pick Up | :w Save | q: Quit".to_string()
    } else {
        "Ctrl+↑/↓: Move | Ctrl+Home/End: Top/Bottom | :w Save | Esc: Cancel".to_string()
    }
}
