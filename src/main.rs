//! sectionsort: reorder the rows of a sectioned list document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sectionsort::formats::json::JsonFormat;
use sectionsort::formats::markdown::MarkdownFormat;
use sectionsort::formats::Format;
use sectionsort::{app_state, cli::MoveSpec, config, formats, ui, ReorderList};
use simplelog::{LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sectionsort")]
#[command(about = "Drag-to-reorder engine for sectioned lists", long_about = None)]
struct Args {
    /// Markdown or JSON document to reorder
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Apply a move without opening the UI: FROM[,FROM...]:TO in rest-space indices
    #[arg(long = "move", value_name = "FROM:TO")]
    moves: Vec<MoveSpec>,

    /// Print the result as JSON instead of markdown
    #[arg(long)]
    json: bool,

    /// Write the result back to PATH instead of printing it
    #[arg(long)]
    write: bool,

    /// Bullet used for list items when writing markdown
    #[arg(long)]
    marker: Option<String>,

    /// Heading depth for headers without one
    #[arg(long)]
    level: Option<usize>,

    /// Append debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(marker) = args.marker {
        cfg.list_marker = marker;
    }
    if let Some(level) = args.level {
        cfg.heading_level = level;
    }

    if let Some(log_path) = &args.log {
        let log_file = File::create(log_path)?;
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
            .map_err(io::Error::other)?;
    }

    let sections = formats::load(&args.path, &cfg)?;

    if args.moves.is_empty() {
        let state = app_state::AppState::new(args.path, sections, cfg);
        return run_tui(state);
    }

    let mut list = ReorderList::new(sections);
    for spec in &args.moves {
        list.move_items(&spec.from, spec.to).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("move {spec}: {e}"))
        })?;
    }

    if args.write {
        formats::save(&args.path, list.sections(), &cfg)?;
    } else {
        let text = if args.json {
            JsonFormat.render(list.sections(), &cfg)?
        } else {
            MarkdownFormat.render(list.sections(), &cfg)?
        };
        println!("{}", text.trim_end());
    }

    Ok(())
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let moving = app.move_state != app_state::MoveState::None;

        match app.current_view {
            app_state::View::List => match key.code {
                KeyCode::Char('q') if !moving => {
                    if app.execute_command("q") == app_state::CommandOutcome::Quit {
                        return Ok(());
                    }
                }
                KeyCode::Up => {
                    if ctrl {
                        // Ctrl+Up: pick up the row, or move it up
                        if moving {
                            app.move_row_up();
                        } else {
                            app.start_move();
                        }
                    } else if shift {
                        if let Some(row) = app.navigate_to_prev_header() {
                            app.cursor = row;
                        }
                    } else if !moving {
                        app.cursor_up();
                    }
                }
                KeyCode::Down => {
                    if ctrl {
                        if moving {
                            app.move_row_down();
                        } else {
                            app.start_move();
                        }
                    } else if shift {
                        if let Some(row) = app.navigate_to_next_header() {
                            app.cursor = row;
                        }
                    } else if !moving {
                        app.cursor_down();
                    }
                }
                KeyCode::Home => {
                    if ctrl && moving {
                        app.move_row_to_top();
                    } else if let Some(first) = app.navigate_to_first() {
                        app.cursor = first;
                    }
                }
                KeyCode::End => {
                    if ctrl && moving {
                        app.move_row_to_bottom();
                    } else if let Some(last) = app.navigate_to_last() {
                        app.cursor = last;
                    }
                }
                KeyCode::Esc => {
                    if moving {
                        app.cancel_move();
                    }
                }
                KeyCode::Char(':') => {
                    app.current_view = app_state::View::Command;
                    app.command_buffer.clear();
                    app.message = None;
                }
                _ => {}
            },
            app_state::View::Command => match key.code {
                KeyCode::Char(c) => {
                    app.command_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.command_buffer.pop();
                }
                KeyCode::Enter => {
                    let cmd = std::mem::take(&mut app.command_buffer);
                    if app.execute_command(&cmd) == app_state::CommandOutcome::Quit {
                        return Ok(());
                    }
                }
                KeyCode::Esc => {
                    app.current_view = app_state::View::List;
                    app.command_buffer.clear();
                }
                _ => {}
            },
        }
    }
}
