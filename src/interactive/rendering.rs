//! TUI rendering with ratatui
//!
//! Draws the board grid, the tinted on-screen keyboard, and the status bar.

use super::app::App;
use crate::engine::{CellState, GameStatus, GuessEngine, LetterSummary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let rows = app.engine.rows() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Length(rows + 2), // Board
            Constraint::Length(5),        // Keyboard
            Constraint::Min(3),           // Status / share block
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.engine, chunks[1]);
    render_keyboard(f, &app.engine.letter_summary(), chunks[2]);
    render_status(f, &app.engine, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(state: CellState, active: bool) -> Style {
    let style = match state {
        CellState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        CellState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        CellState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellState::Untested => Style::default().fg(Color::White),
    };

    if active {
        style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    } else {
        style
    }
}

fn render_board(f: &mut Frame, engine: &GuessEngine, area: Rect) {
    let mut lines = Vec::with_capacity(engine.rows());

    for row in 0..engine.rows() {
        let mut spans = Vec::with_capacity(engine.columns() * 2);

        for col in 0..engine.columns() {
            let letter = engine
                .letter_at(row, col)
                .map_or(' ', |ch| ch.to_ascii_uppercase());
            let style = cell_style(engine.classify(row, col), engine.is_active_cell(row, col));

            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, summary: &LetterSummary, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let style = cell_style(summary.state_of(letter), false);
                    [
                        Span::styled(letter.to_ascii_uppercase().to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, engine: &GuessEngine, area: Rect) {
    let mut lines = Vec::new();

    match engine.status() {
        GameStatus::Playing => {
            lines.push(Line::from(
                "Type letters · Enter submits · Backspace deletes · Esc quits",
            ));
        }
        GameStatus::Won => {
            lines.push(Line::from(Span::styled(
                format!("🎉 You won in {}! ", engine.current_row()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            push_share_block(&mut lines, engine);
        }
        GameStatus::Lost => {
            lines.push(Line::from(Span::styled(
                format!(
                    "The word was {}. Better luck next time!",
                    engine.target().text().to_uppercase()
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            push_share_block(&mut lines, engine);
        }
    }

    let status = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn push_share_block(lines: &mut Vec<Line>, engine: &GuessEngine) {
    lines.push(Line::from("Share your result:"));
    for row in engine.share_text().lines() {
        lines.push(Line::from(row.to_string()));
    }
    lines.push(Line::from("'n' = new game · 'q' = quit"));
}
