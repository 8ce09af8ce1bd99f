//! TUI rendering with ratatui
//!
//! Draws the guess grid, the candidate panel, and the input line.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Hint, WORD_LEN};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Guess grid + messages
            Constraint::Percentage(55), // Candidates
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_candidates(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE HELPER - which words still fit?")
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

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Guess grid
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

const fn hint_style(hint: Hint) -> Style {
    match hint {
        Hint::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        Hint::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Hint::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for record in app.session.records() {
        let mut spans = vec![Span::raw(" ")];
        for i in 0..WORD_LEN {
            let letter = (record.word().char_at(i) as char).to_ascii_uppercase();
            spans.push(Span::styled(
                format!(" {letter} "),
                hint_style(record.hints().at(i)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // The row being typed, letters not yet scored
    if !app.word_buffer.is_empty() || app.input_mode == InputMode::Hints {
        let mut spans = vec![Span::raw(" ")];
        for i in 0..WORD_LEN {
            let letter = app
                .word_buffer
                .as_bytes()
                .get(i)
                .map_or(' ', |b| (*b as char).to_ascii_uppercase());
            let style = match app.hint_buffer.as_bytes().get(i) {
                Some(b'G' | b'g') => hint_style(Hint::Correct),
                Some(b'Y' | b'y') => hint_style(Hint::Present),
                Some(b'-' | b'_') => hint_style(Hint::Absent),
                _ => Style::default().fg(Color::White).bg(Color::Black),
            };
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        lines.push(Line::from(" Type your first guess..."));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.candidates();
    let count = candidates.len();

    // Fit as many words per row as the panel width allows
    let per_row = ((usize::from(area.width).saturating_sub(2)) / 7).max(1);
    let visible_rows = usize::from(area.height).saturating_sub(3);

    let mut lines = vec![Line::from(Span::styled(
        format!("{count} candidates"),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];

    for row in candidates.chunks(per_row).take(visible_rows) {
        let text = row
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(format!(" {text}")));
    }

    if count > per_row * visible_rows {
        let shown = per_row * visible_rows;
        lines.push(Line::from(Span::styled(
            format!(" ... and {} more", count - shown),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! | Press 'n' for a new puzzle or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Word => (
            " Type the word you guessed (5 letters), then Enter ",
            app.word_buffer.clone(),
            Color::Cyan,
        ),
        InputMode::Hints => (
            " Enter feedback (G=Green Y=Yellow -=Gray), then Enter | ESC to re-type word ",
            app.hint_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let puzzles = Paragraph::new(format!("Puzzles solved: {}", app.stats.puzzles_completed))
        .alignment(Alignment::Center);
    f.render_widget(puzzles, chunks[0]);

    let guesses = Paragraph::new(format!("Guesses entered: {}", app.session.len()))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let help = Paragraph::new("Ctrl-N: New puzzle | Ctrl-U: Undo | Ctrl-C/ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
