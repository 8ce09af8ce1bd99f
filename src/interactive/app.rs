//! TUI application state and logic

use crate::core::{GuessRecord, WORD_LEN, Word};
use crate::filter::{Session, filter_consistent};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a [Word],
    pub session: Session,
    pub input_mode: InputMode,
    pub word_buffer: String,
    pub hint_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What the next keystrokes mean
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the guessed word
    Word,
    /// Typing the feedback pattern for the word just entered
    Hints,
    /// Puzzle solved; waiting for new-game or quit
    Solved,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_completed: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            session: Session::new(),
            input_mode: InputMode::Word,
            word_buffer: String::new(),
            hint_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Type each guess you made, then the feedback it received.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Feedback: G = green, Y = yellow, - = gray".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// The words still consistent with every entered guess
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        filter_consistent(&self.session, self.words)
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.candidates().len()
    }

    /// Finalize the word buffer and move on to hint entry
    pub fn submit_word(&mut self) {
        match Word::new(self.word_buffer.as_str()) {
            Ok(_) => {
                self.input_mode = InputMode::Hints;
                self.add_message(
                    "Now enter the feedback row (G/Y/-)",
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&format!("{e}"), MessageStyle::Error),
        }
    }

    /// Pair the typed word with the typed hints and run the filter
    pub fn submit_hints(&mut self) {
        match GuessRecord::from_parts(&self.word_buffer, &self.hint_buffer) {
            Ok(record) => {
                let solved = record.is_solved();
                self.session.push(record);
                self.word_buffer.clear();
                self.hint_buffer.clear();

                if solved {
                    self.input_mode = InputMode::Solved;
                    let guess_count = self.session.len();
                    self.stats.puzzles_completed += 1;
                    if guess_count <= 6 {
                        self.stats.guess_distribution[guess_count] += 1;
                    }
                    self.add_message(
                        &format!("🎉 Solved in {guess_count} guesses!"),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
                    return;
                }

                self.input_mode = InputMode::Word;
                let remaining = self.candidates_count();
                if remaining == 0 {
                    self.add_message(
                        "No candidates remain - a hint row may be wrong. Ctrl-U undoes the last guess.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("{remaining} candidates remaining"),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => self.add_message(&format!("{e}"), MessageStyle::Error),
        }
    }

    pub fn new_puzzle(&mut self) {
        self.session.clear();
        self.word_buffer.clear();
        self.hint_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Word;
        self.add_message("New puzzle started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if let Some(dropped) = self.session.undo() {
            self.input_mode = InputMode::Word;
            self.add_message(
                &format!("Dropped '{}'", dropped.word().text()),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Shared shortcuts: quit, new puzzle, undo
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_puzzle(),
                    KeyCode::Char('u') => app.undo_last(),
                    _ => {}
                }
            } else {
                match app.input_mode {
                    InputMode::Solved => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.new_puzzle(),
                        _ => {}
                    },
                    InputMode::Word => match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                            if app.word_buffer.len() < WORD_LEN {
                                app.word_buffer.push(c.to_ascii_lowercase());
                            }
                        }
                        KeyCode::Backspace => {
                            app.word_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_word(),
                        _ => {}
                    },
                    InputMode::Hints => match key.code {
                        KeyCode::Esc => {
                            // Back out to word entry
                            app.input_mode = InputMode::Word;
                            app.hint_buffer.clear();
                        }
                        KeyCode::Char(c) if "GgYy-_".contains(c) => {
                            if app.hint_buffer.len() < WORD_LEN {
                                app.hint_buffer.push(c);
                            }
                        }
                        KeyCode::Backspace => {
                            app.hint_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_hints(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
