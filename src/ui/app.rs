//! Viewer application state and event loop

use crate::compiler::emitter::Emitter;
use crate::compiler::errors::CompileError;
use crate::compiler::lexer::Lexer;
use crate::compiler::parse::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// Result of compiling the viewed program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Compiled {
        code: String,
        variables: usize,
        labels: usize,
    },
    Failed {
        message: String,
    },
}

impl Outcome {
    /// Compile `source`, keeping the counts shown in the status bar.
    pub fn from_source(source: &str) -> Self {
        match compile_counted(source) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failed {
                message: err.to_string(),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Compiled { .. })
    }
}

fn compile_counted(source: &str) -> Result<Outcome, CompileError> {
    let mut emitter = Emitter::new();
    let mut parser = Parser::new(Lexer::new(source), &mut emitter)?;
    parser.program()?;
    let variables = parser.declared_symbols().len();
    let labels = parser.declared_labels().len();

    Ok(Outcome::Compiled {
        code: emitter.finalize(),
        variables,
        labels,
    })
}

/// The main application state
pub struct App {
    /// The program being viewed
    pub source_code: String,

    /// Generated C, or the compile error
    pub outcome: Outcome,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets (first visible line)
    pub source_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Compile `source_code` and build the viewer state around the result.
    pub fn new(source_code: String) -> Self {
        let outcome = Outcome::from_source(&source_code);
        let status_message = match &outcome {
            Outcome::Compiled { .. } => String::from("Compiled"),
            Outcome::Failed { .. } => String::from("Compilation failed"),
        };

        App {
            source_code,
            outcome,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Two panes side by side, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &self.outcome,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.outcome,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
                self.status_message = match self.focused_pane {
                    FocusedPane::Source => "Source focused".to_string(),
                    FocusedPane::Output => "Output focused".to_string(),
                };
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(10);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }
}
