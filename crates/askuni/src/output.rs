//! Terminal output.
//!
//! Progress and diagnostics go to stderr; stdout carries only the rendered
//! answer, so `askuni ask ... > answer.html` captures nothing else.

use console::{Style, Term};

/// Message severity, deciding the style.
#[derive(Clone, Copy)]
enum Level {
    Plain,
    Notice,
    Warning,
    Failure,
}

/// Writes styled messages to stderr and results to stdout.
pub(crate) struct Output {
    messages: Term,
    results: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            messages: Term::stderr(),
            results: Term::stdout(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.message(Level::Plain, msg);
    }

    /// Cyan bold, for the one line a user should notice.
    pub(crate) fn highlight(&self, msg: &str) {
        self.message(Level::Notice, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.message(Level::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.message(Level::Failure, msg);
    }

    /// Write a command result to stdout.
    pub(crate) fn result(&self, content: &str) -> std::io::Result<()> {
        self.results.write_line(content)
    }

    fn message(&self, level: Level, msg: &str) {
        let style = match level {
            Level::Plain => Style::new(),
            Level::Notice => Style::new().cyan().bold(),
            Level::Warning => Style::new().yellow(),
            Level::Failure => Style::new().red(),
        };
        // Nothing sensible to do if stderr is gone.
        let _ = self.messages.write_line(&style.apply_to(msg).to_string());
    }
}
