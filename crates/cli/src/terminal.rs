//! Terminal rendering for the client commands.

use std::fmt;
use std::io::{self, BufRead, Write};

use tasklist_client::{PaginationControls, View};
use tasklist_core::TodoItem;

const fn status_label(is_completed: bool) -> &'static str {
    if is_completed { "Done" } else { "Pending" }
}

const fn bullet(is_completed: bool) -> &'static str {
    if is_completed { "[x]" } else { "[ ]" }
}

const fn enabled(disabled: bool) -> &'static str {
    if disabled { "disabled" } else { "enabled" }
}

/// Writes the list, pagination bar and notices as plain lines.
pub(crate) struct TerminalView<W: Write> {
    out: W,
    assume_yes: bool,
}

impl TerminalView<io::Stdout> {
    pub(crate) fn stdout(assume_yes: bool) -> Self {
        Self::new(io::stdout(), assume_yes)
    }
}

impl<W: Write> TerminalView<W> {
    pub(crate) const fn new(out: W, assume_yes: bool) -> Self {
        Self { out, assume_yes }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            tracing::debug!("terminal write failed: {}", e);
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for TerminalView<W> {
    fn render_items(&mut self, items: &[TodoItem]) {
        if items.is_empty() {
            self.line(format_args!("No tasks found"));
            return;
        }
        for item in items {
            self.line(format_args!(
                "{} {:>6}  {}  ({})",
                bullet(item.is_completed),
                item.id,
                item.title,
                status_label(item.is_completed)
            ));
        }
    }

    fn render_error(&mut self, message: &str) {
        self.line(format_args!("{message}"));
    }

    fn render_pagination(&mut self, controls: &PaginationControls) {
        self.line(format_args!(
            "{controls} | prev: {} | next: {}",
            enabled(controls.prev_disabled),
            enabled(controls.next_disabled)
        ));
    }

    fn mark_completed(&mut self, id: i64, is_completed: bool) {
        self.line(format_args!("{} {:>6}  now {}", bullet(is_completed), id, status_label(is_completed)));
    }

    // Nothing to clear: the title came from the command line.
    fn clear_input(&mut self) {}

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let mut answer = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut answer) {
            tracing::warn!("failed to read confirmation: {}", e);
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
