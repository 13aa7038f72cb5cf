//! User-interaction seam: alert, confirm and prompt.

use std::io::{self, BufRead, Write};

/// The three blocking dialogs a bookmark view needs.
pub trait Prompter {
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
    /// Returns `None` when the user cancels.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

/// Prompter over a line reader and a writer, normally stdin and stdout.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator. `None` on EOF or read error.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn ask(&mut self, text: &str) -> Option<String> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.output, "! {}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.ask(&format!("{} [y/N] ", message)) {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        let text = if default.is_empty() {
            format!("{}: ", message)
        } else {
            format!("{} [{}]: ", message, default)
        };
        let answer = self.ask(&text)?;
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(answer)
        }
    }
}
