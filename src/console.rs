//! Injected input and output channels for interactive operations.
//!
//! Interactive store operations never touch stdin/stdout directly;
//! they consume these capabilities so tests can script input and
//! capture output without global state.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-based operator input.
pub trait Prompt {
    /// Displays `text` and blocks for one line of input. The returned
    /// line has no trailing newline.
    fn prompt(&mut self, text: &str) -> io::Result<String>;
}

/// Human-readable status output sink.
pub trait Report {
    fn line(&mut self, text: &str);
}

/// Real console: prompts on stdout, reads lines from stdin.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl Prompt for StdioConsole {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{text}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

impl Report for StdioConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Scripted console for deterministic tests: answers prompts from a
/// fixed input sequence and records every reported line.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub lines: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
        }
    }

    /// All reported lines joined with newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl Prompt for ScriptedConsole {
    fn prompt(&mut self, _text: &str) -> io::Result<String> {
        Ok(self.inputs.pop_front().unwrap_or_default())
    }
}

impl Report for ScriptedConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
