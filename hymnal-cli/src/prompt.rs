//! Line-based prompter for the terminal
//!
//! Questions go to `output` (stderr for the real binary) and answers are
//! read one line at a time. An empty line or end of input cancels.

use chrono::NaiveDate;
use hymnal_common::interaction::Prompter;
use hymnal_common::time::parse_date_input;
use std::io::{BufRead, Stderr, StdinLock, Write};

pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

/// Prompter wired to the process's stdin and stderr
pub type TerminalPrompter = LinePrompter<StdinLock<'static>, Stderr>;

impl TerminalPrompter {
    pub fn terminal() -> Self {
        LinePrompter::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line; `None` when the prompt stream is gone
    fn say(&mut self, message: &str) -> Option<()> {
        writeln!(self.output, "{}", message).ok()
    }

    /// Print `prompt` and read one trimmed, non-empty line
    fn ask(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{}: ", prompt).ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    None
                } else {
                    Some(answer.to_string())
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, title: &str, default: Option<&str>) -> Option<String> {
        match default {
            Some(current) => self.ask(&format!("{} (currently '{}')", title, current)),
            None => self.ask(title),
        }
    }

    fn date(&mut self, title: &str) -> Option<NaiveDate> {
        loop {
            let answer = self.ask(&format!("{} (YYYY-MM-DD or 'today')", title))?;
            match parse_date_input(&answer) {
                Some(date) => return Some(date),
                None => self.say(&format!("'{}' is not a date", answer))?,
            }
        }
    }

    fn choose(&mut self, title: &str, options: &[&str]) -> Option<usize> {
        self.say(title)?;
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, option))?;
        }
        loop {
            let answer = self.ask("Choice")?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Some(n - 1),
                _ => self.say(&format!("Enter a number from 1 to {}", options.len()))?,
            }
        }
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self.ask(&format!("{}: {} [y/N]", title, message))
            .map(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
            .unwrap_or(false)
    }
}
