//! Interactive suspension points
//!
//! Flows that need user input (a tag name, a date, a delete confirmation)
//! hand control to a [`Prompter`] and resume with whatever it returns. Every
//! prompt may come back empty, which abandons the pending mutation without
//! writing anything.

use chrono::NaiveDate;

/// Presentation-side source of user answers
pub trait Prompter {
    /// Free-text input. `default` pre-fills the field when editing.
    fn text(&mut self, title: &str, default: Option<&str>) -> Option<String>;

    /// Calendar date input
    fn date(&mut self, title: &str) -> Option<NaiveDate>;

    /// Pick one of `options`; returns its index
    fn choose(&mut self, title: &str, options: &[&str]) -> Option<usize>;

    /// Yes/no confirmation of a destructive action
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Proof that the user agreed to a destructive action.
///
/// Store methods that delete data take one of these by value, so a delete
/// cannot be issued without going through a confirmation first.
#[derive(Debug)]
pub struct Confirmation {
    _private: (),
}

impl Confirmation {
    /// Ask the user; `None` when they decline or cancel
    pub fn request(prompter: &mut dyn Prompter, title: &str, message: &str) -> Option<Self> {
        if prompter.confirm(title, message) {
            Some(Self { _private: () })
        } else {
            None
        }
    }

    /// Confirmation given up front, e.g. a `--yes` flag on the command line
    pub fn assume_yes() -> Self {
        Self { _private: () }
    }
}

/// Result of an interactive flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation ran and was persisted
    Applied,
    /// A prompt returned no value; nothing changed
    Cancelled,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
