//! Command-line arguments
//!
//! Positions shown to the user (tags, history rows) are 1-based.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the hymnal, tag hymns and keep a history of what was sung
#[derive(Parser, Debug)]
#[command(name = "hymnal", version)]
pub struct Args {
    /// Folder holding hymns.csv, tags.json and history.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (default: platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set (overrides the config file)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create empty tag and history documents in the data folder
    Init,

    /// List hymns grouped by section, optionally searched or filtered
    List {
        /// Catalog position, or words that must all appear in the title
        #[arg(long, short, conflicts_with = "tag")]
        search: Option<String>,

        /// Only hymns carrying every given tag
        #[arg(long, short, value_name = "NAME")]
        tag: Vec<String>,
    },

    /// Show one hymn with its tags and the dates it was sung
    Show {
        /// Hymn number
        number: String,
    },

    /// Manage tags
    #[command(subcommand)]
    Tags(TagCommand),

    /// Manage the history of sung hymns
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TagCommand {
    /// List tags in display order
    List,

    /// Create a tag (asks for anything not given)
    Add { name: Option<String>, color: Option<String> },

    /// Rename a tag
    Rename { position: usize, name: Option<String> },

    /// Change a tag's color
    Recolor { position: usize, color: Option<String> },

    /// Edit a tag's name or color interactively
    Edit { position: usize },

    /// Delete a tag
    Remove {
        position: usize,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Move a tag to another position
    Move { from: usize, to: usize },

    /// Add a hymn to a tag, or remove it if already tagged
    Toggle { position: usize, number: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum HistoryCommand {
    /// List history, newest date first
    List,

    /// Record a hymn as sung (asks for the date if not given)
    Record {
        number: String,

        /// YYYY-MM-DD or "today"
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Remove a hymn from a date
    Remove {
        date: String,
        number: String,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Move a hymn between dates or within one date
    Move {
        from_date: String,
        from_row: usize,
        to_date: String,
        to_row: usize,
    },
}
