//! # Hymnal command-line front end
//!
//! Presentation layer over `hymnal-common`: parses commands, asks for
//! missing input on the terminal, prints grouped lists and detail pages, and
//! renders the sing-frequency chart.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod report;
