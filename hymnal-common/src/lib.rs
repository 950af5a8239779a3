//! # Hymnal Common Library
//!
//! Shared code for the hymnal tools including:
//! - Catalog loading (read-only hymn list)
//! - Tag and history stores backed by JSON documents
//! - Query/filter engine used by every list view
//! - Sing-frequency analytics
//! - Session context and interactive suspension points
//! - Configuration loading

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod history;
pub mod interaction;
pub mod models;
pub mod query;
pub mod session;
pub mod tags;
pub mod time;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use history::HistoryStore;
pub use models::{HistoryEntry, Hymn, Tag};
pub use session::Session;
pub use tags::TagStore;
