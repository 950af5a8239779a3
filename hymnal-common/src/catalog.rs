//! Hymn catalog loading
//!
//! The catalog is a CSV file with a header row. Columns `#`, `title`,
//! `section` and `subsection` are required; any other columns are ignored.
//! It is loaded once at startup and never mutated afterwards.

use crate::models::Hymn;
use crate::{Error, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Ordered, read-only list of hymns
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hymns: Vec<Hymn>,
    by_number: HashMap<String, usize>,
}

impl Catalog {
    /// Load the catalog from a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file, &path.display().to_string())?;
        info!("Loaded {} hymns from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a catalog from any CSV source. `source` names it in error messages.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut hymns = Vec::new();
        for record in rdr.deserialize::<Hymn>() {
            hymns.push(record?);
        }

        Self::validated(hymns, source)
    }

    /// Build a catalog from already-parsed rows
    pub fn from_hymns(hymns: Vec<Hymn>) -> Result<Self> {
        Self::validated(hymns, "<memory>")
    }

    fn validated(hymns: Vec<Hymn>, source: &str) -> Result<Self> {
        let mut by_number = HashMap::with_capacity(hymns.len());
        for (row, hymn) in hymns.iter().enumerate() {
            if hymn.number.is_empty() {
                return Err(malformed(source, format!("row {} has no hymn number", row + 1)));
            }
            if hymn.title.is_empty() {
                return Err(malformed(source, format!("hymn {} has no title", hymn.number)));
            }
            if by_number.insert(hymn.number.clone(), row).is_some() {
                return Err(malformed(source, format!("hymn number {} appears twice", hymn.number)));
            }
        }
        Ok(Self { hymns, by_number })
    }

    pub fn hymns(&self) -> &[Hymn] {
        &self.hymns
    }

    pub fn len(&self) -> usize {
        self.hymns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hymns.is_empty()
    }

    /// Look a hymn up by its number
    pub fn get(&self, number: &str) -> Option<&Hymn> {
        self.by_number.get(number).map(|&i| &self.hymns[i])
    }

    /// Hymn at a 1-based catalog position
    pub fn at_position(&self, position: usize) -> Option<&Hymn> {
        position.checked_sub(1).and_then(|i| self.hymns.get(i))
    }

    /// Title for a hymn number, falling back to the number itself
    pub fn title_or_number<'a>(&'a self, number: &'a str) -> &'a str {
        self.get(number).map(|h| h.title.as_str()).unwrap_or(number)
    }
}

fn malformed(source: &str, reason: String) -> Error {
    Error::Malformed {
        path: source.to_string(),
        reason,
    }
}
