//! History store
//!
//! Log of which hymns were sung on which date. Entries are unique per date
//! and kept newest first; the order of hymns inside one date is whatever the
//! user arranged and is never re-sorted. An entry disappears as soon as its
//! last hymn is removed.
//!
//! On disk the store is a JSON object mapping `YYYY-MM-DD` to the ordered
//! list of hymn numbers for that date.

use crate::document::JsonDocument;
use crate::interaction::Confirmation;
use crate::models::{dedup_numbers, HistoryEntry};
use crate::time::{format_iso_date, parse_iso_date};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    document: JsonDocument,
}

impl HistoryStore {
    /// Load history from its document. Missing or malformed documents are errors.
    pub fn load(document: JsonDocument) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = document.read()?;

        let mut entries = Vec::with_capacity(raw.len());
        for (key, mut hymns) in raw {
            let date = parse_iso_date(&key).map_err(|_| Error::Malformed {
                path: document.path().display().to_string(),
                reason: format!("'{}' is not a YYYY-MM-DD date", key),
            })?;
            let dropped = dedup_numbers(&mut hymns);
            if dropped > 0 {
                warn!("History for {} listed {} hymn(s) more than once; duplicates dropped", key, dropped);
            }
            if hymns.is_empty() {
                warn!("History for {} has no hymns; entry dropped", key);
                continue;
            }
            entries.push(HistoryEntry::new(date, hymns));
        }
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        info!("Loaded {} history entries from {}", entries.len(), document.path().display());
        Ok(Self { entries, document })
    }

    /// Create an empty store and write its document
    pub fn create(document: JsonDocument) -> Result<Self> {
        let store = Self {
            entries: Vec::new(),
            document,
        };
        store.save()?;
        Ok(store)
    }

    /// Entries, newest date first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn document(&self) -> &JsonDocument {
        &self.document
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Dates on which `number` was sung, newest first
    pub fn dates_for_hymn(&self, number: &str) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .filter(|e| e.contains(number))
            .map(|e| e.date)
            .collect()
    }

    /// Record that `number` was sung on `date`.
    /// Returns false when it was already recorded for that date.
    pub fn record_hymn(&mut self, date: NaiveDate, number: &str) -> Result<bool> {
        // First position whose date is not newer than `date`
        let pos = self
            .entries
            .iter()
            .position(|e| e.date <= date)
            .unwrap_or(self.entries.len());

        match self.entries.get_mut(pos) {
            Some(entry) if entry.date == date => {
                if entry.contains(number) {
                    debug!("Hymn {} already recorded on {}", number, date);
                    return Ok(false);
                }
                entry.hymns.push(number.to_string());
            }
            _ => {
                self.entries
                    .insert(pos, HistoryEntry::new(date, vec![number.to_string()]));
            }
        }

        debug!("Recorded hymn {} on {}", number, date);
        self.save()?;
        Ok(true)
    }

    /// Remove `number` from the entry for `date`
    pub fn remove_hymn(
        &mut self,
        date: NaiveDate,
        number: &str,
        confirmation: Confirmation,
    ) -> Result<()> {
        let index = self.index_of(date)?;
        let row = self.entries[index]
            .hymns
            .iter()
            .position(|n| n == number)
            .ok_or_else(|| Error::NotFound(format!("hymn {} on {}", number, date)))?;
        self.remove_at(index, row, confirmation).map(|_| ())
    }

    /// Remove the hymn at `row` of the entry at `entry_index`; returns its number
    pub fn remove_at(
        &mut self,
        entry_index: usize,
        row: usize,
        _confirmation: Confirmation,
    ) -> Result<String> {
        let entry = self
            .entries
            .get_mut(entry_index)
            .ok_or_else(|| Error::NotFound(format!("history entry {}", entry_index)))?;
        if row >= entry.hymns.len() {
            return Err(Error::NotFound(format!("row {} on {}", row, entry.date)));
        }

        let number = entry.hymns.remove(row);
        debug!("Removed hymn {} from {}", number, entry.date);
        if entry.hymns.is_empty() {
            debug!("History entry for {} is empty; removing it", entry.date);
            self.entries.remove(entry_index);
        }
        self.save()?;
        Ok(number)
    }

    /// Move the hymn at `from_index` of `from_date` to `to_index` of `to_date`.
    ///
    /// `to_date` must already have an entry. `to_index` is clamped to the end
    /// of the target list. If the target date already lists the hymn, the
    /// source reference is dropped and the target keeps its order.
    pub fn move_hymn(
        &mut self,
        from_date: NaiveDate,
        from_index: usize,
        to_date: NaiveDate,
        to_index: usize,
    ) -> Result<()> {
        let source = self.index_of(from_date)?;
        let target = self.index_of(to_date)?;
        if from_index >= self.entries[source].hymns.len() {
            return Err(Error::NotFound(format!("row {} on {}", from_index, from_date)));
        }

        let number = self.entries[source].hymns.remove(from_index);
        let target_hymns = &mut self.entries[target].hymns;
        if source != target && target_hymns.contains(&number) {
            debug!("Hymn {} already on {}; merged", number, to_date);
        } else {
            let at = to_index.min(target_hymns.len());
            target_hymns.insert(at, number.clone());
        }
        debug!("Moved hymn {} from {} to {}", number, from_date, to_date);

        if self.entries[source].hymns.is_empty() {
            self.entries.remove(source);
        }
        self.save()
    }

    fn index_of(&self, date: NaiveDate) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.date == date)
            .ok_or_else(|| Error::NotFound(format!("history entry for {}", date)))
    }

    fn save(&self) -> Result<()> {
        let doc: BTreeMap<String, &Vec<String>> = self
            .entries
            .iter()
            .map(|e| (format_iso_date(e.date), &e.hymns))
            .collect();
        self.document.write(&doc)
    }
}
