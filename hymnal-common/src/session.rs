//! Session context
//!
//! Holds the catalog and both stores for the lifetime of the program and
//! exposes the views and interactive flows the presentation layer needs.
//! Every view borrows from the session; every flow mutates one store and
//! persists it before returning.

use crate::catalog::Catalog;
use crate::config::DataPaths;
use crate::document::JsonDocument;
use crate::history::HistoryStore;
use crate::interaction::{Confirmation, Outcome, Prompter};
use crate::models::{Hymn, Tag};
use crate::query::{self, CategoryGroup};
use crate::tags::TagStore;
use crate::time::format_long_date;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct Session {
    catalog: Catalog,
    tags: TagStore,
    history: HistoryStore,
}

/// Everything shown on a hymn's detail page
#[derive(Debug)]
pub struct HymnDetail<'a> {
    pub hymn: &'a Hymn,
    /// Every tag with whether this hymn carries it
    pub tags: Vec<(&'a Tag, bool)>,
    /// Dates the hymn was sung, newest first
    pub dates: Vec<NaiveDate>,
}

/// One date of the history list with its hymns resolved against the catalog
#[derive(Debug)]
pub struct HistoryDay<'a> {
    pub date: NaiveDate,
    pub rows: Vec<HistoryRow<'a>>,
}

#[derive(Debug)]
pub struct HistoryRow<'a> {
    pub number: &'a str,
    /// `None` when the number is not in the catalog
    pub hymn: Option<&'a Hymn>,
}

impl Session {
    pub fn new(catalog: Catalog, tags: TagStore, history: HistoryStore) -> Self {
        Self {
            catalog,
            tags,
            history,
        }
    }

    /// Load catalog and both documents. Any failure is fatal for the session.
    pub fn open(paths: &DataPaths) -> Result<Self> {
        let catalog = Catalog::load(&paths.catalog)?;
        let tags = TagStore::load(JsonDocument::new(&paths.tags))?;
        let history = HistoryStore::load(JsonDocument::new(&paths.history))?;
        info!(
            "Session opened: {} hymns, {} tags, {} history entries",
            catalog.len(),
            tags.len(),
            history.len()
        );
        Ok(Self::new(catalog, tags, history))
    }

    /// Create empty tag and history documents where none exist yet.
    /// Returns the paths that were created.
    pub fn init_documents(paths: &DataPaths) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();

        let tags = JsonDocument::new(&paths.tags);
        if !tags.exists() {
            TagStore::create(tags)?;
            created.push(paths.tags.clone());
        }

        let history = JsonDocument::new(&paths.history);
        if !history.exists() {
            HistoryStore::create(history)?;
            created.push(paths.history.clone());
        }

        for path in &created {
            info!("Created {}", path.display());
        }
        Ok(created)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tags(&self) -> &TagStore {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagStore {
        &mut self.tags
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    pub fn hymn(&self, number: &str) -> Result<&Hymn> {
        self.catalog
            .get(number)
            .ok_or_else(|| Error::NotFound(format!("hymn {}", number)))
    }

    /// Row highlight color for a hymn
    pub fn color_for(&self, hymn: &Hymn) -> Option<&str> {
        query::color_for_hymn(hymn, self.tags.tags())
    }

    /// Search box results, grouped for display
    pub fn search(&self, input: &str) -> Vec<CategoryGroup<'_>> {
        query::group_by_category(query::search(&self.catalog, input))
    }

    /// Tag filter results, grouped for display
    pub fn filter<S: AsRef<str>>(&self, selected: &[S]) -> Vec<CategoryGroup<'_>> {
        query::group_by_category(query::filter_by_tags(&self.catalog, self.tags.tags(), selected))
    }

    pub fn hymn_detail(&self, number: &str) -> Result<HymnDetail<'_>> {
        let hymn = self.hymn(number)?;
        Ok(HymnDetail {
            hymn,
            tags: self.tags.membership(&hymn.number),
            dates: self.history.dates_for_hymn(&hymn.number),
        })
    }

    pub fn history_view(&self) -> Vec<HistoryDay<'_>> {
        self.history
            .entries()
            .iter()
            .map(|entry| HistoryDay {
                date: entry.date,
                rows: entry
                    .hymns
                    .iter()
                    .map(|n| HistoryRow {
                        number: n.as_str(),
                        hymn: self.catalog.get(n),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Ask for a name and a color, then append the tag
    pub fn new_tag(&mut self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let Some(name) = prompter.text("Tag name", None) else {
            return Ok(cancelled("new tag"));
        };
        let Some(color) = prompter.text("Tag color", None) else {
            return Ok(cancelled("new tag"));
        };
        self.tags.add(&name, &color)?;
        Ok(Outcome::Applied)
    }

    /// Ask whether to edit the name or the color, then ask for the new value
    pub fn edit_tag(&mut self, index: usize, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let tag = self.tags.get(index)?;
        let (name, color) = (tag.name.clone(), tag.color.clone());

        match prompter.choose("Edit", &["Name", "Color"]) {
            Some(0) => match prompter.text("Tag name", Some(name.as_str())) {
                Some(new_name) => self.tags.rename(index, &new_name)?,
                None => return Ok(cancelled("rename tag")),
            },
            Some(1) => match prompter.text("Tag color", Some(color.as_str())) {
                Some(new_color) => self.tags.recolor(index, &new_color)?,
                None => return Ok(cancelled("recolor tag")),
            },
            _ => return Ok(cancelled("edit tag")),
        }
        Ok(Outcome::Applied)
    }

    /// Delete a tag after the user confirms
    pub fn delete_tag(&mut self, index: usize, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let name = self.tags.get(index)?.name.clone();
        let message = format!("Are you sure you want to delete the tag '{}'?", name);
        match Confirmation::request(prompter, "Confirm delete", &message) {
            Some(confirmation) => {
                self.tags.remove(index, confirmation)?;
                Ok(Outcome::Applied)
            }
            None => Ok(cancelled("delete tag")),
        }
    }

    /// Tag or untag a hymn; returns whether it is tagged afterwards
    pub fn toggle_tag(&mut self, index: usize, number: &str) -> Result<bool> {
        self.hymn(number)?;
        self.tags.toggle_membership(index, number)
    }

    /// Ask for a date and record the hymn as sung on it
    pub fn add_to_history(&mut self, number: &str, prompter: &mut dyn Prompter) -> Result<Outcome> {
        self.hymn(number)?;
        let Some(date) = prompter.date("Date sung") else {
            return Ok(cancelled("add to history"));
        };
        self.history.record_hymn(date, number)?;
        Ok(Outcome::Applied)
    }

    /// Remove a hymn from one date after the user confirms
    pub fn delete_history_hymn(
        &mut self,
        date: NaiveDate,
        number: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<Outcome> {
        let listed = self.history.entry(date).map_or(false, |e| e.contains(number));
        if !listed {
            return Err(Error::NotFound(format!("hymn {} on {}", number, date)));
        }
        let title = self.catalog.title_or_number(number).to_string();
        let message = format!("Remove '{}' from {}?", title, format_long_date(date));
        match Confirmation::request(prompter, "Confirm delete", &message) {
            Some(confirmation) => {
                self.history.remove_hymn(date, number, confirmation)?;
                Ok(Outcome::Applied)
            }
            None => Ok(cancelled("remove from history")),
        }
    }
}

fn cancelled(action: &str) -> Outcome {
    debug!("{} cancelled", action);
    Outcome::Cancelled
}
