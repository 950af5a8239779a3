//! Tag store
//!
//! Ordered list of user tags persisted to a JSON document. Tags are addressed
//! by position, which is also their display order. Every mutation rewrites
//! the whole document before returning; if the write fails the error is
//! returned but the in-memory change stays in place.

use crate::document::JsonDocument;
use crate::interaction::Confirmation;
use crate::models::{dedup_numbers, Tag};
use crate::{Error, Result};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct TagStore {
    tags: Vec<Tag>,
    document: JsonDocument,
}

impl TagStore {
    /// Load tags from their document. Missing or malformed documents are errors.
    pub fn load(document: JsonDocument) -> Result<Self> {
        let mut tags: Vec<Tag> = document.read()?;
        for tag in &mut tags {
            if tag.name.trim().is_empty() {
                return Err(Error::Malformed {
                    path: document.path().display().to_string(),
                    reason: "tag with empty name".to_string(),
                });
            }
            let dropped = dedup_numbers(&mut tag.hymns);
            if dropped > 0 {
                warn!("Tag '{}' listed {} hymn(s) more than once; duplicates dropped", tag.name, dropped);
            }
        }
        info!("Loaded {} tags from {}", tags.len(), document.path().display());
        Ok(Self { tags, document })
    }

    /// Create an empty store and write its document
    pub fn create(document: JsonDocument) -> Result<Self> {
        let store = Self {
            tags: Vec::new(),
            document,
        };
        store.save()?;
        Ok(store)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn document(&self) -> &JsonDocument {
        &self.document
    }

    pub fn get(&self, index: usize) -> Result<&Tag> {
        self.tags
            .get(index)
            .ok_or_else(|| Error::NotFound(format!("tag at position {}", index)))
    }

    pub fn names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Every tag paired with whether it contains `number`, in store order
    pub fn membership(&self, number: &str) -> Vec<(&Tag, bool)> {
        self.tags.iter().map(|t| (t, t.contains(number))).collect()
    }

    /// Append a new tag with no hymns; returns its position
    pub fn add(&mut self, name: &str, color: &str) -> Result<usize> {
        let name = validate_name(name)?;
        debug!("Adding tag '{}' ({})", name, color);
        self.tags.push(Tag::new(name, color));
        self.save()?;
        Ok(self.tags.len() - 1)
    }

    pub fn rename(&mut self, index: usize, name: &str) -> Result<()> {
        let name = validate_name(name)?;
        let tag = self.get_mut(index)?;
        debug!("Renaming tag '{}' to '{}'", tag.name, name);
        tag.name = name;
        self.save()
    }

    pub fn recolor(&mut self, index: usize, color: &str) -> Result<()> {
        let tag = self.get_mut(index)?;
        debug!("Recoloring tag '{}' to {}", tag.name, color);
        tag.color = color.to_string();
        self.save()
    }

    /// Add `number` to the tag if absent, otherwise remove it.
    /// Returns whether the hymn is tagged afterwards.
    pub fn toggle_membership(&mut self, index: usize, number: &str) -> Result<bool> {
        let tag = self.get_mut(index)?;
        let tagged = match tag.hymns.iter().position(|n| n == number) {
            Some(pos) => {
                tag.hymns.remove(pos);
                false
            }
            None => {
                tag.hymns.push(number.to_string());
                true
            }
        };
        debug!("Hymn {} {} tag '{}'", number, if tagged { "added to" } else { "removed from" }, tag.name);
        self.save()?;
        Ok(tagged)
    }

    /// Delete the tag at `index`; returns the removed tag
    pub fn remove(&mut self, index: usize, _confirmation: Confirmation) -> Result<Tag> {
        self.get(index)?;
        let tag = self.tags.remove(index);
        debug!("Removed tag '{}'", tag.name);
        self.save()?;
        Ok(tag)
    }

    /// Move the tag at `from` so it ends up at position `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.get(from)?;
        if to >= self.tags.len() {
            return Err(Error::NotFound(format!("tag position {}", to)));
        }
        let tag = self.tags.remove(from);
        debug!("Moving tag '{}' from {} to {}", tag.name, from, to);
        self.tags.insert(to, tag);
        self.save()
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Tag> {
        self.tags
            .get_mut(index)
            .ok_or_else(|| Error::NotFound(format!("tag at position {}", index)))
    }

    fn save(&self) -> Result<()> {
        self.document.write(&self.tags)
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("tag name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> TagStore {
        TagStore::create(JsonDocument::new(temp_dir.path().join("tags.json"))).unwrap()
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut tags = store(&temp_dir);
        assert!(matches!(tags.add("   ", "red"), Err(Error::InvalidInput(_))));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_add_appends_with_empty_hymns() {
        let temp_dir = TempDir::new().unwrap();
        let mut tags = store(&temp_dir);
        assert_eq!(tags.add("Easter", "yellow").unwrap(), 0);
        assert_eq!(tags.add("Advent", "purple").unwrap(), 1);
        assert_eq!(tags.names(), vec!["Easter", "Advent"]);
        assert!(tags.get(1).unwrap().hymns.is_empty());
    }

    #[test]
    fn test_rename_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let mut tags = store(&temp_dir);
        assert!(matches!(tags.rename(0, "x"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_reorder_moves_to_position() {
        let temp_dir = TempDir::new().unwrap();
        let mut tags = store(&temp_dir);
        for name in ["a", "b", "c"] {
            tags.add(name, "white").unwrap();
        }
        tags.reorder(0, 2).unwrap();
        assert_eq!(tags.names(), vec!["b", "c", "a"]);
        tags.reorder(2, 0).unwrap();
        assert_eq!(tags.names(), vec!["a", "b", "c"]);
        assert!(tags.reorder(0, 3).is_err());
    }

    #[test]
    fn test_load_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags.json");
        std::fs::write(&path, r#"[{"name": "", "color": "red", "hymns": []}]"#).unwrap();
        let result = TagStore::load(JsonDocument::new(path));
        assert!(matches!(result, Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_load_collapses_duplicate_hymns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags.json");
        std::fs::write(&path, r#"[{"name": "Joy", "color": "red", "hymns": ["1", "2", "1"]}]"#).unwrap();
        let tags = TagStore::load(JsonDocument::new(path)).unwrap();
        assert_eq!(tags.get(0).unwrap().hymns, vec!["1", "2"]);
    }
}
