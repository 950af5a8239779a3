//! Data model records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the hymn catalog. Identity is `number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hymn {
    /// Hymn number as printed (kept as text)
    #[serde(rename = "#")]
    pub number: String,
    pub title: String,
    pub section: String,
    pub subsection: String,
}

impl Hymn {
    /// Label used to group adjacent catalog rows, e.g. `"Worship: Adoration"`
    pub fn category_label(&self) -> String {
        format!("{}: {}", self.section, self.subsection)
    }

    /// Numeric value of the hymn number, when it has one
    pub fn numeric_number(&self) -> Option<u32> {
        self.number.trim().parse().ok()
    }
}

/// User-defined colored label attached to a set of hymns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Opaque display color, handed to the presentation layer untouched
    pub color: String,
    /// Hymn numbers in insertion order, no duplicates
    #[serde(default)]
    pub hymns: Vec<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            hymns: Vec::new(),
        }
    }

    pub fn contains(&self, number: &str) -> bool {
        self.hymns.iter().any(|n| n == number)
    }
}

/// Hymns sung on one date, in the order the user arranged them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub hymns: Vec<String>,
}

impl HistoryEntry {
    pub fn new(date: NaiveDate, hymns: Vec<String>) -> Self {
        Self { date, hymns }
    }

    pub fn contains(&self, number: &str) -> bool {
        self.hymns.iter().any(|n| n == number)
    }
}

/// Remove repeated numbers, keeping the first occurrence. Returns how many were dropped.
pub(crate) fn dedup_numbers(numbers: &mut Vec<String>) -> usize {
    let before = numbers.len();
    let mut seen = std::collections::HashSet::new();
    numbers.retain(|n| seen.insert(n.clone()));
    before - numbers.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hymn(number: &str, section: &str, subsection: &str) -> Hymn {
        Hymn {
            number: number.to_string(),
            title: "Title".to_string(),
            section: section.to_string(),
            subsection: subsection.to_string(),
        }
    }

    #[test]
    fn test_category_label_format() {
        assert_eq!(hymn("1", "Worship", "Adoration").category_label(), "Worship: Adoration");
    }

    #[test]
    fn test_numeric_number() {
        assert_eq!(hymn("42", "a", "b").numeric_number(), Some(42));
        assert_eq!(hymn("42a", "a", "b").numeric_number(), None);
    }

    #[test]
    fn test_tag_serializes_with_hymn_list() {
        let mut tag = Tag::new("Easter", "#ffcc00");
        tag.hymns.push("12".to_string());
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json["name"], "Easter");
        assert_eq!(json["color"], "#ffcc00");
        assert_eq!(json["hymns"][0], "12");
    }

    #[test]
    fn test_dedup_numbers_keeps_first_occurrence() {
        let mut numbers = vec!["3".to_string(), "1".to_string(), "3".to_string(), "2".to_string(), "1".to_string()];
        assert_eq!(dedup_numbers(&mut numbers), 2);
        assert_eq!(numbers, vec!["3", "1", "2"]);
    }
}
