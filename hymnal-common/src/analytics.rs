//! Sing-frequency analytics over the history log

use crate::catalog::Catalog;
use crate::models::HistoryEntry;
use std::cmp::Ordering;
use std::collections::HashMap;

/// How often one hymn number appears across all history entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingCount {
    pub number: String,
    pub count: usize,
}

/// Count appearances of each hymn, most sung first; ties by hymn number
pub fn sing_counts(entries: &[HistoryEntry]) -> Vec<SingCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for number in entries.iter().flat_map(|e| e.hymns.iter()) {
        *counts.entry(number.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<SingCount> = counts
        .into_iter()
        .map(|(number, count)| SingCount {
            number: number.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| compare_numbers(&a.number, &b.number)));
    ranked
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// One bar of the frequency report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub number: String,
    pub title: String,
    pub count: usize,
}

/// Ranked sing counts labelled with catalog titles
#[derive(Debug, Clone, Default)]
pub struct HistoryReport {
    pub rows: Vec<ReportRow>,
}

impl HistoryReport {
    pub fn build(entries: &[HistoryEntry], catalog: &Catalog) -> Self {
        let rows = sing_counts(entries)
            .into_iter()
            .map(|c| ReportRow {
                title: catalog.title_or_number(&c.number).to_string(),
                number: c.number,
                count: c.count,
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.rows.iter().map(|r| r.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hymn;
    use chrono::NaiveDate;

    fn entry(day: u32, hymns: &[&str]) -> HistoryEntry {
        HistoryEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            hymns.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_sing_counts_ranked() {
        let entries = vec![entry(21, &["3", "1"]), entry(14, &["1", "2"]), entry(7, &["1", "3", "10"])];
        let counts = sing_counts(&entries);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.number.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("1", 3), ("3", 2), ("2", 1), ("10", 1)]);
    }

    #[test]
    fn test_sing_counts_empty() {
        assert!(sing_counts(&[]).is_empty());
    }

    #[test]
    fn test_report_uses_titles() {
        let catalog = Catalog::from_hymns(vec![Hymn {
            number: "1".to_string(),
            title: "Amazing Grace".to_string(),
            section: "Worship".to_string(),
            subsection: "Adoration".to_string(),
        }])
        .unwrap();
        let report = HistoryReport::build(&[entry(7, &["1", "77"]), entry(14, &["1"])], &catalog);
        assert_eq!(report.rows[0].title, "Amazing Grace");
        assert_eq!(report.rows[0].count, 2);
        assert_eq!(report.rows[1].title, "77");
        assert_eq!(report.max_count(), 2);
    }
}
