//! Query/filter engine
//!
//! Pure functions over the catalog and tag list. Results borrow from the
//! catalog; nothing here mutates or persists.

use crate::catalog::Catalog;
use crate::models::{Hymn, Tag};

/// A run of consecutive hymns sharing one category label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub label: String,
    pub hymns: Vec<&'a Hymn>,
}

/// Split `hymns` into runs of equal category label, keeping input order.
///
/// This is run-length grouping, not a partition: two hymns with the same
/// label separated by a differently labelled one land in separate groups.
pub fn group_by_category<'a, I>(hymns: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Hymn>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    for hymn in hymns {
        let label = hymn.category_label();
        match groups.last_mut() {
            Some(group) if group.label == label => group.hymns.push(hymn),
            _ => groups.push(CategoryGroup {
                label,
                hymns: vec![hymn],
            }),
        }
    }
    groups
}

/// Search box entry point: blank input lists the whole catalog
pub fn search<'a>(catalog: &'a Catalog, input: &str) -> Vec<&'a Hymn> {
    if input.trim().is_empty() {
        return catalog.hymns().iter().collect();
    }
    search_by_number(catalog, input)
}

/// A valid 1-based catalog position selects that hymn alone; anything else
/// is treated as a title search.
pub fn search_by_number<'a>(catalog: &'a Catalog, input: &str) -> Vec<&'a Hymn> {
    if let Some(hymn) = input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|pos| catalog.at_position(pos))
    {
        return vec![hymn];
    }
    search_by_text(catalog, input)
}

/// Hymns whose title contains every whitespace-separated word of `input`,
/// ignoring case, in catalog order
pub fn search_by_text<'a>(catalog: &'a Catalog, input: &str) -> Vec<&'a Hymn> {
    let words: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();
    catalog
        .hymns()
        .iter()
        .filter(|hymn| {
            let title = hymn.title.to_lowercase();
            words.iter().all(|w| title.contains(w.as_str()))
        })
        .collect()
}

/// Hymns belonging to every tag named in `selected`, sorted by hymn number.
///
/// An empty selection returns the catalog unchanged. A name that matches no
/// tag matches no hymn. When several tags share a name, all of them apply.
pub fn filter_by_tags<'a, S: AsRef<str>>(
    catalog: &'a Catalog,
    tags: &[Tag],
    selected: &[S],
) -> Vec<&'a Hymn> {
    if selected.is_empty() {
        return catalog.hymns().iter().collect();
    }

    let mut chosen: Vec<&Tag> = Vec::new();
    for name in selected {
        let matching: Vec<&Tag> = tags.iter().filter(|t| t.name == name.as_ref()).collect();
        if matching.is_empty() {
            return Vec::new();
        }
        chosen.extend(matching);
    }

    let mut hymns: Vec<&Hymn> = catalog
        .hymns()
        .iter()
        .filter(|hymn| chosen.iter().all(|t| t.contains(&hymn.number)))
        .collect();
    hymns.sort_by(|a, b| number_order(a).cmp(&number_order(b)));
    hymns
}

/// Numeric numbers first in numeric order, then the rest by text
fn number_order(hymn: &Hymn) -> (bool, u32, &str) {
    match hymn.numeric_number() {
        Some(n) => (false, n, hymn.number.as_str()),
        None => (true, 0, hymn.number.as_str()),
    }
}

/// Color of the first tag (in store order) containing the hymn
pub fn color_for_hymn<'a>(hymn: &Hymn, tags: &'a [Tag]) -> Option<&'a str> {
    tags.iter()
        .find(|t| t.contains(&hymn.number))
        .map(|t| t.color.as_str())
}
