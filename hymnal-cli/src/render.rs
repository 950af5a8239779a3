//! Text rendering of the session views

use hymnal_common::query::CategoryGroup;
use hymnal_common::session::{HistoryDay, HymnDetail};
use hymnal_common::time::format_long_date;
use hymnal_common::{Hymn, Session, Tag};
use std::io::{self, Write};

/// Sectioned hymn list: one header per category run
pub fn groups(out: &mut impl Write, session: &Session, groups: &[CategoryGroup<'_>]) -> io::Result<()> {
    if groups.is_empty() {
        return writeln!(out, "No hymns found.");
    }
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", group.label)?;
        for hymn in &group.hymns {
            hymn_row(out, hymn, session.color_for(hymn))?;
        }
    }
    Ok(())
}

fn hymn_row(out: &mut impl Write, hymn: &Hymn, color: Option<&str>) -> io::Result<()> {
    match color {
        Some(color) => writeln!(out, "  {:>5}  {}  [{}]", hymn.number, hymn.title, color),
        None => writeln!(out, "  {:>5}  {}", hymn.number, hymn.title),
    }
}

pub fn hymn_detail(out: &mut impl Write, detail: &HymnDetail<'_>) -> io::Result<()> {
    let hymn = detail.hymn;
    writeln!(out, "{} (#{})", hymn.title, hymn.number)?;
    writeln!(out, "{}", hymn.category_label())?;

    writeln!(out, "\nTags")?;
    if detail.tags.is_empty() {
        writeln!(out, "  (no tags defined)")?;
    }
    for (tag, tagged) in &detail.tags {
        let mark = if *tagged { "x" } else { " " };
        writeln!(out, "  [{}] {}  [{}]", mark, tag.name, tag.color)?;
    }

    writeln!(out, "\nHistory")?;
    if detail.dates.is_empty() {
        writeln!(out, "  (never sung)")?;
    }
    for date in &detail.dates {
        writeln!(out, "  {}", format_long_date(*date))?;
    }
    Ok(())
}

pub fn tags(out: &mut impl Write, tags: &[Tag]) -> io::Result<()> {
    if tags.is_empty() {
        return writeln!(out, "No tags.");
    }
    for (i, tag) in tags.iter().enumerate() {
        let count = tag.hymns.len();
        writeln!(
            out,
            "{:>3}. {}  [{}]  {} hymn{}",
            i + 1,
            tag.name,
            tag.color,
            count,
            if count == 1 { "" } else { "s" }
        )?;
    }
    Ok(())
}

pub fn history(out: &mut impl Write, days: &[HistoryDay<'_>]) -> io::Result<()> {
    if days.is_empty() {
        return writeln!(out, "No history.");
    }
    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", format_long_date(day.date))?;
        for (row, entry) in day.rows.iter().enumerate() {
            let title = entry.hymn.map(|h| h.title.as_str()).unwrap_or("(not in catalog)");
            writeln!(out, "{:>3}. {:>5}  {}", row + 1, entry.number, title)?;
        }
    }
    Ok(())
}
