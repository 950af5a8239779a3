//! Command dispatch
//!
//! Each command runs one session query or flow and prints the refreshed
//! view, the way the list screens redraw after every change.

use crate::cli::{Command, HistoryCommand, TagCommand};
use crate::render;
use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use hymnal_common::interaction::{Confirmation, Outcome, Prompter};
use hymnal_common::time::parse_date_input;
use hymnal_common::Session;
use std::io::Write;
use tracing::info;

/// Run one command against an open session
pub fn run(
    command: Command,
    session: &mut Session,
    prompter: &mut dyn Prompter,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Init => bail!("init does not need an open session"),
        Command::List { search, tag } => {
            let groups = if tag.is_empty() {
                session.search(search.as_deref().unwrap_or(""))
            } else {
                session.filter(tag.as_slice())
            };
            render::groups(out, session, &groups)?;
        }
        Command::Show { number } => {
            let detail = session.hymn_detail(&number)?;
            render::hymn_detail(out, &detail)?;
        }
        Command::Tags(cmd) => run_tags(cmd, session, prompter, out)?,
        Command::History(cmd) => run_history(cmd, session, prompter, out)?,
    }
    Ok(())
}

fn run_tags(
    command: TagCommand,
    session: &mut Session,
    prompter: &mut dyn Prompter,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = match command {
        TagCommand::List => Outcome::Applied,
        TagCommand::Add { name: Some(name), color: Some(color) } => {
            session.tags_mut().add(&name, &color)?;
            Outcome::Applied
        }
        TagCommand::Add { .. } => session.new_tag(prompter)?,
        TagCommand::Rename { position, name } => {
            let index = to_index(position)?;
            let current = session.tags().get(index)?.name.clone();
            match name.or_else(|| prompter.text("Tag name", Some(current.as_str()))) {
                Some(name) => {
                    session.tags_mut().rename(index, &name)?;
                    Outcome::Applied
                }
                None => Outcome::Cancelled,
            }
        }
        TagCommand::Recolor { position, color } => {
            let index = to_index(position)?;
            let current = session.tags().get(index)?.color.clone();
            match color.or_else(|| prompter.text("Tag color", Some(current.as_str()))) {
                Some(color) => {
                    session.tags_mut().recolor(index, &color)?;
                    Outcome::Applied
                }
                None => Outcome::Cancelled,
            }
        }
        TagCommand::Edit { position } => session.edit_tag(to_index(position)?, prompter)?,
        TagCommand::Remove { position, yes: true } => {
            let removed = session
                .tags_mut()
                .remove(to_index(position)?, Confirmation::assume_yes())?;
            info!("Deleted tag '{}'", removed.name);
            Outcome::Applied
        }
        TagCommand::Remove { position, yes: false } => session.delete_tag(to_index(position)?, prompter)?,
        TagCommand::Move { from, to } => {
            session.tags_mut().reorder(to_index(from)?, to_index(to)?)?;
            Outcome::Applied
        }
        TagCommand::Toggle { position, number } => {
            let index = to_index(position)?;
            let tagged = session.toggle_tag(index, &number)?;
            let tag = &session.tags().get(index)?.name;
            if tagged {
                writeln!(out, "Hymn {} tagged '{}'", number, tag)?;
            } else {
                writeln!(out, "Hymn {} no longer tagged '{}'", number, tag)?;
            }
            return Ok(());
        }
    };

    report_outcome(out, outcome)?;
    render::tags(out, session.tags().tags())?;
    Ok(())
}

fn run_history(
    command: HistoryCommand,
    session: &mut Session,
    prompter: &mut dyn Prompter,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = match command {
        HistoryCommand::List => Outcome::Applied,
        HistoryCommand::Record { number, date: Some(date) } => {
            session.hymn(&number)?;
            let date = parse_date(&date)?;
            if !session.history_mut().record_hymn(date, &number)? {
                writeln!(out, "Hymn {} was already recorded on {}", number, date)?;
            }
            Outcome::Applied
        }
        HistoryCommand::Record { number, date: None } => session.add_to_history(&number, prompter)?,
        HistoryCommand::Remove { date, number, yes: true } => {
            session
                .history_mut()
                .remove_hymn(parse_date(&date)?, &number, Confirmation::assume_yes())?;
            Outcome::Applied
        }
        HistoryCommand::Remove { date, number, yes: false } => {
            session.delete_history_hymn(parse_date(&date)?, &number, prompter)?
        }
        HistoryCommand::Move { from_date, from_row, to_date, to_row } => {
            session.history_mut().move_hymn(
                parse_date(&from_date)?,
                to_index(from_row)?,
                parse_date(&to_date)?,
                to_index(to_row)?,
            )?;
            Outcome::Applied
        }
    };

    report_outcome(out, outcome)?;
    render::history(out, &session.history_view())?;
    Ok(())
}

fn report_outcome(out: &mut impl Write, outcome: Outcome) -> Result<()> {
    if outcome == Outcome::Cancelled {
        writeln!(out, "Cancelled.")?;
    }
    Ok(())
}

/// Convert a 1-based position from the command line
fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| anyhow!("positions start at 1"))
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    parse_date_input(input)
        .with_context(|| format!("'{}' is not a date (use YYYY-MM-DD or 'today')", input))
}
