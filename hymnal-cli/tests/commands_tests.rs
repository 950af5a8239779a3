//! Integration tests for command dispatch
//!
//! Commands run against a session opened on a temporary data folder, with
//! prompt answers fed from an in-memory buffer.

use hymnal_cli::cli::{Command, HistoryCommand, TagCommand};
use hymnal_cli::commands::run;
use hymnal_cli::prompt::LinePrompter;
use hymnal_common::config::DataPaths;
use hymnal_common::Session;
use tempfile::TempDir;

const CATALOG_CSV: &str = "#,title,section,subsection\n\
1,Amazing Grace,Worship,Adoration\n\
2,Holy Holy Holy,Worship,Adoration\n\
3,How Great Thou Art,Worship,Praise\n";

fn setup(temp_dir: &TempDir) -> (Session, DataPaths) {
    let paths = DataPaths {
        catalog: temp_dir.path().join("hymns.csv"),
        tags: temp_dir.path().join("tags.json"),
        history: temp_dir.path().join("history.json"),
    };
    std::fs::write(&paths.catalog, CATALOG_CSV).unwrap();
    Session::init_documents(&paths).unwrap();
    (Session::open(&paths).unwrap(), paths)
}

/// Run `command` with `answers` as typed input; returns stdout text
fn exec(session: &mut Session, command: Command, answers: &str) -> String {
    let mut prompter = LinePrompter::new(answers.as_bytes(), Vec::new());
    let mut out = Vec::new();
    run(command, session, &mut prompter, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_list_groups_by_category() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, _paths) = setup(&temp_dir);

    let out = exec(&mut session, Command::List { search: None, tag: vec![] }, "");
    let adoration = out.find("Worship: Adoration").unwrap();
    let praise = out.find("Worship: Praise").unwrap();
    assert!(adoration < praise);
    assert!(out.contains("Amazing Grace"));
}

#[test]
fn test_list_search_by_text() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, _paths) = setup(&temp_dir);

    let out = exec(
        &mut session,
        Command::List { search: Some("great thou".to_string()), tag: vec![] },
        "",
    );
    assert!(out.contains("How Great Thou Art"));
    assert!(!out.contains("Amazing Grace"));
}

#[test]
fn test_tag_add_toggle_and_filter() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, paths) = setup(&temp_dir);

    exec(&mut session, Command::Tags(TagCommand::Add { name: None, color: None }), "Joy\nyellow\n");
    let out = exec(
        &mut session,
        Command::Tags(TagCommand::Toggle { position: 1, number: "2".to_string() }),
        "",
    );
    assert!(out.contains("Hymn 2 tagged 'Joy'"));

    let out = exec(&mut session, Command::List { search: None, tag: vec!["Joy".to_string()] }, "");
    assert!(out.contains("Holy Holy Holy  [yellow]"));
    assert!(!out.contains("Amazing Grace"));

    let reopened = Session::open(&paths).unwrap();
    assert_eq!(reopened.tags().get(0).unwrap().hymns, vec!["2"]);
}

#[test]
fn test_tag_remove_declined_keeps_tag() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, _paths) = setup(&temp_dir);
    session.tags_mut().add("Joy", "yellow").unwrap();

    let out = exec(&mut session, Command::Tags(TagCommand::Remove { position: 1, yes: false }), "n\n");
    assert!(out.contains("Cancelled."));
    assert_eq!(session.tags().len(), 1);

    exec(&mut session, Command::Tags(TagCommand::Remove { position: 1, yes: false }), "y\n");
    assert!(session.tags().is_empty());
}

#[test]
fn test_tag_position_zero_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, _paths) = setup(&temp_dir);
    session.tags_mut().add("Joy", "yellow").unwrap();

    let mut prompter = LinePrompter::new("".as_bytes(), Vec::new());
    let mut out = Vec::new();
    let result = run(
        Command::Tags(TagCommand::Move { from: 0, to: 1 }),
        &mut session,
        &mut prompter,
        &mut out,
    );
    assert!(result.is_err());
}

#[test]
fn test_history_record_prompts_for_date_and_lists() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, _paths) = setup(&temp_dir);

    let out = exec(
        &mut session,
        Command::History(HistoryCommand::Record { number: "3".to_string(), date: None }),
        "2024-01-07\n",
    );
    assert!(out.contains("Sunday January 07, 2024"));
    assert!(out.contains("How Great Thou Art"));

    let out = exec(&mut session, remove_history("2024-01-07", "3"), "y\n");
    assert!(out.contains("No history."));
}

fn remove_history(date: &str, number: &str) -> Command {
    Command::History(HistoryCommand::Remove {
        date: date.to_string(),
        number: number.to_string(),
        yes: false,
    })
}

#[test]
fn test_history_remove_without_answer_keeps_entry() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, paths) = setup(&temp_dir);
    session.history_mut().record_hymn(hymnal_common::time::parse_iso_date("2024-01-07").unwrap(), "1").unwrap();

    let out = exec(&mut session, remove_history("2024-01-07", "1"), "");
    assert!(out.contains("Cancelled."));
    let out = exec(&mut session, remove_history("2024-01-07", "1"), "n\n");
    assert!(out.contains("Cancelled."));
    assert_eq!(Session::open(&paths).unwrap().history().len(), 1);

    let out = exec(
        &mut session,
        Command::History(HistoryCommand::Remove {
            date: "2024-01-07".to_string(),
            number: "1".to_string(),
            yes: true,
        }),
        "",
    );
    assert!(out.contains("No history."));
    assert!(Session::open(&paths).unwrap().history().is_empty());
}

#[test]
fn test_show_lists_tags_and_dates() {
    let temp_dir = TempDir::new().unwrap();
    let (mut session, _paths) = setup(&temp_dir);
    session.tags_mut().add("Joy", "yellow").unwrap();
    exec(
        &mut session,
        Command::History(HistoryCommand::Record { number: "1".to_string(), date: Some("2024-01-07".to_string()) }),
        "",
    );

    let out = exec(&mut session, Command::Show { number: "1".to_string() }, "");
    assert!(out.contains("Amazing Grace (#1)"));
    assert!(out.contains("[ ] Joy"));
    assert!(out.contains("Sunday January 07, 2024"));
}
