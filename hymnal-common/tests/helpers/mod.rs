//! Shared fixtures for hymnal-common integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use hymnal_common::config::DataPaths;
use hymnal_common::interaction::Prompter;
use std::collections::VecDeque;
use std::path::Path;

pub const CATALOG_CSV: &str = "#,title,section,subsection\n\
1,Amazing Grace,Worship,Adoration\n\
2,Holy Holy Holy,Worship,Adoration\n\
3,How Great Thou Art,Worship,Praise\n\
4,Joy to the World,Christmas,Advent\n\
5,O Come All Ye Faithful,Christmas,Advent\n\
6,Christ the Lord Is Risen Today,Easter,Resurrection\n";

/// Write a catalog plus empty documents into `dir` and return their paths
pub fn write_fixture(dir: &Path) -> DataPaths {
    let paths = DataPaths {
        catalog: dir.join("hymns.csv"),
        tags: dir.join("tags.json"),
        history: dir.join("history.json"),
    };
    std::fs::write(&paths.catalog, CATALOG_CSV).unwrap();
    std::fs::write(&paths.tags, "[]").unwrap();
    std::fs::write(&paths.history, "{}").unwrap();
    paths
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// One scripted answer per prompt; `None` simulates the user cancelling
#[derive(Debug, Clone)]
pub enum Answer {
    Text(Option<String>),
    Date(Option<NaiveDate>),
    Choice(Option<usize>),
    Confirm(bool),
}

/// Prompter that replays answers in order and records the prompts it saw
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
    pub defaults: Vec<Option<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    pub fn say(s: &str) -> Answer {
        Answer::Text(Some(s.to_string()))
    }

    fn next(&mut self, title: &str) -> Answer {
        self.prompts.push(title.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {}", title))
    }

    pub fn exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, title: &str, default: Option<&str>) -> Option<String> {
        self.defaults.push(default.map(str::to_string));
        match self.next(title) {
            Answer::Text(v) => v,
            other => panic!("expected text answer for {}, got {:?}", title, other),
        }
    }

    fn date(&mut self, title: &str) -> Option<NaiveDate> {
        match self.next(title) {
            Answer::Date(v) => v,
            other => panic!("expected date answer for {}, got {:?}", title, other),
        }
    }

    fn choose(&mut self, title: &str, _options: &[&str]) -> Option<usize> {
        match self.next(title) {
            Answer::Choice(v) => v,
            other => panic!("expected choice answer for {}, got {:?}", title, other),
        }
    }

    fn confirm(&mut self, title: &str, _message: &str) -> bool {
        match self.next(title) {
            Answer::Confirm(v) => v,
            other => panic!("expected confirmation for {}, got {:?}", title, other),
        }
    }
}
