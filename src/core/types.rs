//! Core data types shared by the locator, extractor, and rollover handler

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::consts::{DEFAULT_LOOKBACK_DAYS, DEFAULT_SECTION_NAME, DEFAULT_SECTION_PREFIX};

/// A note whose identifier looks like a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DatedNote {
    /// Note basename, e.g. "2024-03-08"
    pub(crate) id: String,
    /// Where the repository keeps it
    pub(crate) path: PathBuf,
}

/// Which section of a note holds the tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionConfig {
    pub(crate) section_name: String,
    pub(crate) section_prefix: String,
}

impl SectionConfig {
    pub(crate) fn new(section_name: impl Into<String>, section_prefix: impl Into<String>) -> Self {
        Self {
            section_name: section_name.into(),
            section_prefix: section_prefix.into(),
        }
    }

    /// The line that opens the section, e.g. "## Tasks"
    pub(crate) fn marker(&self) -> String {
        format!("{} {}", self.section_prefix, self.section_name)
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_NAME, DEFAULT_SECTION_PREFIX)
    }
}

/// An unfinished checklist line, kept exactly as written (minus the newline)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct TaskLine(String);

impl TaskLine {
    pub(crate) fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Line text with its trailing newline restored
    pub(crate) fn to_line(&self) -> String {
        format!("{}\n", self.0)
    }
}

impl fmt::Display for TaskLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How many days back the locator looks before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct SearchWindow(u32);

impl SearchWindow {
    pub(crate) fn days(days: u32) -> Self {
        Self(days)
    }

    pub(crate) fn len(self) -> u32 {
        self.0
    }
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self(DEFAULT_LOOKBACK_DAYS)
    }
}

/// Result of looking for the previous daily note
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Located<'a> {
    Found(&'a DatedNote),
    NotFound,
}

impl<'a> Located<'a> {
    pub(crate) fn note(&self) -> Option<&'a DatedNote> {
        match self {
            Located::Found(note) => Some(*note),
            Located::NotFound => None,
        }
    }
}
