use std::path::Path;

use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::core::{DatedNote, SearchWindow, SectionConfig, TaskLine};
use crate::rollover::Carryover;

pub(crate) fn format_locate(today: NaiveDate, window: SearchWindow, previous: Option<&DatedNote>) -> String {
    match previous {
        Some(note) => format!("{} ({})", note.id, note.path.display()),
        None => format!(
            "No daily note in the {} day(s) before {}.",
            window.len(),
            today.format(DATE_FORMAT)
        ),
    }
}

pub(crate) fn format_extract(section: &SectionConfig, tasks: &[TaskLine]) -> String {
    if tasks.is_empty() {
        return format!("No unfinished tasks under \"{}\".", section.marker());
    }
    tasks.iter().map(TaskLine::as_str).collect::<Vec<_>>().join("\n")
}

pub(crate) fn format_rollover(note: &Path, carryover: &Carryover) -> String {
    match &carryover.previous {
        Some(previous) if !carryover.tasks.is_empty() => format!(
            "Carried {} task(s) from {} into {}",
            carryover.tasks.len(),
            previous.id,
            note.display()
        ),
        Some(previous) => format!(
            "No unfinished tasks in {}; placeholder written to {}",
            previous.id,
            note.display()
        ),
        None => format!(
            "No previous daily note found; placeholder written to {}",
            note.display()
        ),
    }
}
