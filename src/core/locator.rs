//! Previous daily note lookup

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use super::date_format::DateFormat;
use super::types::{DatedNote, Located, SearchWindow};

/// Find the most recent daily note before `today`.
///
/// Checks `today - 1`, `today - 2`, ... up to `today - window` and returns the
/// first day that has a note. Today's own note is never a candidate.
pub(crate) fn locate<'a>(
    today: NaiveDate,
    candidates: &'a [DatedNote],
    window: SearchWindow,
    format: &dyn DateFormat,
) -> Located<'a> {
    if window.len() == 0 || candidates.is_empty() {
        return Located::NotFound;
    }

    // First note wins if a vault holds the same name twice
    let mut by_id: HashMap<&str, &'a DatedNote> = HashMap::with_capacity(candidates.len());
    for note in candidates {
        by_id.entry(note.id.as_str()).or_insert(note);
    }

    for step in 1..=window.len() {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(step))) else {
            break;
        };
        let name = format.format(day);
        if let Some(&note) = by_id.get(name.as_str()) {
            log::debug!("Previous note {} found {} day(s) back", note.id, step);
            return Located::Found(note);
        }
    }

    log::debug!(
        "No daily note in the {} day(s) before {}",
        window.len(),
        format.format(today)
    );
    Located::NotFound
}
