//! Daily note naming
//!
//! The locator only ever asks two questions of a note name: does it look like
//! a daily note, and which name would a given day have. `DateFormat` keeps
//! those answers in one place so another naming scheme can be slotted in.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::consts::DATE_FORMAT;

static ISO_DATE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static daily note pattern is valid")
});

pub(crate) trait DateFormat: Send + Sync {
    /// Whether `name` follows the daily note naming pattern
    fn matches(&self, name: &str) -> bool;

    /// Note name for a calendar day
    fn format(&self, date: NaiveDate) -> String;

    /// Calendar day named by `name`, if it is a real date
    fn parse(&self, name: &str) -> Option<NaiveDate>;
}

/// `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IsoDate;

impl DateFormat for IsoDate {
    fn matches(&self, name: &str) -> bool {
        ISO_DATE_NAME.is_match(name)
    }

    fn format(&self, date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    fn parse(&self, name: &str) -> Option<NaiveDate> {
        if !self.matches(name) {
            return None;
        }
        NaiveDate::parse_from_str(name, DATE_FORMAT).ok()
    }
}

/// Whether the note called `name` is the daily note for `today`.
///
/// Names are read as plain calendar dates, never as instants, so there is no
/// UTC midnight to drift across. Callers resolve `today` in the user's zone
/// (see [`crate::utils::Timezone::today`]).
pub(crate) fn is_today_note(name: &str, today: NaiveDate, format: &dyn DateFormat) -> bool {
    format.parse(name) == Some(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn matches_strict_iso_names_only() {
        assert!(IsoDate.matches("2024-03-08"));
        assert!(IsoDate.matches("2024-13-45"));
        assert!(!IsoDate.matches("2024-3-8"));
        assert!(!IsoDate.matches("2024-03-08 meeting"));
        assert!(!IsoDate.matches(" 2024-03-08"));
        assert!(!IsoDate.matches("20240308"));
    }

    #[test]
    fn format_pads_month_and_day() {
        assert_eq!(IsoDate.format(date("2024-03-08")), "2024-03-08");
        assert_eq!(IsoDate.format(date("0999-01-01")), "0999-01-01");
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert_eq!(IsoDate.parse("2024-02-29"), Some(date("2024-02-29")));
        assert_eq!(IsoDate.parse("2023-02-29"), None);
        assert_eq!(IsoDate.parse("2024-13-45"), None);
    }

    #[test]
    fn today_note_matches_same_calendar_day() {
        let today = date("2024-03-10");
        assert!(is_today_note("2024-03-10", today, &IsoDate));
        assert!(!is_today_note("2024-03-09", today, &IsoDate));
        assert!(!is_today_note("2024-03-11", today, &IsoDate));
    }

    #[test]
    fn today_note_rejects_non_daily_names() {
        let today = date("2024-03-10");
        assert!(!is_today_note("Meeting notes", today, &IsoDate));
        assert!(!is_today_note("2024-03-10 standup", today, &IsoDate));
        assert!(!is_today_note("", today, &IsoDate));
    }
}
