//! Core module - daily note lookup and task extraction
//!
//! Everything here is a pure function of its inputs; reading and writing
//! notes happens in `vault` and `rollover`.

mod date_format;
mod extractor;
mod locator;
mod types;

pub(crate) use date_format::{DateFormat, IsoDate, is_today_note};
pub(crate) use extractor::{extract, render_block};
pub(crate) use locator::locate;
pub(crate) use types::{DatedNote, Located, SearchWindow, SectionConfig, TaskLine};
