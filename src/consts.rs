/// Standard date format used for daily note names: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days searched backward when looking for the previous daily note
pub(crate) const DEFAULT_LOOKBACK_DAYS: u32 = 14;

pub(crate) const DEFAULT_SECTION_NAME: &str = "Tasks";
pub(crate) const DEFAULT_SECTION_PREFIX: &str = "##";

/// Heading written above carried tasks, whatever section is configured
pub(crate) const TASKS_HEADING: &str = "## Tasks";

/// Written in place of a task list when nothing carries over
pub(crate) const NOTHING_FOUND: &str = "No unfinished business found in previous notes";

/// Notice shown when a new daily note is picked up
pub(crate) const CREATED_NOTICE: &str = "Today note created - Generating Unfinished Business";

pub(crate) const NOTE_EXTENSION: &str = "md";
