use std::path::Path;

use chrono::NaiveDate;

use crate::config::Config;
use crate::core::{DatedNote, SearchWindow, SectionConfig, TaskLine};
use crate::error::AppError;
use crate::rollover::Carryover;

pub(crate) fn output_locate_json(
    today: NaiveDate,
    window: SearchWindow,
    previous: Option<&DatedNote>,
) -> Result<String, AppError> {
    let output = serde_json::json!({
        "today": today,
        "lookback_days": window,
        "previous": previous,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

pub(crate) fn output_extract_json(
    file: &Path,
    section: &SectionConfig,
    tasks: &[TaskLine],
) -> Result<String, AppError> {
    let output = serde_json::json!({
        "file": file,
        "section": section.marker(),
        "tasks": tasks,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

pub(crate) fn output_rollover_json(
    note: &Path,
    created: bool,
    written: bool,
    carryover: Option<&Carryover>,
) -> Result<String, AppError> {
    let output = serde_json::json!({
        "note": note,
        "created": created,
        "written": written,
        "previous": carryover.and_then(|c| c.previous.as_ref()),
        "tasks": carryover.map(|c| c.tasks.as_slice()).unwrap_or_default(),
        "block": carryover.map(|c| c.block.as_str()),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

pub(crate) fn output_config_json(config: &Config, path: Option<&Path>) -> Result<String, AppError> {
    let output = serde_json::json!({
        "path": path,
        "settings": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
