//! Note-created handler
//!
//! When today's daily note appears, find the previous daily note, pull its
//! unfinished tasks, and append them to the new note.

use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::CREATED_NOTICE;
use crate::core::{
    DateFormat, DatedNote, Located, SearchWindow, SectionConfig, TaskLine, extract,
    is_today_note, locate, render_block,
};
use crate::error::AppError;
use crate::vault::{Note, NoteRepository, daily_notes};

/// Inputs fixed for one handler invocation
pub(crate) struct RolloverContext<'a> {
    pub(crate) today: NaiveDate,
    pub(crate) section: &'a SectionConfig,
    pub(crate) window: SearchWindow,
    pub(crate) format: &'a dyn DateFormat,
    /// Suppress the user-facing notice
    pub(crate) quiet: bool,
}

/// What the handler found and wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Carryover {
    pub(crate) previous: Option<DatedNote>,
    pub(crate) tasks: Vec<TaskLine>,
    pub(crate) block: String,
}

/// Work out what should be carried into today's note, without writing anything
pub(crate) fn prepare(
    repo: &dyn NoteRepository,
    ctx: &RolloverContext<'_>,
) -> Result<Carryover, AppError> {
    let candidates = daily_notes(repo, ctx.format)?;
    let located = locate(ctx.today, &candidates, ctx.window, ctx.format);

    let tasks = match &located {
        Located::Found(note) => {
            let text = repo.read(&note.path)?;
            extract(&text, ctx.section)
        }
        Located::NotFound => Vec::new(),
    };
    let block = render_block(ctx.section, &located, &tasks);

    Ok(Carryover {
        previous: located.note().cloned(),
        tasks,
        block,
    })
}

/// Handle a freshly created note.
///
/// Returns `Ok(None)` when the note is not today's daily note.
pub(crate) fn on_note_created(
    repo: &dyn NoteRepository,
    note: &Note,
    ctx: &RolloverContext<'_>,
) -> Result<Option<Carryover>, AppError> {
    if !is_today_note(&note.basename, ctx.today, ctx.format) {
        log::debug!("Ignoring {}: not today's daily note", note.path.display());
        return Ok(None);
    }

    if !ctx.quiet {
        eprintln!("{CREATED_NOTICE}");
    }

    let carryover = prepare(repo, ctx)?;
    match &carryover.previous {
        Some(previous) => log::info!(
            "Carrying {} task(s) from {} into {}",
            carryover.tasks.len(),
            previous.id,
            note.basename
        ),
        None => log::info!(
            "No daily note in the last {} day(s); writing placeholder to {}",
            ctx.window.len(),
            note.basename
        ),
    }

    repo.append(&note.path, &carryover.block)?;
    Ok(Some(carryover))
}
