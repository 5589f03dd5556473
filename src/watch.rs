//! Vault watcher
//!
//! Subscribes to filesystem events under the vault root and feeds every
//! newly created markdown note to the rollover handler, one at a time.

use std::sync::mpsc;

use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::error::AppError;
use crate::vault::{FsVault, Note, is_note_path};

/// Notes created by a single filesystem event
pub(crate) fn created_notes(vault: &FsVault, event: &Event) -> Vec<Note> {
    if !matches!(event.kind, EventKind::Create(_)) {
        return Vec::new();
    }
    event
        .paths
        .iter()
        .filter(|path| is_note_path(vault.root(), path) && path.is_file())
        .filter_map(|path| Note::from_path(path))
        .collect()
}

/// Block on vault events, calling `on_created` for each new note.
///
/// Returns only when the watcher shuts down or cannot be started.
pub(crate) fn watch_vault<F>(vault: &FsVault, mut on_created: F) -> Result<(), AppError>
where
    F: FnMut(&Note),
{
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(vault.root(), RecursiveMode::Recursive)?;
    log::info!("Watching {} for new notes", vault.root().display());

    for res in rx {
        match res {
            Ok(event) => {
                for note in created_notes(vault, &event) {
                    on_created(&note);
                }
            }
            Err(err) => log::warn!("Watch error: {err}"),
        }
    }

    Ok(())
}
