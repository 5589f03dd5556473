//! Vault backed by a directory of markdown files

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use super::{Note, NoteRepository};
use crate::consts::NOTE_EXTENSION;
use crate::error::AppError;

pub(crate) struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub(crate) fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AppError::VaultNotFound { path: root });
        }
        Ok(Self { root })
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the note named `basename` at the vault root
    pub(crate) fn note_path(&self, basename: &str) -> PathBuf {
        self.root.join(format!("{basename}.{NOTE_EXTENSION}"))
    }

    /// Create an empty note; `Ok(false)` if it already exists
    pub(crate) fn create(&self, path: &Path) -> Result<bool, AppError> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(AppError::io("create", path, err)),
        }
    }
}

/// Whether `path` names a markdown note outside any hidden directory
pub(crate) fn is_note_path(root: &Path, path: &Path) -> bool {
    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == NOTE_EXTENSION);
    if !is_markdown {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    !relative
        .components()
        .any(|c| c.as_os_str().to_str().is_some_and(|s| s.starts_with('.')))
}

impl NoteRepository for FsVault {
    fn markdown_notes(&self) -> Result<Vec<Note>, AppError> {
        let pattern = format!(
            "{}/**/*.{NOTE_EXTENSION}",
            Pattern::escape(&self.root.to_string_lossy())
        );
        // Skips .obsidian, .trash and friends
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let mut notes = Vec::new();
        let entries = match glob::glob_with(&pattern, options) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Bad vault pattern {pattern}: {err}");
                return Ok(notes);
            }
        };
        for entry in entries {
            match entry {
                Ok(path) => {
                    if let Some(note) = Note::from_path(&path) {
                        notes.push(note);
                    }
                }
                Err(err) => log::debug!("Skipping unreadable vault entry: {err}"),
            }
        }
        Ok(notes)
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::io("read", path, e))
    }

    fn append(&self, path: &Path, text: &str) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| AppError::io("append to", path, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| AppError::io("append to", path, e))
    }
}
