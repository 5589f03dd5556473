//! Note repository abstraction
//!
//! The rollover handler only needs to list notes, read one, and append to
//! one. `NoteRepository` captures that so the handler can run against the
//! filesystem or an in-memory vault in tests.

mod fs;

use std::path::{Path, PathBuf};

use crate::core::{DateFormat, DatedNote};
use crate::error::AppError;

pub(crate) use fs::{FsVault, is_note_path};

/// A markdown note in the vault
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Note {
    /// File name without extension
    pub(crate) basename: String,
    pub(crate) path: PathBuf,
}

impl Note {
    /// Build a note reference from a file path; `None` if it has no usable stem
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        let basename = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            basename,
            path: path.to_path_buf(),
        })
    }
}

pub(crate) trait NoteRepository {
    /// All markdown notes in the vault
    fn markdown_notes(&self) -> Result<Vec<Note>, AppError>;

    /// Full text of a note
    fn read(&self, path: &Path) -> Result<String, AppError>;

    /// Add `text` to the end of a note
    fn append(&self, path: &Path, text: &str) -> Result<(), AppError>;
}

/// Notes whose basename follows the daily note pattern
pub(crate) fn daily_notes(
    repo: &dyn NoteRepository,
    format: &dyn DateFormat,
) -> Result<Vec<DatedNote>, AppError> {
    let notes = repo.markdown_notes()?;
    let total = notes.len();
    let daily: Vec<DatedNote> = notes
        .into_iter()
        .filter(|note| format.matches(&note.basename))
        .map(|note| DatedNote {
            id: note.basename,
            path: note.path,
        })
        .collect();
    log::debug!("{} of {} notes are daily notes", daily.len(), total);
    Ok(daily)
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory repository for handler tests

    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::{Note, NoteRepository};
    use crate::error::AppError;

    #[derive(Default)]
    pub(crate) struct MemoryVault {
        notes: RefCell<BTreeMap<PathBuf, String>>,
        fail_append: bool,
    }

    impl MemoryVault {
        pub(crate) fn with_notes(notes: &[(&str, &str)]) -> Self {
            let vault = Self::default();
            for (name, text) in notes {
                vault.insert(name, text);
            }
            vault
        }

        pub(crate) fn read_only(mut self) -> Self {
            self.fail_append = true;
            self
        }

        pub(crate) fn insert(&self, name: &str, text: &str) -> PathBuf {
            let path = PathBuf::from(format!("{name}.md"));
            self.notes.borrow_mut().insert(path.clone(), text.to_string());
            path
        }

        pub(crate) fn text(&self, name: &str) -> Option<String> {
            self.notes
                .borrow()
                .get(&PathBuf::from(format!("{name}.md")))
                .cloned()
        }
    }

    fn missing(path: &Path) -> AppError {
        AppError::io(
            "read",
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such note"),
        )
    }

    impl NoteRepository for MemoryVault {
        fn markdown_notes(&self) -> Result<Vec<Note>, AppError> {
            Ok(self
                .notes
                .borrow()
                .keys()
                .filter_map(|path| Note::from_path(path))
                .collect())
        }

        fn read(&self, path: &Path) -> Result<String, AppError> {
            self.notes
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| missing(path))
        }

        fn append(&self, path: &Path, text: &str) -> Result<(), AppError> {
            if self.fail_append {
                return Err(AppError::io(
                    "append to",
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only vault"),
                ));
            }
            let mut notes = self.notes.borrow_mut();
            let note = notes.get_mut(path).ok_or_else(|| missing(path))?;
            note.push_str(text);
            Ok(())
        }
    }
}
