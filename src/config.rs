//! Process-wide configuration
//!
//! File locations for the three record stores and the report output.
//! Passed explicitly to store constructors; there are no module-level
//! path singletons.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::{StoreError, StoreResult};

/// Configuration file structure.
///
/// Every field has a conventional default, so a missing config file (or
/// an empty JSON object) yields the stock layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Book store file
    #[serde(default = "default_books_file")]
    pub books_file: PathBuf,

    /// Member store file
    #[serde(default = "default_members_file")]
    pub members_file: PathBuf,

    /// Lending store file
    #[serde(default = "default_lendings_file")]
    pub lendings_file: PathBuf,

    /// Report output file, regenerated in full on each invocation
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
}

fn default_books_file() -> PathBuf {
    PathBuf::from("books.dat")
}
fn default_members_file() -> PathBuf {
    PathBuf::from("members.dat")
}
fn default_lendings_file() -> PathBuf {
    PathBuf::from("lendings.dat")
}
fn default_report_file() -> PathBuf {
    PathBuf::from("library_report.txt")
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            books_file: default_books_file(),
            members_file: default_members_file(),
            lendings_file: default_lendings_file(),
            report_file: default_report_file(),
        }
    }
}

impl LibraryConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError::invalid_input(format!("invalid config JSON: {}", e)))
    }

    /// Load configuration, falling back to defaults when the file does
    /// not exist.
    pub fn load_or_default(path: &Path) -> StoreResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StoreError::invalid_input(format!("invalid config JSON: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Rebase all file paths onto a directory. Used by tests and by
    /// callers that keep the data files together.
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = Self::default();
        Self {
            books_file: dir.join(defaults.books_file),
            members_file: dir.join(defaults.members_file),
            lendings_file: dir.join(defaults.lendings_file),
            report_file: dir.join(defaults.report_file),
        }
    }
}
