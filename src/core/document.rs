//! Document Loading
//!
//! A command definition file read once into memory, never mutated.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a document could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path } | LoadError::ReadError { path, .. } => path,
        }
    }
}

/// Raw text of a command definition plus its derived line list
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: PathBuf,
    text: String,
    lower: String,
    lines: Vec<String>,
}

impl Document {
    /// Read a document from disk.
    ///
    /// Missing paths and directories are `NotFound`; every other failure,
    /// including content that is not valid UTF-8, is a `ReadError`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::ReadError {
                path: path.to_path_buf(),
                source,
            },
        })?;

        log::debug!("Loaded {} ({} bytes)", path.display(), text.len());
        Ok(Self::with_path(path, text))
    }

    /// Build a document from in-memory text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::with_path("<memory>", text)
    }

    fn with_path(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into().replace("\r\n", "\n");
        let lines = text.lines().map(str::to_string).collect();
        Self {
            path: path.into(),
            lower: text.to_lowercase(),
            text,
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lowercased text, used by the keyword checks
    pub fn lowercase(&self) -> &str {
        &self.lower
    }
}
