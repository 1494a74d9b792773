use crate::model::Project;
use crate::normalize::normalize;
use crate::tokenizer::tokenize;
use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} is not a .csv file", .0.display())]
    InvalidFileType(PathBuf),
    #[error("file content is not valid UTF-8 text")]
    ParseFailure(#[from] Utf8Error),
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Message shown to the user for a failed upload.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::InvalidFileType(_) => "Please upload a .csv file.",
            LoadError::ParseFailure(_) | LoadError::Io { .. } => {
                "Could not parse the file. Please check the format."
            }
        }
    }
}

/// Accept only file names ending in `.csv`, in any case.
pub fn check_file_type(path: &Path) -> Result<(), LoadError> {
    let is_csv = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(".csv"));
    if is_csv {
        Ok(())
    } else {
        Err(LoadError::InvalidFileType(path.to_owned()))
    }
}

/// Tokenize and normalize a document. Never fails.
pub fn parse_text(text: &str) -> Vec<Project> {
    normalize(&tokenize(text))
}

/// Decode UTF-8 content, dropping a leading byte-order mark, then parse it.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Project>, LoadError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_text(text.strip_prefix('\u{feff}').unwrap_or(text)))
}

pub struct Loader {
    path: PathBuf,
}

impl Loader {
    /// Fails without touching the file if it is not a CSV file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        check_file_type(&path)?;
        Ok(Self { path })
    }

    /// Read the whole file into memory.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub async fn read(&self) -> Result<Vec<u8>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!(bytes = bytes.len(), "file read");
        Ok(bytes)
    }
}
