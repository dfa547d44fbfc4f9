use std::io;
use std::path::PathBuf;

use thiserror::Error;

use modulo_core::DesignError;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid design: {0}")]
    Design(#[from] DesignError),

    #[error("Failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
}
