use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotaError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to {op} (status {status})")]
    Operation { op: String, status: StatusCode },

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotaError>;
