use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to expand '{path}': {reason}")]
    ExpansionError { path: String, reason: String },

    #[error("Invalid path: {0}")]
    PathError(String),
}
