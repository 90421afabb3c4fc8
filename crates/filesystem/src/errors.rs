use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("Directory '{path}' is unavailable: {reason}")]
    DirectoryUnavailable { path: String, reason: String },

    #[error("None of the configured subtitle directories are usable")]
    NoUsableDirectories,
}

