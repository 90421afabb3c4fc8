mod models;
mod operations;
mod errors;

pub use models::DirectorySet;
pub use errors::FileSystemError;
