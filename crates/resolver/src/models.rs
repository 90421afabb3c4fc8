use subplus_filesystem::DirectorySet;
use subplus_models::{SearchDirectory, SubtitleInfo};
use subplus_utils::normalize_suffix;
use std::path::PathBuf;

/// Locates subtitle files by video ID.
///
/// Holds only immutable configuration. Every call goes back to the filesystem,
/// so files added or removed between requests are picked up without invalidation.
#[derive(Debug, Clone)]
pub struct Resolver {
    pub(crate) directories: DirectorySet,
    pub(crate) formats: Vec<String>,
}

impl Resolver {
    /// `formats` are normalized to lowercase dotted suffixes; duplicates keep
    /// their first position.
    pub fn new<S: AsRef<str>>(directories: DirectorySet, formats: &[S]) -> Self {
        let mut normalized: Vec<String> = Vec::with_capacity(formats.len());
        for format in formats {
            match normalize_suffix(format.as_ref()) {
                Some(suffix) if !normalized.contains(&suffix) => normalized.push(suffix),
                Some(_) => {}
                None => tracing::warn!("Ignoring empty subtitle format '{}'", format.as_ref()),
            }
        }

        Self {
            directories,
            formats: normalized,
        }
    }

    pub fn directories(&self) -> &[SearchDirectory] {
        self.directories.list()
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

/// Outcome of listing every directory
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub entries: Vec<SubtitleInfo>,
    pub issues: Vec<ScanIssue>,
}

/// A directory or file that could not be inspected during a scan
#[derive(Debug, Clone)]
pub struct ScanIssue {
    pub directory: PathBuf,
    pub format: Option<String>,
    pub message: String,
}
