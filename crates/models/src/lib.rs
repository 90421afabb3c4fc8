use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A configured search directory and its 1-based priority rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDirectory {
    pub path: PathBuf,
    pub priority: usize,
}

impl SearchDirectory {
    pub fn new(path: PathBuf, priority: usize) -> Self {
        Self { path, priority }
    }
}

/// How a subtitle file was matched against the requested video ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Flexible,
}

/// Result of a successful lookup. Built fresh on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub video_id: String,
    pub path: PathBuf,
    pub format: String,
    pub directory: SearchDirectory,
    pub match_kind: MatchKind,
}

impl ResolvedEntry {
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Subtitle metadata as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleInfo {
    pub video_id: String,
    pub filename: String,
    pub format: String,
    pub size: u64,
    pub modified: i64,  // seconds since the Unix epoch
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<usize>,
}

/// Text encoding a subtitle file was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    Utf8,
    Gbk,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Gbk => "gbk",
        }
    }

    /// Only the legacy fallback is reported to clients
    pub fn is_fallback(&self) -> bool {
        !matches!(self, TextEncoding::Utf8)
    }
}

/// Decoded subtitle text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleContent {
    pub text: String,
    pub encoding: TextEncoding,
}
