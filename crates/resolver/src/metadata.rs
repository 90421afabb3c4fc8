use super::decode::decode_subtitle;
use super::errors::ResolveError;
use super::models::Resolver;
use subplus_models::{ResolvedEntry, SubtitleContent, SubtitleInfo};
use chrono::{DateTime, Utc};
use std::path::Path;
use tokio::io::AsyncReadExt;

type Result<T> = std::result::Result<T, ResolveError>;

impl Resolver {
    /// Resolves `video_id` and stats the file
    pub async fn describe(&self, video_id: &str) -> Result<SubtitleInfo> {
        let entry = self.resolve(video_id).await?;
        self.describe_entry(&entry).await
    }

    /// Stats an already resolved entry. A file deleted since resolution is a
    /// read failure, not a miss.
    pub async fn describe_entry(&self, entry: &ResolvedEntry) -> Result<SubtitleInfo> {
        let (size, modified) = stat_file(&entry.path).await?;

        Ok(SubtitleInfo {
            video_id: entry.video_id.clone(),
            filename: entry.filename(),
            format: entry.format.clone(),
            size,
            modified,
            path: entry.path.display().to_string(),
            source_dir: None,
            priority: None,
        })
    }

    /// Resolves `video_id` and decodes its content
    pub async fn read(&self, video_id: &str) -> Result<SubtitleContent> {
        let entry = self.resolve(video_id).await?;
        self.read_entry(&entry).await
    }

    pub async fn read_entry(&self, entry: &ResolvedEntry) -> Result<SubtitleContent> {
        let bytes = read_bytes(&entry.path).await?;

        match decode_subtitle(&bytes) {
            Some(content) => {
                if content.encoding.is_fallback() {
                    tracing::info!(
                        "Decoded {} as {}",
                        entry.path.display(),
                        content.encoding.as_str()
                    );
                }
                Ok(content)
            }
            None => {
                tracing::error!(
                    "Unsupported encoding in {} (video '{}')",
                    entry.path.display(),
                    entry.video_id
                );
                Err(ResolveError::DecodeFailure {
                    path: entry.path.clone(),
                })
            }
        }
    }
}

/// Size in bytes and modification time in epoch seconds
pub(crate) async fn stat_file(path: &Path) -> Result<(u64, i64)> {
    let read_failure = |source: std::io::Error| {
        tracing::error!("Failed to stat {}: {}", path.display(), source);
        ResolveError::ReadFailure {
            path: path.to_path_buf(),
            source,
        }
    };

    let metadata = tokio::fs::metadata(path).await.map_err(read_failure)?;
    let modified = metadata.modified().map_err(read_failure)?;

    Ok((metadata.len(), DateTime::<Utc>::from(modified).timestamp()))
}

async fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let read_failure = |source: std::io::Error| {
        tracing::error!("Failed to read {}: {}", path.display(), source);
        ResolveError::ReadFailure {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut file = tokio::fs::File::open(path).await.map_err(read_failure)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).await.map_err(read_failure)?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{resolver_for, write};
    use subplus_models::TextEncoding;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_describe_reports_metadata() {
        let tmp = tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let resolver = resolver_for(&[&d1]).await;
        write(&d1, "abcde.ASS", b"[Script Info]\n");

        let info = resolver.describe("abcde").await;

        // Exact lookups use the configured suffix; the uppercase name is only
        // reachable through the flexible phase
        let info = info.unwrap();
        assert_eq!(info.video_id, "abcde");
        assert_eq!(info.filename, "abcde.ASS");
        assert_eq!(info.format, ".ass");
        assert_eq!(info.size, 14);
        assert!(info.modified > 0);
        assert!(Path::new(&info.path).is_absolute());
        assert!(info.source_dir.is_none());
        assert!(info.priority.is_none());
    }

    #[tokio::test]
    async fn test_describe_deleted_file_is_read_failure() {
        let tmp = tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let resolver = resolver_for(&[&d1]).await;
        write(&d1, "abcde.srt", b"x");

        let entry = resolver.resolve("abcde").await.unwrap();
        std::fs::remove_file(&entry.path).unwrap();

        let err = resolver.describe_entry(&entry).await.unwrap_err();
        assert!(matches!(err, ResolveError::ReadFailure { .. }));
    }

    #[tokio::test]
    async fn test_read_utf8() {
        let tmp = tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let resolver = resolver_for(&[&d1]).await;
        write(&d1, "abcde.srt", "1\n00:00:01,000 --> 00:00:02,000\n字幕\n".as_bytes());

        let content = resolver.read("abcde").await.unwrap();

        assert_eq!(content.encoding, TextEncoding::Utf8);
        assert!(content.text.contains("字幕"));
    }

    #[tokio::test]
    async fn test_read_gbk_fallback() {
        let tmp = tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let resolver = resolver_for(&[&d1]).await;
        let mut bytes = b"Dialogue: ".to_vec();
        bytes.extend_from_slice(&[0xC4, 0xE3, 0xBA, 0xC3]);
        write(&d1, "abcde.ass", &bytes);

        let content = resolver.read("abcde").await.unwrap();

        assert_eq!(content.encoding, TextEncoding::Gbk);
        assert_eq!(content.text, "Dialogue: 你好");
    }

    #[tokio::test]
    async fn test_read_undecodable() {
        let tmp = tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let resolver = resolver_for(&[&d1]).await;
        write(&d1, "abcde.vtt", &[0xFF, 0xFF, 0xFF]);

        let err = resolver.read("abcde").await.unwrap_err();

        assert!(matches!(err, ResolveError::DecodeFailure { .. }));
    }

    #[tokio::test]
    async fn test_read_missing() {
        let tmp = tempdir().unwrap();
        let d1 = tmp.path().join("d1");
        let resolver = resolver_for(&[&d1]).await;

        let err = resolver.read("abcde").await.unwrap_err();

        assert!(err.is_not_found());
    }
}
