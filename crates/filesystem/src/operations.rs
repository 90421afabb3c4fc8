use super::errors::FileSystemError;
use super::models::DirectorySet;
use subplus_events::{AppEvent, EventBus};
use subplus_models::SearchDirectory;
use subplus_utils::{absolutize, expand_path};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

type Result<T> = std::result::Result<T, FileSystemError>;

impl DirectorySet {
    /// Prepares every configured directory in order.
    ///
    /// Unusable entries are reported through the event bus and left out; the set
    /// only fails when nothing usable remains.
    pub async fn initialize<S: AsRef<str>>(raw_paths: &[S], events: &Arc<EventBus>) -> Result<Self> {
        let mut directories: Vec<SearchDirectory> = Vec::with_capacity(raw_paths.len());

        for raw in raw_paths {
            let raw = raw.as_ref();

            let path = match Self::prepare_directory(raw).await {
                Ok(path) => path,
                Err(e) => {
                    events.emit(AppEvent::DirectoryUnavailable {
                        path: raw.to_string(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            if directories.iter().any(|d| d.path == path) {
                events.emit(AppEvent::DirectoryDuplicate {
                    path: path.display().to_string(),
                });
                continue;
            }

            let priority = directories.len() + 1;
            events.emit(AppEvent::DirectoryReady {
                path: path.display().to_string(),
                priority,
            });
            directories.push(SearchDirectory::new(path, priority));
        }

        events.emit(AppEvent::AllDirectoriesInitialized {
            active: directories.len(),
        });

        if directories.is_empty() {
            return Err(FileSystemError::NoUsableDirectories);
        }

        Ok(Self { directories })
    }

    /// Directories in search order
    pub fn list(&self) -> &[SearchDirectory] {
        &self.directories
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Expands, creates and canonicalizes a single configured path
    async fn prepare_directory(raw: &str) -> Result<PathBuf> {
        let unavailable = |reason: String| FileSystemError::DirectoryUnavailable {
            path: raw.to_string(),
            reason,
        };

        let expanded = expand_path(raw).map_err(|e| unavailable(e.to_string()))?;
        let abs_path = absolutize(&expanded).map_err(|e| unavailable(e.to_string()))?;

        Self::create_directory(&abs_path)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let canonical = fs::canonicalize(&abs_path)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let metadata = fs::metadata(&canonical)
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(unavailable("path exists but is not a directory".to_string()));
        }

        Ok(canonical)
    }

    async fn create_directory(path: &Path) -> std::io::Result<()> {
        match fs::create_dir_all(path).await {
            Ok(()) => {
                tracing::debug!("    Ready: {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    #[tokio::test]
    async fn test_preserves_order_and_assigns_priority() {
        let tmp = tempdir().unwrap();
        let first = tmp.path().join("first");
        let second = tmp.path().join("second");
        let events = EventBus::new(true);

        let set = DirectorySet::initialize(&[path_str(&first), path_str(&second)], &events)
            .await
            .unwrap();

        let dirs = set.list();
        assert_eq!(dirs.len(), 2);
        assert!(dirs[0].path.ends_with("first"));
        assert_eq!(dirs[0].priority, 1);
        assert!(dirs[1].path.ends_with("second"));
        assert_eq!(dirs[1].priority, 2);
        assert!(dirs.iter().all(|d| d.path.is_absolute() && d.path.is_dir()));
    }

    #[tokio::test]
    async fn test_creates_missing_parents() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");
        let events = EventBus::new(true);

        let set = DirectorySet::initialize(&[path_str(&nested)], &events).await.unwrap();

        assert!(nested.is_dir());
        assert_eq!(set.len(), 1);
    }

    #[tokio::test]
    async fn test_deduplicates_after_canonicalization() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("subs");
        let alias = dir.join("..").join("subs");
        let events = EventBus::new(true);

        let set = DirectorySet::initialize(&[path_str(&dir), path_str(&alias)], &events)
            .await
            .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.list()[0].priority, 1);
    }

    #[tokio::test]
    async fn test_unusable_directory_is_excluded() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir.txt");
        std::fs::write(&blocker, b"x").unwrap();
        let good = tmp.path().join("good");
        let events = EventBus::new(true);

        let set = DirectorySet::initialize(
            &[path_str(&blocker.join("sub")), path_str(&blocker), path_str(&good)],
            &events,
        )
        .await
        .unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.list()[0].path.ends_with("good"));
        assert_eq!(set.list()[0].priority, 1);
    }

    #[tokio::test]
    async fn test_fails_without_usable_directories() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let events = EventBus::new(true);

        let result = DirectorySet::initialize(&[path_str(&blocker.join("sub"))], &events).await;

        assert!(matches!(result, Err(FileSystemError::NoUsableDirectories)));
    }
}
