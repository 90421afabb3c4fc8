use super::errors::ResolveError;
use super::listing::{list_candidates, Listing};
use super::matcher::flexible_match;
use super::models::Resolver;
use subplus_models::{MatchKind, ResolvedEntry, SearchDirectory};
use std::io::ErrorKind;

type Result<T> = std::result::Result<T, ResolveError>;

impl Resolver {
    /// Finds the single best subtitle file for `video_id`.
    ///
    /// Exact names are tried across every format and directory before any
    /// loose match is considered. Within each phase formats form the outer loop,
    /// so a preferred format in a later directory beats a plainer format in an
    /// earlier one.
    pub async fn resolve(&self, video_id: &str) -> Result<ResolvedEntry> {
        if let Some(entry) = self.resolve_exact(video_id).await {
            return Ok(entry);
        }

        if let Some(entry) = self.resolve_flexible(video_id).await? {
            return Ok(entry);
        }

        tracing::info!("No subtitle found for '{}'", video_id);
        Err(ResolveError::NotFound {
            video_id: video_id.to_string(),
        })
    }

    async fn resolve_exact(&self, video_id: &str) -> Option<ResolvedEntry> {
        for format in &self.formats {
            for directory in self.directories.list() {
                let path = directory.path.join(format!("{}{}", video_id, format));

                match tokio::fs::metadata(&path).await {
                    Ok(metadata) if metadata.is_file() => {
                        tracing::info!(
                            "Found subtitle for '{}': {} (exact, priority {})",
                            video_id,
                            path.display(),
                            directory.priority
                        );
                        return Some(ResolvedEntry {
                            video_id: video_id.to_string(),
                            path,
                            format: format.clone(),
                            directory: directory.clone(),
                            match_kind: MatchKind::Exact,
                        });
                    }
                    Ok(_) => {
                        tracing::debug!("Skipping non-file candidate {}", path.display());
                    }
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => {
                        tracing::warn!(
                            "Cannot inspect '{}' (video '{}', format {}, directory {}): {}",
                            path.display(),
                            video_id,
                            format,
                            directory.path.display(),
                            e
                        );
                    }
                }
            }
        }

        None
    }

    async fn resolve_flexible(&self, video_id: &str) -> Result<Option<ResolvedEntry>> {
        let directories = self.directories.list();
        // Filled on first use so each directory is listed at most once per call
        let mut listings: Vec<Option<Listing>> = directories.iter().map(|_| None).collect();

        for format in &self.formats {
            for (directory, slot) in directories.iter().zip(listings.iter_mut()) {
                if slot.is_none() {
                    *slot = Some(self.list_for_match(directory, video_id).await?);
                }
                let Some(listing) = slot.as_ref() else {
                    continue;
                };

                let hit = listing.with_format(format).find_map(|candidate| {
                    flexible_match(&candidate.stem, video_id).map(|kind| (candidate, kind))
                });

                if let Some((candidate, kind)) = hit {
                    tracing::info!(
                        "Found subtitle for '{}': {} ({:?} match, priority {})",
                        video_id,
                        candidate.path.display(),
                        kind,
                        directory.priority
                    );
                    return Ok(Some(ResolvedEntry {
                        video_id: video_id.to_string(),
                        path: candidate.path.clone(),
                        format: format.clone(),
                        directory: directory.clone(),
                        match_kind: MatchKind::Flexible,
                    }));
                }
            }
        }

        Ok(None)
    }

    async fn list_for_match(&self, directory: &SearchDirectory, video_id: &str) -> Result<Listing> {
        if let Some(problem) = check_directory(directory).await {
            tracing::debug!("Skipping directory {}: {}", directory.path.display(), problem);
            return Ok(Listing::default());
        }

        let listing = list_candidates(&directory.path, &self.formats).await?;
        for error in &listing.errors {
            tracing::warn!(
                "Error while listing {} for '{}': {}",
                directory.path.display(),
                video_id,
                error
            );
        }

        Ok(listing)
    }
}

/// Returns why `directory` cannot be scanned, or `None` when it is usable
pub(crate) async fn check_directory(directory: &SearchDirectory) -> Option<String> {
    match tokio::fs::metadata(&directory.path).await {
        Ok(metadata) if metadata.is_dir() => None,
        Ok(_) => Some("path is no longer a directory".to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Some("directory no longer exists".to_string()),
        Err(e) => {
            tracing::warn!(
                "Cannot inspect directory {} (priority {}): {}",
                directory.path.display(),
                directory.priority,
                e
            );
            Some(format!("directory is inaccessible: {}", e))
        }
    }
}
