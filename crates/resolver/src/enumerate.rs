use super::listing::list_candidates;
use super::errors::ResolveError;
use super::metadata::stat_file;
use super::models::{Resolver, ScanIssue, ScanReport};
use super::resolve::check_directory;
use subplus_models::SubtitleInfo;
use std::collections::HashSet;

impl Resolver {
    /// Lists every subtitle reachable by its exact stem.
    ///
    /// Directories are visited in priority order and the first file seen for a
    /// stem wins, so each identifier appears once and carries the rank of the
    /// highest-priority directory holding it. Failures are collected into the
    /// report instead of aborting the scan.
    pub async fn enumerate(&self) -> Result<ScanReport, ResolveError> {
        let mut report = ScanReport::default();
        let mut seen: HashSet<String> = HashSet::new();

        for directory in self.directories.list() {
            if let Some(problem) = check_directory(directory).await {
                report.issues.push(ScanIssue {
                    directory: directory.path.clone(),
                    format: None,
                    message: problem,
                });
                continue;
            }

            let listing = list_candidates(&directory.path, &self.formats).await?;
            report.issues.extend(listing.errors.iter().map(|message| ScanIssue {
                directory: directory.path.clone(),
                format: None,
                message: message.clone(),
            }));

            for format in &self.formats {
                for candidate in listing.with_format(format) {
                    if seen.contains(&candidate.stem) {
                        tracing::debug!(
                            "Skipping {} (already listed from a higher-priority entry)",
                            candidate.path.display()
                        );
                        continue;
                    }

                    let (size, modified) = match stat_file(&candidate.path).await {
                        Ok(stat) => stat,
                        Err(e) => {
                            report.issues.push(ScanIssue {
                                directory: directory.path.clone(),
                                format: Some(format.clone()),
                                message: e.to_string(),
                            });
                            continue;
                        }
                    };

                    let filename = candidate
                        .path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();

                    seen.insert(candidate.stem.clone());
                    report.entries.push(SubtitleInfo {
                        video_id: candidate.stem.clone(),
                        filename,
                        format: format.clone(),
                        size,
                        modified,
                        path: candidate.path.display().to_string(),
                        source_dir: Some(directory.path.display().to_string()),
                        priority: Some(directory.priority),
                    });
                }
            }
        }

        tracing::debug!(
            "Enumerated {} subtitle(s) with {} issue(s)",
            report.entries.len(),
            report.issues.len()
        );

        Ok(report)
    }
}
