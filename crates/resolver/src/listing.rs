use super::errors::ResolveError;
use subplus_utils::strip_suffix_ignore_case;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file whose suffix matches one of the configured formats
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub path: PathBuf,
    pub stem: String,
    pub format: String,
}

#[derive(Debug, Default)]
pub(crate) struct Listing {
    pub candidates: Vec<Candidate>,
    pub errors: Vec<String>,
}

impl Listing {
    /// Candidates of one format, still in filename order
    pub fn with_format<'a>(&'a self, format: &'a str) -> impl Iterator<Item = &'a Candidate> {
        self.candidates.iter().filter(move |c| c.format == format)
    }
}

/// Lists the top level of `dir` once, in filename order.
///
/// Each file is tagged with the first format in `formats` its name ends with.
pub(crate) fn list_directory(dir: &Path, formats: &[String]) -> Listing {
    let mut listing = Listing::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                listing.errors.push(e.to_string());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 filename in {}", dir.display());
            continue;
        };

        let matched = formats.iter().find_map(|format| {
            strip_suffix_ignore_case(file_name, format).map(|stem| (stem, format))
        });

        if let Some((stem, format)) = matched {
            listing.candidates.push(Candidate {
                path: entry.path().to_path_buf(),
                stem: stem.to_string(),
                format: format.clone(),
            });
        }
    }

    listing
}

/// Runs the blocking listing on the blocking pool
pub(crate) async fn list_candidates(dir: &Path, formats: &[String]) -> Result<Listing, ResolveError> {
    let dir = dir.to_path_buf();
    let formats = formats.to_vec();
    let listing = tokio::task::spawn_blocking(move || list_directory(&dir, &formats)).await?;
    Ok(listing)
}
