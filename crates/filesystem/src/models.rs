use subplus_models::SearchDirectory;

/// Ordered, deduplicated search directories. Index 0 is searched first.
#[derive(Debug, Clone, Default)]
pub struct DirectorySet {
    pub(super) directories: Vec<SearchDirectory>,
}
