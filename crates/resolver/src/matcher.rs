/// Which loose-naming rule accepted a filename stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexibleMatch {
    Equal,
    /// `<id>-...` or `<id>_...`
    Prefix,
    /// `...-<id>` or `..._<id>`
    Suffix,
    /// Any other stem containing the id
    Substring,
}

const SEPARATORS: [char; 2] = ['-', '_'];

/// Tests a filename stem against a video ID.
///
/// Matching is case-sensitive. The substring rule makes the affix rules
/// redundant for acceptance; they are kept so the kind of match can be logged.
pub fn flexible_match(stem: &str, video_id: &str) -> Option<FlexibleMatch> {
    if video_id.is_empty() {
        return None;
    }

    if stem == video_id {
        return Some(FlexibleMatch::Equal);
    }

    if let Some(head) = stem.strip_suffix(video_id) {
        if head.ends_with(SEPARATORS) {
            return Some(FlexibleMatch::Suffix);
        }
    }

    if let Some(tail) = stem.strip_prefix(video_id) {
        if tail.starts_with(SEPARATORS) {
            return Some(FlexibleMatch::Prefix);
        }
    }

    if stem.contains(video_id) {
        return Some(FlexibleMatch::Substring);
    }

    None
}
