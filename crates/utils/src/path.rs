use crate::UtilsError;
use std::path::{Path, PathBuf};

/// Expands `~` and `$VAR` / `${VAR}` references in a configured path
pub fn expand_path(raw: &str) -> Result<PathBuf, UtilsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UtilsError::PathError("empty path".to_string()));
    }

    let expanded = shellexpand::full(trimmed).map_err(|e| UtilsError::ExpansionError {
        path: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    Ok(PathBuf::from(expanded.as_ref()))
}

/// Joins relative paths onto the current working directory
pub fn absolutize(path: &Path) -> Result<PathBuf, UtilsError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Normalizes a configured format to a lowercase suffix with a leading dot
pub fn normalize_suffix(format: &str) -> Option<String> {
    let trimmed = format.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_ascii_lowercase()))
}

/// Returns the stem when `file_name` ends with `suffix` (ASCII case-insensitive).
/// A bare suffix with nothing in front of it yields `None`.
pub fn strip_suffix_ignore_case<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    if file_name.len() <= suffix.len() {
        return None;
    }

    let split = file_name.len() - suffix.len();
    if !file_name.is_char_boundary(split) {
        return None;
    }

    let (stem, tail) = file_name.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(stem)
}
