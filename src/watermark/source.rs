//! Request-side helpers: where the image comes from and what the panel says.

use super::WatermarkError;
use std::path::{Component, Path, PathBuf};

/// Resolve a requested image path, optionally below `root`.
///
/// Leading separators are ignored so `/img/a.png` and `img/a.png` name the
/// same file. Paths that are empty, climb out with `..`, or do not point at
/// an existing file are reported as [`WatermarkError::NotFound`].
pub fn resolve_image_path(root: Option<&Path>, requested: &str) -> Result<PathBuf, WatermarkError> {
    let trimmed = requested.trim_start_matches(['/', '\\']);
    if trimmed.is_empty() {
        return Err(WatermarkError::NotFound(PathBuf::from(requested)));
    }

    let relative = Path::new(trimmed);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(WatermarkError::NotFound(PathBuf::from(requested)));
    }

    let resolved = match root {
        Some(root) => root.join(relative),
        None => relative.to_path_buf(),
    };

    if !resolved.is_file() {
        return Err(WatermarkError::NotFound(resolved));
    }

    Ok(resolved)
}

/// Text drawn on the panel: the short-link host, followed by the link hash
/// when there is one.
pub fn panel_label(host: &str, link_hash: Option<&str>) -> String {
    match link_hash.map(str::trim).filter(|hash| !hash.is_empty()) {
        Some(hash) => format!("{}/{}", host.trim_end_matches('/'), hash),
        None => host.to_string(),
    }
}
