//! Resolution of the starting directory

use std::path::{Path, PathBuf};

use crate::error::{Result, TwigError};

/// Turn the user-supplied directory into the absolute root of the walk.
///
/// Absolute inputs are returned untouched: no canonicalization and no
/// existence check, so a missing absolute path is reported when the walk
/// tries to open it. Relative inputs are joined to the current directory
/// and canonicalized, which resolves `.`, `..` and symlinks.
pub fn resolve_path(input: &str) -> Result<PathBuf> {
    let path = Path::new(input);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|source| TwigError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;
    resolve_relative(&cwd, path)
}

/// Canonicalize `path` relative to `base`.
pub fn resolve_relative(base: &Path, path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(base.join(path)).map_err(|source| TwigError::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}
