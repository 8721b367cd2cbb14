//! Package discovery under a blocks root.

use std::fs;
use std::path::{Path, PathBuf};

/// A package directory found under the blocks root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDir {
    /// Directory name (e.g. "hero")
    pub name: String,

    /// Full path to the package directory
    pub path: PathBuf,
}

/// Errors that can occur while listing packages.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("Blocks directory not found: {0}")]
    RootNotFound(String),

    #[error("Failed to read blocks directory {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// List the immediate subdirectories of `root`, one package each.
///
/// Plain files are ignored and symlinks are not followed. The result is
/// sorted by directory name.
pub fn discover_packages(root: &Path) -> Result<Vec<PackageDir>, DiscoverError> {
    if !root.is_dir() {
        return Err(DiscoverError::RootNotFound(root.display().to_string()));
    }

    let read_err = |source| DiscoverError::Read {
        path: root.display().to_string(),
        source,
    };

    let mut packages = Vec::new();

    for entry in fs::read_dir(root).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;

        if !file_type.is_dir() {
            continue;
        }

        packages.push(PackageDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    packages.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!("Discovered {} packages in {}", packages.len(), root.display());

    Ok(packages)
}
