//! Package metadata (`package.json`) reading.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::layout::Layout;

/// Name and version declared by a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Package name, possibly scoped (e.g. "@cmssy/blocks.hero")
    pub name: String,

    /// Semantic version (e.g. "1.0.0")
    pub version: String,
}

impl PackageMetadata {
    /// Relative CDN path for this package: `<name>/<version>`.
    ///
    /// Scoped names expand into nested directories.
    pub fn cdn_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.name.split('/') {
            path.push(segment);
        }
        path.push(&self.version);
        path
    }
}

/// Errors that can occur when reading package metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Metadata file not found: {0}")]
    Missing(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed metadata in {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Missing string field \"{field}\" in {path}")]
    MissingField { path: String, field: String },

    #[error("Invalid package name \"{name}\" in {path}")]
    InvalidName { path: String, name: String },

    #[error("Invalid version \"{version}\" in {path}: expected MAJOR.MINOR.PATCH")]
    InvalidVersion { path: String, version: String },
}

/// Read the name and version of the package at `package`.
pub fn read_metadata(package: &Path, layout: &Layout) -> Result<PackageMetadata, MetadataError> {
    let path = layout.metadata_path(package);
    let display = path.display().to_string();

    if !path.is_file() {
        return Err(MetadataError::Missing(display));
    }

    let content = fs::read_to_string(&path).map_err(|source| MetadataError::Read {
        path: display.clone(),
        source,
    })?;

    let json: Value = serde_json::from_str(&content).map_err(|e| MetadataError::Malformed {
        path: display.clone(),
        message: e.to_string(),
    })?;

    if !json.is_object() {
        return Err(MetadataError::Malformed {
            path: display,
            message: "expected a JSON object".to_string(),
        });
    }

    let name = string_field(&json, &layout.name_field, &display)?;
    let version = string_field(&json, &layout.version_field, &display)?;

    if !is_valid_name(&name) {
        return Err(MetadataError::InvalidName {
            path: display,
            name,
        });
    }

    if !is_valid_version(&version) {
        return Err(MetadataError::InvalidVersion {
            path: display,
            version,
        });
    }

    Ok(PackageMetadata { name, version })
}

fn string_field(json: &Value, field: &str, path: &str) -> Result<String, MetadataError> {
    json.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| MetadataError::MissingField {
            path: path.to_string(),
            field: field.to_string(),
        })
}

/// Names become directory paths, so every `/`-separated segment must be a
/// plain file name.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('\\')
        && name
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

fn is_valid_version(version: &str) -> bool {
    static SEMVER_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
        )
        .expect("Invalid semver regex")
    });

    SEMVER_RE.is_match(version)
}
