//! File layout conventions for a block package.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where sources, build output and metadata live inside a package directory.
///
/// Every field can be overridden from the `[layout]` section of `blocks.toml`;
/// missing fields keep their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Layout {
    /// Source directory, relative to the package
    pub src_dir: String,

    /// Script entry inside `src_dir`
    pub entry: String,

    /// Optional stylesheet entry inside `src_dir`
    pub style_entry: String,

    /// Build output directory, relative to the package
    pub dist_dir: String,

    /// Script bundle file name inside `dist_dir`
    pub script_output: String,

    /// Stylesheet bundle file name inside `dist_dir`
    pub style_output: String,

    /// Metadata file, relative to the package
    pub metadata_file: String,

    /// Metadata field holding the package name
    pub name_field: String,

    /// Metadata field holding the package version
    pub version_field: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            src_dir: "src".to_string(),
            entry: "index.tsx".to_string(),
            style_entry: "index.css".to_string(),
            dist_dir: "dist".to_string(),
            script_output: "index.js".to_string(),
            style_output: "index.css".to_string(),
            metadata_file: "package.json".to_string(),
            name_field: "name".to_string(),
            version_field: "version".to_string(),
        }
    }
}

impl Layout {
    /// Script entry point, e.g. `hero/src/index.tsx`.
    pub fn entry_path(&self, package: &Path) -> PathBuf {
        package.join(&self.src_dir).join(&self.entry)
    }

    /// Stylesheet entry point, e.g. `hero/src/index.css`.
    pub fn style_entry_path(&self, package: &Path) -> PathBuf {
        package.join(&self.src_dir).join(&self.style_entry)
    }

    pub fn dist_path(&self, package: &Path) -> PathBuf {
        package.join(&self.dist_dir)
    }

    pub fn script_output_path(&self, package: &Path) -> PathBuf {
        self.dist_path(package).join(&self.script_output)
    }

    /// Source map written next to the script bundle (`index.js.map`).
    pub fn source_map_path(&self, package: &Path) -> PathBuf {
        self.dist_path(package)
            .join(format!("{}.map", self.script_output))
    }

    pub fn style_output_path(&self, package: &Path) -> PathBuf {
        self.dist_path(package).join(&self.style_output)
    }

    pub fn metadata_path(&self, package: &Path) -> PathBuf {
        package.join(&self.metadata_file)
    }
}
