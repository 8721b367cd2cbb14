//! Versioned CDN publisher.

use std::fs;
use std::path::PathBuf;

use blockpack_manifest::{discover_packages, read_metadata, DiscoverError, Layout, MetadataError};

use crate::copy::copy_tree;

/// Configuration for a publish run.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Directory containing one subdirectory per package
    pub blocks_dir: PathBuf,

    /// CDN root; created if absent and never cleaned
    pub public_dir: PathBuf,

    pub layout: Layout,
}

/// One package copied into the CDN tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArtifact {
    pub name: String,
    pub version: String,

    /// `<public>/<name>/<version>`
    pub destination: PathBuf,

    /// Number of files copied
    pub files: usize,
}

/// Result of a publish run.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub published: Vec<PublishedArtifact>,

    /// Packages skipped because they had no build output
    pub skipped: Vec<String>,
}

/// Errors that can occur while publishing.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error("Failed to read metadata for {package}")]
    Metadata {
        package: String,
        #[source]
        source: MetadataError,
    },

    #[error("Failed to copy {from} to {to}")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create {path}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Copies built packages into `<public>/<name>/<version>/`.
pub struct Publisher {
    config: PublishConfig,
}

impl Publisher {
    pub fn new(config: PublishConfig) -> Self {
        Self { config }
    }

    /// Publish every built package.
    ///
    /// A package without build output is skipped with a warning. A package
    /// whose metadata cannot be read aborts the run.
    pub fn publish(&self) -> Result<PublishReport, PublishError> {
        let public_dir = &self.config.public_dir;
        let layout = &self.config.layout;

        fs::create_dir_all(public_dir).map_err(|source| PublishError::CreateDir {
            path: public_dir.display().to_string(),
            source,
        })?;

        let packages = discover_packages(&self.config.blocks_dir)?;
        tracing::info!(
            "Copying {} blocks to {}",
            packages.len(),
            public_dir.display()
        );

        let mut report = PublishReport::default();

        for package in packages {
            let dist = layout.dist_path(&package.path);

            if !dist.is_dir() {
                tracing::warn!(
                    "Skipping {} - no {}/ found",
                    package.name,
                    layout.dist_dir
                );
                report.skipped.push(package.name);
                continue;
            }

            let metadata =
                read_metadata(&package.path, layout).map_err(|source| PublishError::Metadata {
                    package: package.name.clone(),
                    source,
                })?;

            let destination = public_dir.join(metadata.cdn_path());
            fs::create_dir_all(&destination).map_err(|source| PublishError::CreateDir {
                path: destination.display().to_string(),
                source,
            })?;

            let files = copy_tree(&dist, &destination).map_err(|source| PublishError::Copy {
                from: dist.display().to_string(),
                to: destination.display().to_string(),
                source,
            })?;

            tracing::info!("{}@{} ({} files)", metadata.name, metadata.version, files);

            report.published.push(PublishedArtifact {
                name: metadata.name,
                version: metadata.version,
                destination,
                files,
            });
        }

        tracing::info!("CDN preparation complete: {}", public_dir.display());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_built_package(blocks: &Path, dir: &str, name: &str, version: &str) -> PathBuf {
        let pkg = blocks.join(dir);
        fs::create_dir_all(pkg.join("dist")).unwrap();
        fs::write(
            pkg.join("package.json"),
            format!(r#"{{ "name": "{}", "version": "{}" }}"#, name, version),
        )
        .unwrap();
        fs::write(pkg.join("dist/index.js"), format!("/*{}@{}*/", name, version)).unwrap();
        fs::write(pkg.join("dist/index.js.map"), "{}").unwrap();
        pkg
    }

    fn publisher(root: &Path) -> Publisher {
        Publisher::new(PublishConfig {
            blocks_dir: root.join("packages/blocks"),
            public_dir: root.join("public"),
            layout: Layout::default(),
        })
    }

    #[test]
    fn places_scoped_package_under_name_and_version() {
        let temp = tempdir().unwrap();
        let blocks = temp.path().join("packages/blocks");
        let pkg = write_built_package(&blocks, "y", "@x/y", "1.2.3");

        let report = publisher(temp.path()).publish().unwrap();

        let published = temp.path().join("public/@x/y/1.2.3/index.js");
        assert_eq!(
            fs::read(&published).unwrap(),
            fs::read(pkg.join("dist/index.js")).unwrap()
        );
        assert_eq!(
            report.published,
            vec![PublishedArtifact {
                name: "@x/y".to_string(),
                version: "1.2.3".to_string(),
                destination: temp.path().join("public").join("@x").join("y").join("1.2.3"),
                files: 2,
            }]
        );
    }

    #[test]
    fn skips_packages_without_dist() {
        let temp = tempdir().unwrap();
        let blocks = temp.path().join("packages/blocks");
        write_built_package(&blocks, "hero", "@cmssy/blocks.hero", "1.0.0");
        fs::create_dir_all(blocks.join("draft/src")).unwrap();

        let report = publisher(temp.path()).publish().unwrap();

        assert_eq!(report.skipped, vec!["draft".to_string()]);
        assert_eq!(report.published.len(), 1);
        assert!(temp
            .path()
            .join("public/@cmssy/blocks.hero/1.0.0/index.js")
            .exists());
    }

    #[test]
    fn republishing_same_version_overwrites() {
        let temp = tempdir().unwrap();
        let blocks = temp.path().join("packages/blocks");
        let pkg = write_built_package(&blocks, "hero", "hero", "1.0.0");
        let p = publisher(temp.path());

        p.publish().unwrap();
        fs::write(pkg.join("dist/index.js"), "rebuilt").unwrap();
        p.publish().unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("public/hero/1.0.0/index.js")).unwrap(),
            "rebuilt"
        );
    }

    #[test]
    fn older_versions_are_kept() {
        let temp = tempdir().unwrap();
        let blocks = temp.path().join("packages/blocks");
        write_built_package(&blocks, "hero", "hero", "1.0.0");
        let p = publisher(temp.path());

        p.publish().unwrap();
        write_built_package(&blocks, "hero", "hero", "1.1.0");
        p.publish().unwrap();

        assert!(temp.path().join("public/hero/1.0.0/index.js").exists());
        assert!(temp.path().join("public/hero/1.1.0/index.js").exists());
    }

    #[test]
    fn malformed_metadata_aborts_the_run() {
        let temp = tempdir().unwrap();
        let blocks = temp.path().join("packages/blocks");
        let broken = write_built_package(&blocks, "a-broken", "broken", "1.0.0");
        fs::write(broken.join("package.json"), "{ not json").unwrap();
        write_built_package(&blocks, "b-hero", "hero", "1.0.0");

        let result = publisher(temp.path()).publish();

        match result {
            Err(PublishError::Metadata { package, source }) => {
                assert_eq!(package, "a-broken");
                assert!(matches!(source, MetadataError::Malformed { .. }));
            }
            other => panic!("expected Metadata error, got {:?}", other),
        }
        assert!(!temp.path().join("public/hero").exists());
    }

    #[test]
    fn creates_public_dir_even_without_packages() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("packages/blocks")).unwrap();

        let report = publisher(temp.path()).publish().unwrap();

        assert!(report.published.is_empty());
        assert!(temp.path().join("public").is_dir());
    }
}
