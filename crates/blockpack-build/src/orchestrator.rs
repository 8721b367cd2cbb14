//! Builds every package under a blocks root.

use std::path::PathBuf;
use std::time::Instant;

use blockpack_bundler::Bundler;
use blockpack_manifest::discover_packages;

use crate::builder::{BuildArtifacts, BuildError, PackageBuilder};

/// Result of building all packages.
#[derive(Debug)]
pub struct BuildAllReport {
    /// Artifacts per package, in build order
    pub built: Vec<BuildArtifacts>,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Runs a [`PackageBuilder`] over every package, strictly one at a time.
pub struct Orchestrator<B> {
    builder: PackageBuilder<B>,
    blocks_dir: PathBuf,
}

impl<B: Bundler> Orchestrator<B> {
    pub fn new(builder: PackageBuilder<B>, blocks_dir: impl Into<PathBuf>) -> Self {
        Self {
            builder,
            blocks_dir: blocks_dir.into(),
        }
    }

    /// Build all packages, stopping at the first one that fails.
    ///
    /// Packages after the failing one are never attempted.
    pub async fn build_all(&self) -> Result<BuildAllReport, BuildError> {
        let start = Instant::now();

        tracing::info!("Building all blocks in {}...", self.blocks_dir.display());

        let packages = discover_packages(&self.blocks_dir)?;
        let mut built = Vec::with_capacity(packages.len());

        for package in packages {
            match self.builder.build(&package.path).await {
                Ok(artifacts) => built.push(artifacts),
                Err(e) => {
                    tracing::error!("Build failed for {}: {}", package.name, e);
                    return Err(BuildError::PackageFailed {
                        package: package.name,
                        source: Box::new(e),
                    });
                }
            }
        }

        tracing::info!("All {} blocks built successfully", built.len());

        Ok(BuildAllReport {
            built,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
