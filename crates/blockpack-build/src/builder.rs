//! Single package builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use blockpack_bundler::{BundleError, Bundler, ScriptOptions, ScriptRequest, StyleRequest};
use blockpack_manifest::{DiscoverError, Layout};

/// Files produced by building one package.
#[derive(Debug, Clone)]
pub struct BuildArtifacts {
    /// Package directory that was built
    pub package: PathBuf,

    /// Script bundle
    pub script: PathBuf,

    /// Source map for the script, when source maps are enabled
    pub source_map: Option<PathBuf>,

    /// Stylesheet bundle, when the package has a style entry
    pub style: Option<PathBuf>,

    /// Build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Entry point not found: {0}")]
    EntryNotFound(String),

    #[error("Bundling failed for {package}")]
    Bundle {
        package: String,
        #[source]
        source: BundleError,
    },

    #[error("Failed to write output: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error("Build failed for {package}")]
    PackageFailed {
        package: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// Builds one block package into its `dist/` directory.
pub struct PackageBuilder<B> {
    bundler: B,
    layout: Layout,
    options: ScriptOptions,
}

impl<B: Bundler> PackageBuilder<B> {
    pub fn new(bundler: B, layout: Layout, options: ScriptOptions) -> Self {
        Self {
            bundler,
            layout,
            options,
        }
    }

    pub fn bundler(&self) -> &B {
        &self.bundler
    }

    /// Build the package at `package`.
    ///
    /// The script bundle is always produced; the stylesheet only when the
    /// style entry exists. Nothing is written if the entry is missing.
    pub async fn build(&self, package: &Path) -> Result<BuildArtifacts, BuildError> {
        let start = Instant::now();

        if !package.is_dir() {
            return Err(BuildError::PackageNotFound(package.display().to_string()));
        }

        tracing::info!("Building block at {}...", package.display());

        let entry = self.layout.entry_path(package);
        if !entry.is_file() {
            return Err(BuildError::EntryNotFound(entry.display().to_string()));
        }

        let bundle_err = |source| BuildError::Bundle {
            package: package.display().to_string(),
            source,
        };

        let script = self.layout.script_output_path(package);
        self.bundler
            .bundle_script(&ScriptRequest {
                entry,
                outfile: script.clone(),
                options: self.options.clone(),
            })
            .await
            .map_err(bundle_err)?;

        tracing::info!("JavaScript bundle built ({})", self.bundler.name());

        let source_map = self.layout.source_map_path(package);
        let source_map = if self.options.sourcemap {
            Some(source_map)
        } else {
            remove_stale(&source_map)?;
            None
        };

        let style_entry = self.layout.style_entry_path(package);
        let style_output = self.layout.style_output_path(package);

        let style = if style_entry.is_file() {
            self.bundler
                .bundle_style(&StyleRequest {
                    entry: style_entry,
                    outfile: style_output.clone(),
                    minify: self.options.minify,
                })
                .await
                .map_err(bundle_err)?;

            tracing::info!("CSS bundle built");
            Some(style_output)
        } else {
            remove_stale(&style_output)?;
            None
        };

        tracing::info!(
            "Build complete: {}",
            self.layout.dist_path(package).display()
        );

        Ok(BuildArtifacts {
            package: package.to_path_buf(),
            script,
            source_map,
            style,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Remove an output left by an earlier build that this build no longer
/// produces, so `dist/` only holds what the current sources generate.
fn remove_stale(path: &Path) -> Result<(), BuildError> {
    if path.is_file() {
        fs::remove_file(path).map_err(|source| BuildError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!("Removed stale {}", path.display());
    }
    Ok(())
}
