//! Single package build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::load_config;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    package: Option<PathBuf>,
    esbuild: Option<PathBuf>,
) -> Result<()> {
    let Some(package) = package else {
        anyhow::bail!("Usage: blockpack build <package-path>");
    };

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let package_path = cwd.join(&package);

    if !package_path.exists() {
        anyhow::bail!("Package not found: {}", package_path.display());
    }

    let config = load_config(config_path)?;
    let builder = config.package_builder(&cwd, esbuild);

    let artifacts = builder.build(&package_path).await?;

    tracing::info!("Built {} in {}ms", package.display(), artifacts.duration_ms);

    Ok(())
}
