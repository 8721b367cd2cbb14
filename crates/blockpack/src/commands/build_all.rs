//! Build every block package.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockpack_build::Orchestrator;

use crate::config::load_config;

/// Run the build-all command.
pub async fn run(
    config_path: &Path,
    blocks_dir: Option<PathBuf>,
    esbuild: Option<PathBuf>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(config_path)?;

    let blocks_dir = cwd.join(blocks_dir.unwrap_or_else(|| config.paths.blocks_dir.clone()));
    let orchestrator = Orchestrator::new(config.package_builder(&cwd, esbuild), blocks_dir);

    let report = orchestrator.build_all().await?;

    tracing::info!(
        "Built {} blocks in {}ms",
        report.built.len(),
        report.duration_ms
    );

    Ok(())
}
