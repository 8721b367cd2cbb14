//! CDN publish command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockpack_publish::{PublishConfig, Publisher};

use crate::config::load_config;

/// Run the publish command.
pub async fn run(
    config_path: &Path,
    blocks_dir: Option<PathBuf>,
    public_dir: Option<PathBuf>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(config_path)?;

    let publisher = Publisher::new(PublishConfig {
        blocks_dir: cwd.join(blocks_dir.unwrap_or(config.paths.blocks_dir)),
        public_dir: cwd.join(public_dir.unwrap_or(config.paths.public_dir)),
        layout: config.layout,
    });

    let report = publisher.publish()?;

    tracing::info!(
        "Published {} blocks, skipped {}",
        report.published.len(),
        report.skipped.len()
    );

    Ok(())
}
