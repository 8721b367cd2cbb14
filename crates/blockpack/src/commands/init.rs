//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'blockpack build-all' then 'blockpack publish'.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# blockpack configuration

[paths]
# One subdirectory per block package
blocks_dir = "packages/blocks"

# CDN output: <public_dir>/<name>/<version>/
public_dir = "public"

[layout]
src_dir = "src"
entry = "index.tsx"
style_entry = "index.css"
dist_dir = "dist"
metadata_file = "package.json"

[bundler]
# esbuild executable; defaults to node_modules/.bin/esbuild, then PATH
# esbuild = "node_modules/.bin/esbuild"
format = "esm"
jsx = "transform"
target = "es2020"
minify = true
sourcemap = true
"#;
