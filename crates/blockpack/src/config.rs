//! Configuration file (blocks.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use blockpack_build::PackageBuilder;
use blockpack_bundler::{EsbuildBundler, ScriptOptions};
use blockpack_manifest::Layout;
use serde::Deserialize;

/// Configuration file structure (blocks.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub bundler: BundlerConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_blocks_dir")]
    pub blocks_dir: PathBuf,
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            blocks_dir: default_blocks_dir(),
            public_dir: default_public_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct BundlerConfig {
    /// esbuild executable; located automatically when unset
    pub esbuild: Option<PathBuf>,

    /// Arguments passed before the generated ones (e.g. ["esbuild"] with npx)
    #[serde(default)]
    pub esbuild_args: Vec<String>,

    #[serde(flatten)]
    pub script: ScriptOptions,
}

fn default_blocks_dir() -> PathBuf {
    PathBuf::from("packages/blocks")
}
fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl ConfigFile {
    /// esbuild from the command line, then the config, then auto-detected.
    pub fn esbuild(&self, project_root: &Path, cli_override: Option<PathBuf>) -> EsbuildBundler {
        let bundler = match cli_override.or_else(|| self.bundler.esbuild.clone()) {
            Some(program) => EsbuildBundler::new(program),
            None => EsbuildBundler::locate(project_root),
        };
        bundler.with_leading_args(self.bundler.esbuild_args.clone())
    }

    pub fn package_builder(
        &self,
        project_root: &Path,
        esbuild: Option<PathBuf>,
    ) -> PackageBuilder<EsbuildBundler> {
        PackageBuilder::new(
            self.esbuild(project_root, esbuild),
            self.layout.clone(),
            self.bundler.script.clone(),
        )
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
