//! blockpack CLI - builds UI block packages and publishes them to a CDN layout.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "blockpack")]
#[command(about = "Build and publish UI block packages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to blocks.toml config file
    #[arg(short, long, default_value = "blocks.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a single block package
    Build {
        /// Package directory (e.g. packages/blocks/hero)
        package: Option<PathBuf>,

        /// esbuild executable to use
        #[arg(long)]
        esbuild: Option<PathBuf>,
    },

    /// Build every package in the blocks directory, one at a time
    BuildAll {
        /// Blocks directory (defaults to config or "packages/blocks")
        #[arg(long)]
        blocks_dir: Option<PathBuf>,

        /// esbuild executable to use
        #[arg(long)]
        esbuild: Option<PathBuf>,
    },

    /// Copy built packages into <public>/<name>/<version>/
    Publish {
        /// Blocks directory (defaults to config or "packages/blocks")
        #[arg(long)]
        blocks_dir: Option<PathBuf>,

        /// Output directory (defaults to config or "public")
        #[arg(long)]
        public_dir: Option<PathBuf>,
    },

    /// Write a default blocks.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Build { package, esbuild } => {
            commands::build::run(&cli.config, package, esbuild).await?;
        }
        Commands::BuildAll {
            blocks_dir,
            esbuild,
        } => {
            commands::build_all::run(&cli.config, blocks_dir, esbuild).await?;
        }
        Commands::Publish {
            blocks_dir,
            public_dir,
        } => {
            commands::publish::run(&cli.config, blocks_dir, public_dir).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
    }

    Ok(())
}
