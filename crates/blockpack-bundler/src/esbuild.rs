//! esbuild CLI adapter.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::traits::{BundleError, Bundler, ScriptRequest};

/// Runs the esbuild command line tool as a subprocess.
#[derive(Debug, Clone)]
pub struct EsbuildBundler {
    /// Executable to run
    program: PathBuf,

    /// Arguments placed before the generated ones (e.g. `["esbuild"]` for `npx`)
    leading_args: Vec<String>,
}

impl EsbuildBundler {
    /// Use the given esbuild executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Find esbuild for a project: the locally installed
    /// `node_modules/.bin/esbuild` if present, otherwise `esbuild` on `PATH`.
    pub fn locate(project_root: &Path) -> Self {
        let local = project_root.join("node_modules").join(".bin").join("esbuild");
        if local.is_file() {
            tracing::debug!("Using local esbuild at {}", local.display());
            Self::new(local)
        } else {
            Self::new("esbuild")
        }
    }

    pub fn with_leading_args(mut self, args: Vec<String>) -> Self {
        self.leading_args = args;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

/// Build the esbuild argument list for a script request.
pub fn script_args(request: &ScriptRequest) -> Vec<String> {
    let options = &request.options;
    let mut args = vec![request.entry.display().to_string()];

    if options.bundle {
        args.push("--bundle".to_string());
    }
    args.push(format!("--format={}", options.format));
    args.push(format!("--jsx={}", options.jsx));
    args.push(format!("--target={}", options.target));
    if options.minify {
        args.push("--minify".to_string());
    }
    if options.sourcemap {
        args.push("--sourcemap".to_string());
    }
    args.push(format!("--outfile={}", request.outfile.display()));
    args.push("--log-level=warning".to_string());

    args
}

impl Bundler for EsbuildBundler {
    fn name(&self) -> &'static str {
        "esbuild"
    }

    async fn bundle_script(&self, request: &ScriptRequest) -> Result<(), BundleError> {
        let args = script_args(request);

        tracing::debug!(
            "Running {} {} {}",
            self.program.display(),
            self.leading_args.join(" "),
            args.join(" ")
        );

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(&args)
            .output()
            .await
            .map_err(|source| BundleError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(BundleError::Failed {
                tool: self.name(),
                status: output.status.to_string(),
                message: stderr.trim().to_string(),
            });
        }

        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            tracing::warn!("esbuild: {}", line);
        }

        Ok(())
    }
}
