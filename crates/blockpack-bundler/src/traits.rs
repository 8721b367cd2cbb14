//! Trait definitions for bundlers.

use std::future::Future;
use std::path::PathBuf;

use crate::options::ScriptOptions;
use crate::stylesheet::bundle_stylesheet;

/// A request to bundle one script entry into one output file.
#[derive(Debug, Clone)]
pub struct ScriptRequest {
    /// Entry source file
    pub entry: PathBuf,

    /// Output bundle path; the source map goes to `<outfile>.map`
    pub outfile: PathBuf,

    pub options: ScriptOptions,
}

/// A request to bundle one stylesheet entry into one output file.
#[derive(Debug, Clone)]
pub struct StyleRequest {
    /// Entry stylesheet; `@import`s are inlined
    pub entry: PathBuf,

    pub outfile: PathBuf,

    pub minify: bool,
}

/// Errors that can occur while bundling.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {message}")]
    Failed {
        tool: &'static str,
        status: String,
        message: String,
    },

    #[error("Stylesheet error in {path}: {message}")]
    Style { path: String, message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A tool that turns entry files into bundles.
pub trait Bundler: Send + Sync {
    /// Tool identifier (e.g., "esbuild")
    fn name(&self) -> &'static str;

    /// Bundle a script entry. Runs to completion; there is no cancellation.
    fn bundle_script(
        &self,
        request: &ScriptRequest,
    ) -> impl Future<Output = Result<(), BundleError>> + Send;

    /// Bundle a stylesheet entry.
    ///
    /// Defaults to the in-process lightningcss bundler.
    fn bundle_style(
        &self,
        request: &StyleRequest,
    ) -> impl Future<Output = Result<(), BundleError>> + Send {
        std::future::ready(bundle_stylesheet(request))
    }
}
