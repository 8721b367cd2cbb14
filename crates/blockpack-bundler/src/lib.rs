//! Bundling for block packages.
//!
//! Script bundling is delegated to an external tool behind the [`Bundler`]
//! trait ([`EsbuildBundler`] runs the esbuild CLI). Stylesheets are bundled
//! and minified in process with lightningcss.

pub mod esbuild;
pub mod options;
pub mod stylesheet;
pub mod traits;

pub use esbuild::{script_args, EsbuildBundler};
pub use options::{Format, JsxMode, ScriptOptions};
pub use stylesheet::bundle_stylesheet;
pub use traits::{BundleError, Bundler, ScriptRequest, StyleRequest};
