//! Script bundle options.

use std::fmt;

use serde::Deserialize;

/// Output module format.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Esm,
    Iife,
    Cjs,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Esm => "esm",
            Format::Iife => "iife",
            Format::Cjs => "cjs",
        })
    }
}

/// How JSX markup is compiled.
///
/// `Transform` calls the classic `React.createElement` factory and never
/// injects a `react/jsx-runtime` import.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JsxMode {
    #[default]
    Transform,
    Automatic,
    Preserve,
}

impl fmt::Display for JsxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsxMode::Transform => "transform",
            JsxMode::Automatic => "automatic",
            JsxMode::Preserve => "preserve",
        })
    }
}

/// Options for producing a script bundle.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptOptions {
    /// Inline every dependency into the output (nothing external)
    pub bundle: bool,

    pub format: Format,

    pub jsx: JsxMode,

    /// Baseline language level (e.g. "es2020")
    pub target: String,

    pub minify: bool,

    /// Emit a `.map` file next to the bundle
    pub sourcemap: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            bundle: true,
            format: Format::Esm,
            jsx: JsxMode::Transform,
            target: "es2020".to_string(),
            minify: true,
            sourcemap: true,
        }
    }
}
