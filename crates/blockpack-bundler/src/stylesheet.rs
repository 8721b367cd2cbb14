//! Stylesheet bundling with lightningcss.

use std::fs;
use std::io;
use std::path::Path;

use lightningcss::bundler::{Bundler as CssBundler, FileProvider, ResolveResult, SourceProvider};
use lightningcss::stylesheet::{ParserOptions, PrinterOptions};

use crate::traits::{BundleError, StyleRequest};

/// Reads local imports from disk and leaves remote ones (`https://...`,
/// `//cdn...`) as `@import` rules in the output.
struct StyleSources {
    files: FileProvider,
}

impl StyleSources {
    fn new() -> Self {
        Self {
            files: FileProvider::new(),
        }
    }
}

fn is_remote(specifier: &str) -> bool {
    specifier.starts_with("http://")
        || specifier.starts_with("https://")
        || specifier.starts_with("//")
}

impl SourceProvider for StyleSources {
    type Error = io::Error;

    fn read<'a>(&'a self, file: &Path) -> Result<&'a str, Self::Error> {
        self.files.read(file)
    }

    fn resolve(&self, specifier: &str, originating_file: &Path) -> Result<ResolveResult, Self::Error> {
        if is_remote(specifier) {
            return Ok(ResolveResult::External(specifier.to_owned()));
        }
        self.files.resolve(specifier, originating_file)
    }
}

/// Bundle a stylesheet and its local `@import`s into a single file.
///
/// Remote imports stay in the output. CSS only allows them before any
/// bundled import, so a remote import after a local one is an error.
pub fn bundle_stylesheet(request: &StyleRequest) -> Result<(), BundleError> {
    let entry = request.entry.display().to_string();

    let provider = StyleSources::new();
    let mut bundler = CssBundler::new(&provider, None, ParserOptions::default());

    let stylesheet = bundler
        .bundle(&request.entry)
        .map_err(|e| BundleError::Style {
            path: entry.clone(),
            message: e.to_string(),
        })?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: request.minify,
            ..Default::default()
        })
        .map_err(|e| BundleError::Style {
            path: entry.clone(),
            message: e.to_string(),
        })?;

    if let Some(parent) = request.outfile.parent() {
        fs::create_dir_all(parent).map_err(|source| BundleError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }

    fs::write(&request.outfile, css.code).map_err(|source| BundleError::Io {
        path: request.outfile.display().to_string(),
        source,
    })?;

    tracing::debug!("Bundled stylesheet {}", entry);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn minifies_and_inlines_imports() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        fs::write(
            src.join("tokens.css"),
            ":root {\n  --hero-accent: #ff6600;\n}\n",
        )
        .unwrap();
        fs::write(
            src.join("index.css"),
            "@import \"tokens.css\";\n\n.hero {\n    color: var(--hero-accent);\n    padding: 10px;\n}\n",
        )
        .unwrap();

        let outfile = temp.path().join("dist").join("index.css");
        bundle_stylesheet(&StyleRequest {
            entry: src.join("index.css"),
            outfile: outfile.clone(),
            minify: true,
        })
        .unwrap();

        let css = fs::read_to_string(&outfile).unwrap();
        assert!(!css.contains('\n'));
        assert!(!css.contains("@import"));
        assert!(css.contains("--hero-accent"));
        assert!(css.contains(".hero"));
    }

    #[test]
    fn reports_missing_import() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("index.css");
        fs::write(&entry, "@import \"missing.css\";\n.a { color: red }").unwrap();

        let result = bundle_stylesheet(&StyleRequest {
            entry,
            outfile: temp.path().join("out.css"),
            minify: true,
        });

        assert!(matches!(result, Err(BundleError::Style { .. })));
        assert!(!temp.path().join("out.css").exists());
    }

    #[test]
    fn keeps_remote_imports_external() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("tokens.css"), ":root { --gap: 4px }").unwrap();
        fs::write(
            src.join("index.css"),
            "@import url(\"https://fonts.googleapis.com/css2?family=Inter\");\n\
             @import \"tokens.css\";\n\
             .a { color: red; gap: var(--gap) }\n",
        )
        .unwrap();

        let outfile = temp.path().join("dist").join("index.css");
        bundle_stylesheet(&StyleRequest {
            entry: src.join("index.css"),
            outfile: outfile.clone(),
            minify: true,
        })
        .unwrap();

        let css = fs::read_to_string(&outfile).unwrap();
        assert!(css.starts_with("@import"), "{}", css);
        assert!(css.contains("https://fonts.googleapis.com/css2?family=Inter"));
        assert!(css.contains("--gap"));
        assert!(css.contains(".a{"));
        assert!(!css.contains("tokens.css"));
    }

    #[test]
    fn protocol_relative_imports_are_remote() {
        assert!(is_remote("//cdn.example.com/reset.css"));
        assert!(is_remote("http://example.com/a.css"));
        assert!(!is_remote("tokens.css"));
        assert!(!is_remote("./https.css"));
    }

    #[test]
    fn output_is_stable_across_runs() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("index.css");
        fs::write(&entry, ".a { margin: 0 0 0 0; }\n.b { color: #ffffff; }").unwrap();

        let request = StyleRequest {
            entry,
            outfile: temp.path().join("out.css"),
            minify: true,
        };

        bundle_stylesheet(&request).unwrap();
        let first = fs::read(&request.outfile).unwrap();
        bundle_stylesheet(&request).unwrap();
        let second = fs::read(&request.outfile).unwrap();

        assert_eq!(first, second);
    }
}
