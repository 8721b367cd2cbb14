//! Fixtures shared by the builder and orchestrator tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use blockpack_bundler::{BundleError, Bundler, ScriptRequest};

/// Bundler that copies the entry into the outfile instead of running esbuild.
#[derive(Debug, Default)]
pub struct StubBundler {
    requests: Mutex<Vec<ScriptRequest>>,
}

impl StubBundler {
    /// Entry content that makes the stub report a syntax error.
    pub const SYNTAX_ERROR: &'static str = "export default () => <div>}";

    pub fn requests(&self) -> Vec<ScriptRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Bundler for StubBundler {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn bundle_script(&self, request: &ScriptRequest) -> Result<(), BundleError> {
        self.requests.lock().unwrap().push(request.clone());

        let source = fs::read_to_string(&request.entry).unwrap();
        if source == Self::SYNTAX_ERROR {
            return Err(BundleError::Failed {
                tool: "stub",
                status: "exit status: 1".to_string(),
                message: "Unexpected \"}\"".to_string(),
            });
        }

        fs::create_dir_all(request.outfile.parent().unwrap()).unwrap();
        fs::write(&request.outfile, format!("/*bundled*/{}", source.trim())).unwrap();
        if request.options.sourcemap {
            let map = PathBuf::from(format!("{}.map", request.outfile.display()));
            fs::write(map, r#"{"version":3,"mappings":""}"#).unwrap();
        }

        Ok(())
    }
}

/// Create `<root>/<name>` with `src/index.tsx` and optionally `src/index.css`.
pub fn write_package(root: &Path, name: &str, script: &str, style: Option<&str>) -> PathBuf {
    let pkg = root.join(name);
    let src = pkg.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("index.tsx"), script).unwrap();
    if let Some(css) = style {
        fs::write(src.join("index.css"), css).unwrap();
    }
    pkg
}

/// Sorted file names in `<pkg>/dist`.
pub fn dist_listing(pkg: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(pkg.join("dist"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
