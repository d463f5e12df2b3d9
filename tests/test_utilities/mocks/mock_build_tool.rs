use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use swiftpm_source::prelude::*;

/// Mock BuildTool for testing activation without xcodebuild
#[derive(Clone)]
pub struct MockBuildTool {
    pub available: bool,
    /// Output of the build settings query; `None` makes the query fail
    pub output: Option<String>,
    calls: Arc<AtomicUsize>,
    last_args: Arc<Mutex<Vec<String>>>,
}

impl MockBuildTool {
    /// A tool reporting `build_dir` as BUILD_DIR in JSON form
    pub fn with_build_dir(build_dir: &str) -> Self {
        Self::with_output(&format!(
            r#"[{{"action": "build", "buildSettings": {{"BUILD_DIR": "{}"}}, "target": "App"}}]"#,
            build_dir
        ))
    }

    pub fn with_output(output: &str) -> Self {
        Self {
            available: true,
            output: Some(output.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            last_args: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            output: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_args: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            available: true,
            output: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_args: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_args(&self) -> Vec<String> {
        self.last_args.lock().unwrap().clone()
    }
}

impl BuildTool for MockBuildTool {
    fn is_available(&self) -> bool {
        self.available
    }

    fn show_build_settings(&self, _project_root: &Path, extra_args: &[String]) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_args.lock().unwrap() = extra_args.to_vec();
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => anyhow::bail!("Mock build tool failure"),
        }
    }
}
