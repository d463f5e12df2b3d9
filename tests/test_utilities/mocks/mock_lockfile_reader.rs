use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use swiftpm_source::prelude::*;

/// Mock LockfileReader for testing that counts reads
///
/// Clones share the read counter, so a test can keep a clone after
/// handing the reader to a source.
#[derive(Clone)]
pub struct MockLockfileReader {
    pub content: Option<String>,
    reads: Arc<AtomicUsize>,
    requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockLockfileReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            reads: Arc::new(AtomicUsize::new(0)),
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A reader for a project without Package.resolved
    pub fn missing() -> Self {
        Self {
            content: None,
            reads: Arc::new(AtomicUsize::new(0)),
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl LockfileReader for MockLockfileReader {
    fn lockfile_exists(&self, lockfile_path: &Path) -> bool {
        self.requested_paths
            .lock()
            .unwrap()
            .push(lockfile_path.to_path_buf());
        self.content.is_some()
    }

    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.requested_paths
            .lock()
            .unwrap()
            .push(lockfile_path.to_path_buf());
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock lockfile read failure"),
        }
    }
}
