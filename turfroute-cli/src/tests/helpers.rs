//! Test helpers for staging analysis requests on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;
use turfroute_core::AnalysisRequest;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a request file and any written reports.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn request_path(&self) -> Utf8PathBuf {
        self.path("request.json")
    }

    pub(super) fn write_request(&self, request: &AnalysisRequest) -> Utf8PathBuf {
        let path = self.request_path();
        let payload = serde_json::to_string_pretty(request).expect("serialise request");
        write_utf8(&path, payload.as_bytes());
        path
    }
}
