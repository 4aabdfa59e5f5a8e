//! Test helpers for web API tests.
//!
//! Provides a TestApp wrapping an axum-test server over temporary upload and
//! frontend directories.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use tempfile::TempDir;

use filedrop::web::handlers::AppState;
use filedrop::web::router::create_router;
use filedrop::UploadStore;

/// Default per-file limit used by tests (2GB, as in production).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024 * 1024;

/// Default file count limit used by tests.
pub const DEFAULT_MAX_FILES: usize = 20;

/// Frontend entry page written into the test frontend directory.
pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>upload form</body></html>";

/// Server under test plus the directories it serves.
pub struct TestApp {
    pub server: TestServer,
    pub uploads: TempDir,
    pub frontend: TempDir,
}

impl TestApp {
    /// Names currently present in the upload directory, sorted.
    pub fn upload_dir_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.uploads.path())
            .expect("Failed to read upload directory")
            .map(|entry| {
                entry
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// Create a test app with production limits.
pub fn create_test_app() -> TestApp {
    create_test_app_with_limits(DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE)
}

/// Create a test app with custom upload limits.
pub fn create_test_app_with_limits(max_files: usize, max_file_size: u64) -> TestApp {
    let uploads = TempDir::new().expect("Failed to create upload dir");
    let frontend = TempDir::new().expect("Failed to create frontend dir");
    std::fs::write(frontend.path().join("index.html"), INDEX_HTML)
        .expect("Failed to write index.html");

    let store = UploadStore::new(uploads.path()).expect("Failed to open upload store");
    let state = Arc::new(AppState::new(store, max_files, max_file_size));
    let router = create_router(state, frontend.path(), &[]);

    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        uploads,
        frontend,
    }
}

/// A file part with the given client filename and content.
pub fn file_part(file_name: &str, content: &[u8]) -> Part {
    Part::bytes(content.to_vec())
        .file_name(file_name)
        .mime_type("application/octet-stream")
}

/// A multipart form with each `(name, content)` under the `files` field.
pub fn files_form(files: &[(&str, &[u8])]) -> MultipartForm {
    files
        .iter()
        .fold(MultipartForm::new(), |form, (name, content)| {
            form.add_part("files", file_part(name, content))
        })
}
