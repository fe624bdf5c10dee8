//! Test utilities for the JSON storage backend.
//!
//! RAII-based cleanup: the temp directory lives as long as the environment
//! and is removed on drop, even if a test panics.

use super::connection::JsonConnection;
use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment holding a connection rooted in a temp directory.
pub struct TestEnvironment {
    /// Kept alive to prevent cleanup until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }
}
