//! File-system connection for the JSON storage backend.

use crate::storage::json::expense_repository::ExpenseRepository;
use crate::storage::traits::Connection;
use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persistence slot. This is the original app's storage key,
/// kept so the on-disk data stays recognizable.
pub const EXPENSES_SLOT_FILE: &str = "cajachica_expenses.json";

/// JsonConnection manages the base directory holding the persistence slot.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at the given base directory, creating the
    /// directory if it does not exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the platform data directory, under
    /// "Petty Cash Tracker".
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine platform data directory"))?;
        let base_dir = data_dir.join("Petty Cash Tracker");

        info!("Using data directory: {}", base_dir.display());
        Self::new(base_dir)
    }

    /// Path of the expense slot file.
    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join(EXPENSES_SLOT_FILE)
    }
}

impl Connection for JsonConnection {
    type ExpenseRepository = ExpenseRepository;

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        ExpenseRepository::new(self.clone())
    }
}
