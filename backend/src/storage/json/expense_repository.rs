//! JSON-backed expense repository.
//!
//! The whole collection is one JSON document in a fixed slot file. Writes go
//! through a temp file and an atomic rename so a crash mid-write leaves the
//! previous document intact.

use crate::domain::models::Expense;
use crate::storage::json::connection::JsonConnection;
use crate::storage::traits::ExpenseStorage;
use anyhow::Result;
use log::{info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};

#[derive(Clone)]
pub struct ExpenseRepository {
    connection: JsonConnection,
}

impl ExpenseRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn load_expenses(&self) -> Result<Option<Vec<Expense>>> {
        let file_path = self.connection.expenses_file_path();

        if !file_path.exists() {
            info!("No persisted expenses at {}", file_path.display());
            return Ok(None);
        }

        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let expenses: Vec<Expense> = serde_json::from_reader(reader)?;

        info!(
            "Loaded {} expenses from {}",
            expenses.len(),
            file_path.display()
        );
        Ok(Some(expenses))
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let file_path = self.connection.expenses_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;

            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, expenses)?;
            writer.flush()?;
        }

        // Atomic move from temp to the slot file
        if let Err(e) = fs::rename(&temp_path, &file_path) {
            warn!("Failed to move temp slot file into place: {}", e);
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }
}
