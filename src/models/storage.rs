use crate::models::SnippetDatabase;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Somewhere a finished database can be written to
pub trait DatabaseSink {
    fn save_database(&self, db: &SnippetDatabase) -> Result<()>;

    /// Human readable location, used in logs
    fn destination(&self) -> String;
}

/// Storage Manager for disk operations
#[derive(Debug, Clone)]
pub struct StorageManager {
    database_file: PathBuf,
}

impl StorageManager {
    pub fn new(database_file: impl Into<PathBuf>) -> Self {
        Self {
            database_file: database_file.into(),
        }
    }

    pub fn database_file(&self) -> &Path {
        &self.database_file
    }
}

impl DatabaseSink for StorageManager {
    /// Writes the database as pretty-printed JSON, creating parent directories
    fn save_database(&self, db: &SnippetDatabase) -> Result<()> {
        let content = serde_json::to_string_pretty(db).context("Failed to serialize database")?;

        if let Some(parent) = self.database_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
        }

        fs::write(&self.database_file, content).with_context(|| {
            format!(
                "Failed to write database file {}",
                self.database_file.display()
            )
        })
    }

    fn destination(&self) -> String {
        self.database_file.display().to_string()
    }
}
