//! The budget document store
//!
//! `BudgetStore` owns the in-memory document for the lifetime of one process
//! and rewrites the whole file on every save. There is no locking: a single
//! process is assumed to own the file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::BudgetDocument;

use super::file_io::{read_json, write_json};

/// Loads, holds and saves the budget document
#[derive(Debug)]
pub struct BudgetStore {
    path: PathBuf,
    document: BudgetDocument,
}

impl BudgetStore {
    /// Open the store at an explicit file path, loading the document
    ///
    /// A missing file yields an empty document with the default allocation.
    /// A malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();
        let document = Self::load(&path)?;
        debug!(
            path = %path.display(),
            incomes = document.incomes.len(),
            expenses = document.expenses.len(),
            "opened budget store"
        );
        Ok(Self { path, document })
    }

    /// Open the store at the configured data file
    pub fn open_at(paths: &TrackerPaths) -> TrackerResult<Self> {
        Self::open(paths.data_file())
    }

    /// Read a document from disk without opening a store
    pub fn load(path: &Path) -> TrackerResult<BudgetDocument> {
        read_json(path)
    }

    /// Write the current document to disk, replacing the file
    pub fn save(&self) -> TrackerResult<()> {
        write_json(&self.path, &self.document)?;
        debug!(path = %self.path.display(), "saved budget document");
        Ok(())
    }

    /// Flush the document one last time and release the store
    pub fn close(self) -> TrackerResult<()> {
        self.save()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded document
    pub fn document(&self) -> &BudgetDocument {
        &self.document
    }

    /// Mutable access to the loaded document; callers must `save` afterwards
    pub fn document_mut(&mut self) -> &mut BudgetDocument {
        &mut self.document
    }
}
