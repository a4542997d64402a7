/// JSON-backed outfit store
///
/// Saved outfits live in a single JSON document: an array of
/// `{"name": ..., "files": {"jacket": ..., ...}}` objects in append order.
/// The whole document is read and rewritten on every mutation. A missing,
/// empty or malformed file reads as an empty store and is overwritten by
/// the next save.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::data::Category;

/// A named outfit: one optional garment filename per category.
///
/// Names are not unique. Lookups return the first match; delete removes
/// every match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecord {
    pub name: String,
    pub files: BTreeMap<Category, Option<String>>,
}

/// Errors surfaced by the outfit store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Save was requested with an empty or whitespace-only name.
    #[error("outfit name must not be empty")]
    EmptyName,
    #[error("failed to write outfit file: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize outfits: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the outfit document on disk.
#[derive(Debug, Clone)]
pub struct OutfitStore {
    path: PathBuf,
}

impl OutfitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in append order.
    ///
    /// Defensive read: anything that is not a JSON array of records
    /// comes back as an empty list.
    pub fn records(&self) -> Vec<OutfitRecord> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Record names in append order, for populating a selector.
    pub fn list_names(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.name).collect()
    }

    /// First record with the given name.
    pub fn find(&self, name: &str) -> Option<OutfitRecord> {
        self.records().into_iter().find(|r| r.name == name)
    }

    /// Append a record and rewrite the document.
    ///
    /// Rejects empty and whitespace-only names without touching the file.
    pub fn save(
        &self,
        name: &str,
        files: BTreeMap<Category, Option<String>>,
    ) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let mut records = self.records();
        records.push(OutfitRecord {
            name: name.to_string(),
            files,
        });
        self.write(&records)
    }

    /// Remove every record with the given name and rewrite the document.
    ///
    /// Returns the number of records removed. When nothing matches the
    /// document is left untouched.
    pub fn delete(&self, name: &str) -> Result<usize, StoreError> {
        let records = self.records();
        let before = records.len();
        let kept: Vec<OutfitRecord> = records.into_iter().filter(|r| r.name != name).collect();
        let removed = before - kept.len();
        if removed > 0 {
            self.write(&kept)?;
        }
        Ok(removed)
    }

    fn write(&self, records: &[OutfitRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
