//! Flat JSON document store backing the remote persistence service.
//!
//! One file holds `{ "reports": [...] }`. Every request performs
//! read-entire-file, mutate in memory, write-entire-file. There is no
//! locking around that cycle: concurrent writers race and the last write
//! wins, silently discarding the other's effect. This store is NOT safe
//! for concurrent multi-writer use; it is sized for a single-user or
//! low-traffic internal deployment where concurrency is near zero.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use nearmiss_core::ReportCollection;

use crate::error::StoreError;

/// The persisted document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportDocument {
    pub reports: ReportCollection,
}

/// File-backed store for a single [`ReportDocument`].
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole document. A missing file yields an empty document;
    /// a corrupt one is logged and replaced by an empty document on the
    /// next write.
    pub fn read(&self) -> ReportDocument {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ReportDocument::default()
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read report document, starting empty");
                return ReportDocument::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Report document is corrupt, starting empty");
                ReportDocument::default()
            }
        }
    }

    /// Write the whole document back to disk.
    pub fn write(&self, doc: &ReportDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string(doc)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
