//! Local durable cache — the single source of truth for what the client
//! renders.
//!
//! The whole collection lives under one namespaced key (a single JSON file)
//! and is rewritten in full after every mutation; there is no incremental
//! diffing. Reads never fail: a missing, corrupt, or unparsable file is
//! treated as an empty collection so the client stays usable offline.

use std::path::{Path, PathBuf};

use nearmiss_core::ReportCollection;

use crate::error::StoreError;

/// Default cache file name (the namespaced persistence key).
pub const DEFAULT_CACHE_FILE: &str = "near_miss_reports_v1.json";

/// The client's authoritative local report store.
#[derive(Debug, Clone)]
pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the cache under its default key inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_CACHE_FILE))
    }

    /// Load the persisted collection.
    ///
    /// Returns an empty collection if the file is absent or unreadable.
    /// Corruption is logged and recovered from, never propagated.
    pub fn load(&self) -> ReportCollection {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read report cache, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(reports) => reports,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Report cache is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection with `reports`.
    pub fn save(&self, reports: &ReportCollection) -> Result<(), StoreError> {
        let json = serde_json::to_string(reports)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearmiss_core::{Report, ReportDraft};

    fn report(location: &str) -> Report {
        Report::create(ReportDraft {
            date: "2024-01-01".parse().unwrap(),
            location: location.to_string(),
            category: Default::default(),
            description: "Spill".to_string(),
            risk_level: Default::default(),
            photo: None,
        })
        .unwrap()
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::in_dir(dir.path());

        assert!(cache.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CACHE_FILE);
        std::fs::write(&path, "{{{not json").unwrap();

        let cache = LocalCache::new(&path);
        assert!(cache.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::in_dir(dir.path());

        let reports = vec![report("Gudang"), report("Kantor")];
        cache.save(&reports).unwrap();

        assert_eq!(cache.load(), reports);
    }

    #[test]
    fn save_overwrites_the_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::in_dir(dir.path());

        cache.save(&vec![report("Gudang")]).unwrap();
        cache.save(&Vec::new()).unwrap();

        assert!(cache.load().is_empty());
    }
}
