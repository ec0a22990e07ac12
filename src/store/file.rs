//! JSON file-backed alert store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::AlertStore;
use crate::domain::PriceAlert;
use crate::error::{Result, StoreError};

/// Alert store backed by a single JSON file.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so
/// a crash mid-write never leaves a truncated collection behind.
#[derive(Debug, Clone)]
pub struct FileAlertStore {
    path: PathBuf,
}

impl FileAlertStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AlertStore for FileAlertStore {
    fn load(&self) -> Result<Option<Vec<PriceAlert>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "alert store file missing, nothing saved yet");
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(StoreError::Read)?;
        let alerts = serde_json::from_str(&contents).map_err(StoreError::Corrupt)?;
        Ok(Some(alerts))
    }

    fn save(&self, alerts: &[PriceAlert]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }

        let json = serde_json::to_string_pretty(alerts).map_err(StoreError::Corrupt)?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(StoreError::Write)?;
        fs::rename(&temp, &self.path).map_err(StoreError::Write)?;

        debug!(path = %self.path.display(), count = alerts.len(), "saved alert collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertDirection;
    use rust_decimal_macros::dec;

    fn alert() -> PriceAlert {
        PriceAlert::new(
            "event_1",
            "FC Barcelona vs Real Madrid",
            "Soccer",
            "FC Barcelona Win",
            dec!(2.20),
            AlertDirection::AtLeast,
        )
    }

    #[test]
    fn missing_file_means_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAlertStore::new(dir.path().join("alerts.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAlertStore::new(dir.path().join("alerts.json"));

        let alerts = vec![alert()];
        store.save(&alerts).unwrap();

        let loaded = store.load().unwrap().expect("collection saved");
        assert_eq!(loaded, alerts);
    }

    #[test]
    fn empty_collection_is_distinct_from_unsaved() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAlertStore::new(dir.path().join("alerts.json"));

        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAlertStore::new(dir.path().join("nested/deeper/alerts.json"));
        store.save(&[alert()]).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alerts.json");
        let store = FileAlertStore::new(&path);
        store.save(&[alert()]).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "found {leftovers:?}");
    }

    #[test]
    fn corrupt_file_reports_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alerts.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = FileAlertStore::new(&path);
        match store.load() {
            Err(crate::error::Error::Store(StoreError::Corrupt(_))) => {}
            other => panic!("expected corrupt store error, got {other:?}"),
        }
    }
}
