//! File-backed local storage.
//!
//! All entries live in one JSON object file. Every mutation rewrites the file
//! atomically, so a crash mid-write leaves the previous contents intact.

use crate::store::{KeyValueStore, StoreError, StoreErrorResult, StoreStep};

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
    backup: Option<PathBuf>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// - missing file: empty store, nothing written until the first mutation
    /// - unparseable file: moved aside to `<name>.corrupted.<timestamp>`, empty store
    pub fn open(path: impl Into<PathBuf>) -> StoreErrorResult<Self> {
        let path = path.into();

        if !path.exists() {
            info!("No store file at {path:?} (first launch)");
            return Ok(Self {
                path,
                entries: RefCell::new(BTreeMap::new()),
                backup: None,
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::io(StoreStep::Read, &path, e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => {
                debug!("Loaded {} entries from {path:?}", entries.len());
                Ok(Self {
                    path,
                    entries: RefCell::new(entries),
                    backup: None,
                })
            }
            Err(e) => {
                warn!("Store file {path:?} is not a JSON object of strings: {e}");
                let backup = Self::backup_corrupted(&path)?;
                Ok(Self {
                    path,
                    entries: RefCell::new(BTreeMap::new()),
                    backup: Some(backup),
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupted store file was moved when this store was opened.
    pub fn backup(&self) -> Option<&Path> {
        self.backup.as_deref()
    }

    /// Renames a corrupted file to `<name>.corrupted.{timestamp}` for debugging.
    fn backup_corrupted(path: &Path) -> StoreErrorResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("storage.json"));
        let backup_path = path.with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path)
            .map_err(|e| StoreError::io(StoreStep::Quarantine, path, e))?;

        warn!("Backed up corrupted store to {backup_path:?}");
        Ok(backup_path)
    }

    /// Writes `entries` using the temp file + fsync + rename pattern.
    fn persist(&self, entries: &BTreeMap<String, String>) -> StoreErrorResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)
                .map_err(|e| StoreError::io(StoreStep::CreateDir, dir, e))?;
        }

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("storage.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::io(StoreStep::Write, &temp_path, e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::io(StoreStep::Write, &temp_path, e))?;

            file.sync_all()
                .map_err(|e| StoreError::io(StoreStep::Write, &temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::io(StoreStep::Replace, &self.path, e)
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        let mut next = self.entries.borrow().clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        if !self.entries.borrow().contains_key(key) {
            return Ok(());
        }

        let mut next = self.entries.borrow().clone();
        next.remove(key);
        self.persist(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }
}
