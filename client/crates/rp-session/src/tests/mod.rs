mod session_manager;

use crate::store::{KeyValueStore, StoreError, StoreErrorResult, StoreStep};

use std::cell::Cell;
use std::path::PathBuf;

/// Store whose writes can be switched off to simulate a full disk.
#[derive(Default)]
pub(crate) struct FlakyStore {
    inner: crate::MemoryStore,
    pub(crate) fail_writes: Cell<bool>,
}

impl FlakyStore {
    fn failure() -> StoreError {
        StoreError::io(
            StoreStep::Write,
            PathBuf::from("/flaky"),
            std::io::Error::new(std::io::ErrorKind::StorageFull, "disk full"),
        )
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        if self.fail_writes.get() {
            return Err(Self::failure());
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        if self.fail_writes.get() {
            return Err(Self::failure());
        }
        self.inner.remove(key)
    }
}
