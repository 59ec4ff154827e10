pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result as StoreErrorResult, StoreError, StoreStep};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use std::rc::Rc;

/// Synchronous string-keyed, string-valued durable storage.
///
/// Methods take `&self` like browser local storage; implementations use
/// interior mutability and are not meant to be shared across threads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()>;
    fn remove(&self, key: &str) -> StoreErrorResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        (**self).remove(key)
    }
}
