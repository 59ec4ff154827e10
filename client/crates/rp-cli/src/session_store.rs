use rp_session::{FileStore, KeyValueStore, MemoryStore};

use std::path::PathBuf;

use log::warn;

/// Opens the store backing the session.
///
/// `None` gives an in-memory store. A store file that cannot be opened is
/// reported and also replaced by an in-memory store, so commands that need no
/// session keep working and the session starts anonymous.
pub fn open(path: Option<PathBuf>) -> Box<dyn KeyValueStore> {
    let Some(path) = path else {
        return Box::new(MemoryStore::new());
    };

    match FileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("{e}. {}", e.recovery_hint());
            warn!("Continuing without a saved session; logins will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
