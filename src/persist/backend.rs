use crate::error::BoxError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Fixed identifier under which snapshots are stored.
pub const STORAGE_KEY: &str = "storem-data";

/// Durable blob storage for store snapshots.
///
/// `save` replaces the previous snapshot; `load` returns `None` if nothing has
/// been saved yet. Errors are passed to the caller of the store method that
/// triggered the call.
pub trait Backend: Send {
    fn load(&mut self) -> Result<Option<String>, BoxError>;

    fn save(&mut self, blob: &str) -> Result<(), BoxError>;
}

/// In-memory backend. Clones share the same slot, so a second store can read
/// what the first one saved.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    /// Backend with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current saved snapshot, if any.
    pub fn snapshot(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Backend for MemoryBackend {
    fn load(&mut self) -> Result<Option<String>, BoxError> {
        let slot = self.slot.lock().map_err(|_| "memory backend lock poisoned")?;
        Ok(slot.clone())
    }

    fn save(&mut self, blob: &str) -> Result<(), BoxError> {
        let mut slot = self.slot.lock().map_err(|_| "memory backend lock poisoned")?;
        *slot = Some(blob.to_owned());
        Ok(())
    }
}

/// File backend writing `<dir>/storem-data.json`.
///
/// Saves go to a temporary sibling first and are renamed into place.
#[derive(Clone, Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend storing its snapshot inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn load(&mut self) -> Result<Option<String>, BoxError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, blob: &str) -> Result<(), BoxError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = write_then_rename(&tmp, &self.path, blob) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::trace!(path = %self.path.display(), bytes = blob.len(), "snapshot written");
        Ok(())
    }
}

fn write_then_rename(tmp: &Path, path: &Path, blob: &str) -> io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(blob.as_bytes())?;
    file.sync_all()?;
    fs::rename(tmp, path)
}
