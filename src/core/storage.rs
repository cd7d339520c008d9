//! Key-value persistence backing the favorites store
//!
//! Values are opaque strings owned by the caller. The file-backed
//! implementation keeps one JSON file per key inside the application
//! data directory, so state survives across invocations and remains
//! inspectable with a text editor.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::core::dirs::get_data_directory;
use crate::core::error::Result;

/// Storage seam for persisted state. Implementations map string keys
/// to string payloads; serialization of the payload is the caller's
/// concern.
pub trait KeyValueStore {
    /// Reads the payload stored under `key`, or `None` when the key
    /// has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous payload.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store keeping `<base>/<key>.json` per key.
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        FileStore { base }
    }

    /// Opens the store rooted at the application data directory.
    pub fn open_default() -> Result<Self> {
        Ok(FileStore::new(get_data_directory()?))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
