use color_eyre::Result;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Durable string-valued key-value store.
///
/// Reads never fail: a missing key is `None`. Writes take effect immediately.
pub trait Storage: std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Storage backed by a single JSON object on disk.
///
/// The whole file is rewritten on every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the storage file at `path`.
    ///
    /// A missing, unreadable or corrupted file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            debug!("No storage file at {:?}", path);
            return BTreeMap::new();
        }

        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(entries) => entries,
                Err(e) => {
                    info!("Failed to deserialize storage file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) => {
                info!("Failed to read storage file {:?}: {}", path, e);
                BTreeMap::new()
            }
        }
    }

    /// Default location of the storage file.
    ///
    /// `<data_dir>/searchbox/storage.json`, falling back to `~/.searchbox/` and then the
    /// working directory.
    pub fn default_path() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            return data_dir.join("searchbox").join("storage.json");
        }
        if let Some(home) = dirs::home_dir() {
            return home.join(".searchbox").join("storage.json");
        }
        PathBuf::from(".searchbox.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
