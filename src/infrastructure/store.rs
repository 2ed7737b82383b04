//! Word list persistence
//!
//! The list is stored as a TOML document with a single array:
//!
//! ```toml
//! words = ["cat", "car", "bat"]
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::infrastructure::traits::{FileSystem, WordStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct WordFile {
    #[serde(default)]
    words: Vec<String>,
}

/// Word store backed by a TOML file.
pub struct FileWordStore {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl FileWordStore {
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordStore for FileWordStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> io::Result<Vec<String>> {
        if !self.fs.exists(&self.path) {
            debug!("no word file yet");
            return Ok(Vec::new());
        }
        let content = self.fs.read_to_string(&self.path)?;
        let file: WordFile = toml::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        debug!("loaded {} words", file.words.len());
        Ok(file.words)
    }

    #[instrument(level = "debug", skip_all, fields(path = %self.path.display(), count = words.len()))]
    fn save(&self, words: &[String]) -> io::Result<()> {
        let file = WordFile {
            words: words.to_vec(),
        };
        let content = toml::to_string(&file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        self.fs.ensure_parent(&self.path)?;
        self.fs.write(&self.path, &content)
    }

    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn purge(&self) -> io::Result<()> {
        if self.fs.exists(&self.path) {
            self.fs.remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory word store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryWordStore {
    words: Mutex<Option<Vec<String>>>,
    fail_writes: bool,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `words`, as if saved by an earlier session.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Mutex::new(Some(words.into_iter().map(Into::into).collect())),
            fail_writes: false,
        }
    }

    /// Store whose `save` and `purge` always fail.
    pub fn failing() -> Self {
        Self {
            words: Mutex::new(None),
            fail_writes: true,
        }
    }

    /// Currently stored list; `None` if never saved or purged.
    pub fn stored(&self) -> Option<Vec<String>> {
        self.words.lock().map(|w| w.clone()).unwrap_or_default()
    }

    fn write_error() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only")
    }
}

impl WordStore for MemoryWordStore {
    fn load(&self) -> io::Result<Vec<String>> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, words: &[String]) -> io::Result<()> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let mut guard = self
            .words
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        *guard = Some(words.to_vec());
        Ok(())
    }

    fn purge(&self) -> io::Result<()> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let mut guard = self
            .words
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
