//! File-per-key backend
//!
//! Each key maps to one file inside a data directory. Writes go to a hidden
//! temporary sibling that is renamed over the target, so a crash mid-write
//! leaves the previous value in place.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use super::{Backend, errors::BackendError};
use crate::Result;

/// Durable backend storing values as files under a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Opens (creating if needed) a backend rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| BackendError::FileIo {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Directory holding the value files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are limited to `[A-Za-z0-9_.-]` and may not start with `.`, which
    /// keeps them inside `root` and away from the temporary files.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(BackendError::InvalidKey {
                key: key.to_string(),
            }
            .into());
        }
        Ok(self.root.join(key))
    }
}

fn io_error(key: &str, source: std::io::Error) -> crate::Error {
    BackendError::FileIo {
        key: key.to_string(),
        source,
    }
    .into()
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.tmp"));

        let mut file = fs::File::create(&tmp).map_err(|e| io_error(key, e))?;
        file.write_all(value.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| io_error(key, e))?;
        drop(file);

        fs::rename(&tmp, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            io_error(key, e)
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
