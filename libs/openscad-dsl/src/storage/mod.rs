//! Storage backends for printed models.
//!
//! [`DiskStorage`] writes real files; [`InMemoryStorage`] keeps the text in a
//! map for tests and hosts without a filesystem.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{PersistenceError, PersistenceResult};
use crate::node::Node;
use crate::printer;

/// Destination for printed OpenSCAD source.
///
/// # Examples
/// ```
/// use openscad_dsl::storage::{InMemoryStorage, Storage};
/// let mut storage = InMemoryStorage::default();
/// storage.store("main.scad".as_ref(), "cube(1);").unwrap();
/// assert_eq!(storage.get("main.scad"), Some("cube(1);"));
/// ```
pub trait Storage {
    /// Writes `text` to `path`, replacing any previous content.
    fn store(&mut self, path: &Path, text: &str) -> PersistenceResult<()>;
}

/// Writes files through `std::fs`.
///
/// The file is created if absent and truncated if present. A failed write may
/// leave a partially written file behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStorage;

impl Storage for DiskStorage {
    #[instrument(level = "debug", skip(self, text), fields(bytes = text.len()))]
    fn store(&mut self, path: &Path, text: &str) -> PersistenceResult<()> {
        let mut file = File::create(path).map_err(|source| PersistenceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened output file");

        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| PersistenceError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), bytes = text.len(), "wrote model");
        Ok(())
    }
}

/// Keeps stored files in memory, keyed by path.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorage {
    files: HashMap<PathBuf, String>,
}

impl InMemoryStorage {
    /// Returns the text stored under `path`, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Storage for InMemoryStorage {
    fn store(&mut self, path: &Path, text: &str) -> PersistenceResult<()> {
        self.files.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}

// =============================================================================
// CONVENIENCE API
// =============================================================================

/// Writes already printed text to a file on disk.
pub fn save_text(text: &str, path: impl AsRef<Path>) -> PersistenceResult<()> {
    DiskStorage.store(path.as_ref(), text)
}

/// Prints `node` and writes the result to a file on disk.
///
/// # Examples
/// ```no_run
/// use openscad_dsl::{cube, save};
/// save(&cube([10.0, 10.0, 10.0], false), "output.scad").unwrap();
/// ```
pub fn save(node: &Node, path: impl AsRef<Path>) -> PersistenceResult<()> {
    save_text(&printer::print(node), path)
}

impl Node {
    /// Prints this tree and writes it to `path`. See [`save`].
    pub fn save(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        save(self, path)
    }

    /// Prints this tree into any [`Storage`] backend.
    pub fn store_in(&self, storage: &mut impl Storage, path: impl AsRef<Path>) -> PersistenceResult<()> {
        storage.store(path.as_ref(), &printer::print(self))
    }
}

#[cfg(test)]
mod tests;
