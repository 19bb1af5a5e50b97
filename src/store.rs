//! File-backed player records.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::roster::Roster;

/// Default location of the player records file.
pub const DEFAULT_PATH: &str = "res/CasinoInfo.txt";

/// A text file holding one `name,balance,wins` record per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStore {
    path: PathBuf,
}

impl PlayerStore {
    /// Opens the store at `path`, creating the file and its directory if
    /// they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };

        if let Some(dir) = store.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| store.io_error(source))?;
        }

        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&store.path)
            .map_err(|source| store.io_error(source))?;

        Ok(store)
    }

    /// Returns the path of the records file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(&self) -> Result<Roster, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let roster = Roster::parse(&text);
        log::info!(
            "loaded {} player(s) from {}",
            roster.len(),
            self.path.display()
        );
        Ok(roster)
    }

    /// Overwrites the file with the roster's records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, roster: &Roster) -> Result<(), StoreError> {
        fs::write(&self.path, roster.to_records()).map_err(|source| self.io_error(source))?;
        log::info!(
            "saved {} player(s) to {}",
            roster.len(),
            self.path.display()
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
