use crate::{backend::BookingBackend, error::PersistenceError, types::Booking};
use serde_json::Value;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{info, warn};

const EMPTY_COLLECTION: &str = "[]\n";

/// Keeps the booking collection as one pretty-printed JSON array in a file.
#[derive(Debug, Clone)]
pub struct JsonFileBookings {
    path: PathBuf,
}

impl JsonFileBookings {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let backend = Self { path: path.into() };
        backend.ensure_exists()?;
        Ok(backend)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_exists(&self) -> Result<(), PersistenceError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, EMPTY_COLLECTION)?;
        info!(path = %self.path.display(), "Created empty bookings file");
        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }
}

impl BookingBackend for JsonFileBookings {
    fn load_all(&self) -> Result<Vec<Booking>, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.ensure_exists()?;
                return Ok(vec![]);
            }
            Err(err) => return Err(err.into()),
        };

        let entries = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!(path = %self.path.display(), "Bookings file holds no list, reading it as empty");
                return Ok(vec![]);
            }
            Err(err) => {
                warn!(?err, path = %self.path.display(), "Bookings file is not valid JSON, reading it as empty");
                return Ok(vec![]);
            }
        };

        // A bad entry inside a valid list fails the operation so the next save cannot drop the rest.
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value(entry)
                    .map_err(|source| PersistenceError::Malformed { index, source })
            })
            .collect()
    }

    fn save_all(&self, bookings: &[Booking]) -> Result<(), PersistenceError> {
        let mut contents = serde_json::to_string_pretty(bookings)?;
        contents.push('\n');

        // Write next to the target and rename over it so a reader never sees a partial file.
        let directory = self.parent_dir().unwrap_or_else(|| Path::new("."));
        let mut file = NamedTempFile::new_in(directory)?;
        file.write_all(contents.as_bytes())?;
        // the temp file starts out owner-only; keep whatever mode the target already had
        if let Ok(metadata) = fs::metadata(&self.path) {
            file.as_file().set_permissions(metadata.permissions())?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
