//! Reading progress persisted as one JSON object of `name -> page`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use pagewise_core::progress::{ProgressRecord, ProgressStore};

use super::{StoreError, atomic_write};

#[derive(Clone, Debug)]
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonProgressStore {
    type Error = StoreError;

    fn load(&mut self) -> ProgressRecord {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("progress: no record at {}", self.path.display());
                return ProgressRecord::new();
            }
            Err(err) => {
                warn!(
                    "progress: cannot read {}: {}, starting empty",
                    self.path.display(),
                    err
                );
                return ProgressRecord::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    "progress: malformed {}: {}, starting empty",
                    self.path.display(),
                    err
                );
                ProgressRecord::new()
            }
        }
    }

    fn save(&mut self, record: &ProgressRecord) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(record)?;
        atomic_write(&self.path, &json)?;
        Ok(())
    }
}
