//! A flat JSON array on disk, read and written in full.

use crate::error::{Result, StoreError};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::{self, File},
    io::{BufWriter, ErrorKind, Write},
    marker::PhantomData,
    path::{Path, PathBuf},
};
use tracing::debug;

pub struct JsonStore<T> {
    path: PathBuf,
    records: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: PhantomData,
        }
    }

    /// Reads every record. A store that does not exist yet is empty.
    pub fn load(&self) -> Result<Vec<T>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store absent, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(io_error(&self.path, source)),
        };

        let records: Vec<T> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = records.len(), "loaded store");
        Ok(records)
    }

    /// Replaces the store with `records`. The new contents go to a sibling
    /// `.new` file first and are renamed over the old one. On failure the
    /// `.new` file is removed and the old store is left as it was.
    pub fn save(&self, records: &[T]) -> Result<()> {
        let staging = self.staging_path();

        if let Err(err) = self.write_staged(&staging, records) {
            if staging.exists() {
                let _ = fs::remove_file(&staging);
            }
            return Err(err);
        }

        debug!(path = %self.path.display(), count = records.len(), "saved store");
        Ok(())
    }

    fn write_staged(&self, staging: &Path, records: &[T]) -> Result<()> {
        let file = File::create(staging).map_err(|source| io_error(staging, source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, records)
            .map_err(|source| io_error(staging, source.into()))?;
        writer.flush().map_err(|source| io_error(staging, source))?;
        drop(writer);

        fs::rename(staging, &self.path).map_err(|source| io_error(&self.path, source))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".new");
        PathBuf::from(name)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
