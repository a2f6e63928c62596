//! File-backed persistence
//!
//! JSONL append logs for the three event streams, a whole-object JSON
//! file behind the small-value store, and a directory of raw blobs for
//! recorded media.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::warn;
use webreel_video::{BlobStore, VideoError};

/// Append a JSON record to a JSONL file.
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(record)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

/// Read all records from a JSONL file. Malformed lines are skipped
/// with a warning so one bad record never hides the rest of the log.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(err) => warn!(path = %path.display(), line = line_no + 1, %err, "skipping malformed record"),
        }
    }

    Ok(records)
}

/// Write data atomically using temp file + rename.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Key-value store for small session metadata (active tab, video mime
/// type, flags). Not for event streams or media payloads.
pub trait SmallValueStore {
    fn get(&self, keys: &[&str]) -> Result<BTreeMap<String, Value>>;
    fn set(&mut self, values: BTreeMap<String, Value>) -> Result<()>;
    fn remove(&mut self, keys: &[&str]) -> Result<()>;
}

/// Small-value store backed by one JSON object on disk.
#[derive(Debug)]
pub struct FileValueStore {
    path: PathBuf,
}

impl FileValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, map: &BTreeMap<String, Value>) -> Result<()> {
        let json = serde_json::to_string_pretty(map)?;
        atomic_write(&self.path, json.as_bytes())
    }
}

impl SmallValueStore for FileValueStore {
    fn get(&self, keys: &[&str]) -> Result<BTreeMap<String, Value>> {
        let all = self.load()?;
        Ok(all
            .into_iter()
            .filter(|(k, _)| keys.contains(&k.as_str()))
            .collect())
    }

    fn set(&mut self, values: BTreeMap<String, Value>) -> Result<()> {
        let mut all = self.load()?;
        all.extend(values);
        self.save(&all)
    }

    fn remove(&mut self, keys: &[&str]) -> Result<()> {
        let mut all = self.load()?;
        all.retain(|k, _| !keys.contains(&k.as_str()));
        self.save(&all)
    }
}

/// Append-only log of one record type.
#[derive(Debug)]
pub struct JsonlLog<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> JsonlLog<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    pub fn append(&mut self, record: &T) -> Result<()> {
        append_jsonl(&self.path, record)
    }

    pub fn read_all(&self) -> Result<Vec<T>> {
        read_jsonl(&self.path)
    }

    pub fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Blob store backed by a directory, one file per blob id.
#[derive(Debug)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn blob_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.bin", id))
    }
}

impl BlobStore for FileBlobStore {
    fn put(&mut self, id: &str, bytes: &[u8]) -> std::result::Result<(), VideoError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|err| VideoError::Storage(err.to_string()))?;
        std::fs::write(self.blob_path(id), bytes)
            .map_err(|err| VideoError::Storage(err.to_string()))
    }

    fn get(&self, id: &str) -> std::result::Result<Option<Vec<u8>>, VideoError> {
        let path = self.blob_path(id);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read(path)
            .map(Some)
            .map_err(|err| VideoError::Storage(err.to_string()))
    }

    fn delete(&mut self, id: &str) -> std::result::Result<(), VideoError> {
        let path = self.blob_path(id);
        if path.exists() {
            std::fs::remove_file(path).map_err(|err| VideoError::Storage(err.to_string()))?;
        }
        Ok(())
    }
}
