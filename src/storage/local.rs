//! Local key-value store
//!
//! A string-keyed store of string blobs, one file per key
//! (`<dir>/<key>.json`). Values are usually JSON documents.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_string_if_exists, write_atomic, write_json_atomic};

const ITEM_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn item_path(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TrackerError::Storage(format!("Invalid storage key: '{}'", key)));
        }

        Ok(self.dir.join(format!("{}.{}", key, ITEM_EXTENSION)))
    }

    /// Get the raw value stored under `key`
    pub fn get_item(&self, key: &str) -> TrackerResult<Option<String>> {
        read_string_if_exists(self.item_path(key)?)
    }

    /// Get and parse the JSON value stored under `key`
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> TrackerResult<Option<T>> {
        let Some(raw) = self.get_item(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            TrackerError::Storage(format!("Failed to parse stored '{}': {}", key, e))
        })
    }

    /// Store a raw value under `key`, replacing any previous value
    pub fn set_item(&self, key: &str, value: &str) -> TrackerResult<()> {
        write_atomic(self.item_path(key)?, value.as_bytes())
    }

    /// Serialize `value` as JSON and store it under `key`
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> TrackerResult<()> {
        write_json_atomic(self.item_path(key)?, value)
    }

    /// Remove `key`, returning whether it existed
    pub fn remove_item(&self, key: &str) -> TrackerResult<bool> {
        match fs::remove_file(self.item_path(key)?) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(TrackerError::Storage(format!(
                "Failed to remove '{}': {}",
                key, e
            ))),
        }
    }

    /// List stored keys in sorted order
    pub fn keys(&self) -> TrackerResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ITEM_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
