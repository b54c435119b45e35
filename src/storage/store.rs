//! Key/value instance-state store.
//!
//! [`InstanceState`] is the container the host hands to the mediator's
//! save/restore lifecycle hooks. It is a typed wrapper over a string-keyed
//! JSON map, so any platform bundle can be bridged into it, and it can be
//! persisted on its own with atomic file writes (write-to-temp + rename) for
//! hosts that have no platform bundle at all.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, SheetStackError};

/// Saved-state container passed to `on_save_instance_state` /
/// `on_restore_instance_state`.
///
/// Values are stored as JSON; typed access goes through serde. Unknown keys
/// written by other components are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceState {
    values: BTreeMap<String, serde_json::Value>,
}

impl InstanceState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if `value` cannot be represented as JSON.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_value(value)?;
        self.values.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Retrieves and decodes the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a serialization error when a value is present but does not
    /// decode as `T`. Callers that need corrupted-state recovery (the
    /// mediator) handle this through their fallback policy.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }

    /// Returns the raw JSON value under `key`, if any.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Stores a raw JSON value under `key`.
    ///
    /// Mainly useful for tests and for bridging foreign saved state.
    pub fn set_raw(&mut self, key: &str, value: serde_json::Value) {
        self.values.insert(key.to_string(), value);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Loads a store previously written with [`save_to_file`](Self::save_to_file).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let state = serde_json::from_str(&contents)
            .map_err(|e| SheetStackError::Storage(format!("failed to parse saved state: {e}")))?;

        tracing::debug!(path = ?path, "loaded instance state");
        Ok(state)
    }

    /// Saves the store to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the file is never left in a corrupt state even if the process dies
    /// mid-write.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or the
    /// rename fails.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SheetStackError::Storage(format!("failed to serialize state: {e}")))?;

        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        tracing::debug!(path = ?path, keys = self.values.len(), "saved instance state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_round_trips_typed_values() {
        let mut state = InstanceState::new();
        state.set("numbers", &vec![1u32, 2, 3]).unwrap();

        let restored: Option<Vec<u32>> = state.get("numbers").unwrap();
        assert_eq!(restored, Some(vec![1, 2, 3]));
    }

    #[test]
    fn absent_key_is_none_not_an_error() {
        let state = InstanceState::new();
        let missing: Option<String> = state.get("nope").unwrap();
        assert!(missing.is_none());
        assert!(!state.contains("nope"));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let mut state = InstanceState::new();
        state.set_raw("key", serde_json::json!("not a number"));

        let result: Result<Option<u32>> = state.get("key");
        assert!(result.is_err());
    }

    #[test]
    fn file_round_trip_preserves_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut state = InstanceState::new();
        state.set("a", &"alpha").unwrap();
        state.set("b", &42u8).unwrap();
        state.save_to_file(&path).unwrap();

        let loaded = InstanceState::load_from_file(&path).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn load_of_invalid_json_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = InstanceState::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SheetStackError::Storage(_)));
    }
}
