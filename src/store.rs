//! Persistence of the branding configuration.
//!
//! The configuration lives as a single JSON string in eframe's key-value
//! storage. Loading never fails: a missing or unreadable entry yields the
//! default configuration. Every update writes the whole value back.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ConfigUpdate, Configuration, CONFIG_KEY};
use crate::error::Result;

/// Owns the process-wide configuration and keeps it in sync with storage.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    current: Configuration,
}

impl ConfigStore {
    /// Creates a store holding the configuration found in `storage`.
    pub fn open(storage: Option<&dyn eframe::Storage>) -> Self {
        Self {
            current: Self::load(storage),
        }
    }

    /// Returns the configuration currently in effect.
    pub fn current(&self) -> &Configuration {
        &self.current
    }

    /// Reads the configuration from storage, falling back to the defaults.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Configuration {
        match try_load_json::<Configuration>(storage, CONFIG_KEY) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                warn!(key = CONFIG_KEY, %err, "ignoring stored configuration");
                Configuration::default()
            }
            None => {
                debug!(key = CONFIG_KEY, "no stored configuration, using defaults");
                Configuration::default()
            }
        }
    }

    /// Writes `config` under the configuration key and flushes.
    pub fn save(storage: &mut dyn eframe::Storage, config: &Configuration) {
        save_json(storage, CONFIG_KEY, config);
    }

    /// Applies a partial edit, persists the result and returns it.
    ///
    /// Without storage the edit still takes effect for this session.
    pub fn update<S>(&mut self, storage: Option<&mut S>, changes: ConfigUpdate) -> &Configuration
    where
        S: eframe::Storage + ?Sized,
    {
        if changes.is_empty() {
            return &self.current;
        }

        self.current = self.current.merged(changes);
        match storage {
            Some(storage) => save_json(storage, CONFIG_KEY, &self.current),
            None => debug!("no storage available, configuration change is not persisted"),
        }
        &self.current
    }
}

/// Reads and decodes a JSON value stored under `key`.
///
/// Returns `None` if there is no storage or no entry, and `Some(Err(_))` if
/// the entry exists but does not decode.
pub fn try_load_json<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<Result<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let storage = storage?;
    let json_str = storage.get_string(key)?;
    Some(serde_json::from_str(&json_str).map_err(Into::into))
}

/// Encodes `value` as JSON, stores it under `key` and flushes.
pub fn save_json<S, T>(storage: &mut S, key: &str, value: &T)
where
    S: eframe::Storage + ?Sized,
    T: Serialize,
{
    match serde_json::to_string(value) {
        Ok(json_str) => {
            storage.set_string(key, json_str);
            storage.flush();
        }
        Err(err) => warn!(key, %err, "failed to encode value for storage"),
    }
}
