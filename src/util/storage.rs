//! JSON persistence over browser local storage.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort by contract: every failure (no window, storage
//! blocked by the browser, quota exceeded, malformed stored text) is logged
//! to the console and swallowed. Readers see `None`, writers see nothing.
//! On the server there is no storage at all, so reads are `None` and writes
//! are no-ops.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Loads and decodes the JSON value stored under `key`. Absent keys and
/// undecodable values both come back as `None`; only the latter is logged.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        decode(key, &raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encodes `value` as JSON and writes it under `key`. Failures are logged and
/// otherwise invisible to the caller.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            leptos::logging::warn!("storage: local storage unavailable, dropping write to {key:?}");
            return;
        };
        let encoded = match encode(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                leptos::logging::warn!("storage: failed to serialize {key:?}: {err}");
                return;
            }
        };
        if let Err(err) = storage.set_item(key, &encoded) {
            leptos::logging::warn!("storage: failed to persist {key:?}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Deletes whatever is stored under `key`. Removing an absent key is fine.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            leptos::logging::warn!("storage: failed to remove {key:?}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn encode<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            leptos::logging::warn!("storage: discarding malformed value under {key:?}: {err}");
            None
        }
    }
}
