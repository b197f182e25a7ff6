//! Trip session
//!
//!     The host keeps a user supplied document verbatim in a key-value blob store and
//!     falls back to a bundled default document when there is none. [`TripSession`]
//!     owns that policy together with the currently displayed trip:
//!
//!         - load: the stored custom document if present, else the default
//!         - submit: parse pasted text; only a successful parse is stored and shown
//!         - reset: forget the custom document and reload the default
//!
//!     A failed load or submit leaves the current trip untouched, so a renderer that
//!     already shows a trip keeps showing it.

use crate::trip::ast::Trip;
use crate::trip::error::TripError;
use crate::trip::parsing::parse_document;
use std::collections::HashMap;

/// Key under which the custom document is stored.
pub const CUSTOM_TRIP_KEY: &str = "customTrip";

/// Key-value storage for document blobs, maintained by the host.
pub trait BlobStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory [`BlobStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.blobs.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.blobs.remove(key);
    }
}

#[derive(Debug)]
pub struct TripSession<S> {
    store: S,
    current: Option<Trip>,
}

impl<S: BlobStore> TripSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// The trip currently on display, if any load or submit has succeeded.
    pub fn current(&self) -> Option<&Trip> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn has_custom_trip(&self) -> bool {
        self.store.get(CUSTOM_TRIP_KEY).is_some()
    }

    /// Show the stored custom document, or `default_text` when none is stored.
    pub fn load(&mut self, default_text: &str) -> Result<&Trip, TripError> {
        let custom = self.store.get(CUSTOM_TRIP_KEY);
        let source = match custom.as_deref() {
            Some(text) => {
                tracing::info!("loading custom trip from store");
                text
            }
            None => default_text,
        };
        let trip = parse_document(source).inspect_err(|err| {
            tracing::warn!(%err, "failed to load trip; keeping current trip");
        })?;
        Ok(&*self.current.insert(trip))
    }

    /// Parse pasted text. On success the trimmed text is stored verbatim and the
    /// trip replaces the current one; on failure nothing changes.
    pub fn submit(&mut self, text: &str) -> Result<&Trip, TripError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TripError::EmptyDocument);
        }
        let trip = parse_document(text).inspect_err(|err| {
            tracing::warn!(%err, "rejected submitted trip; keeping current trip");
        })?;
        self.store.put(CUSTOM_TRIP_KEY, text.to_string());
        Ok(&*self.current.insert(trip))
    }

    /// Drop the custom document and show the default again.
    pub fn reset(&mut self, default_text: &str) -> Result<&Trip, TripError> {
        self.store.remove(CUSTOM_TRIP_KEY);
        self.load(default_text)
    }
}
