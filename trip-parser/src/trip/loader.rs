//! Document loading utilities
//!
//! [`TripLoader`] holds itinerary source text, read from a file or given as a
//! string, and parses it on demand.
//!
//! # Example
//!
//! ```rust
//! use trip_parser::trip::loader::TripLoader;
//!
//! // From file
//! let trip = TripLoader::from_path("trip.md")?.parse()?;
//!
//! // First of several candidate locations
//! let loader = TripLoader::load_first_available(&["trip.md", "public/trip.md"])?;
//! ```

use crate::trip::ast::Trip;
use crate::trip::error::TripError;
use crate::trip::parsing::parse_document;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no trip document found (tried: {})", display_paths(.tried))]
    NoSource { tried: Vec<PathBuf> },
    #[error(transparent)]
    Parse(#[from] TripError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Itinerary source text plus where it came from.
#[derive(Debug, Clone)]
pub struct TripLoader {
    source: String,
    origin: Option<PathBuf>,
}

impl TripLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = source.len(), "loaded trip document");
        Ok(TripLoader {
            source,
            origin: Some(path.to_path_buf()),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        TripLoader {
            source: source.into(),
            origin: None,
        }
    }

    /// Try each path in order and load the first one that can be read.
    pub fn load_first_available<P: AsRef<Path>>(paths: &[P]) -> Result<Self, LoaderError> {
        let mut tried = Vec::with_capacity(paths.len());
        for path in paths {
            match Self::from_path(path) {
                Ok(loader) => return Ok(loader),
                Err(err) => {
                    tracing::warn!(%err, "trip document unavailable, trying next location");
                    tried.push(path.as_ref().to_path_buf());
                }
            }
        }
        Err(LoaderError::NoSource { tried })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Parse the source into a validated [`Trip`].
    pub fn parse(&self) -> Result<Trip, LoaderError> {
        Ok(parse_document(&self.source)?)
    }
}
