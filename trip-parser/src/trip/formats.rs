//! Output formats for parsed trips
//!
//!     - json: the serde model, as consumed by the map and gallery layer
//!     - treeviz: one line per node, for eyeballing what the parser saw
//!     - itinerary: a readable plain text listing (see [render](crate::trip::render))

pub mod treeviz;

use crate::trip::ast::Trip;
use crate::trip::render::render_itinerary;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use treeviz::to_treeviz_str;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (available: json, treeviz, itinerary)")]
    UnknownFormat(String),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Treeviz,
    Itinerary,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Treeviz, Format::Itinerary];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Treeviz => "treeviz",
            Format::Itinerary => "itinerary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Format::Json => "Trip model as pretty-printed JSON",
            Format::Treeviz => "One line per node tree view",
            Format::Itinerary => "Plain text day-by-day listing",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialize a trip in the requested format.
pub fn serialize(trip: &Trip, format: Format) -> Result<String, FormatError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(trip)?),
        Format::Treeviz => Ok(to_treeviz_str(trip)),
        Format::Itinerary => Ok(render_itinerary(trip)),
    }
}
