use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Leading decimal number of a component; anything after it (`°`, `N`, units) is ignored.
static NUMBER_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());

/// A latitude/longitude pair, both components finite.
///
/// Serializes as a two element array, `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("coordinates must be two finite numbers, got [{latitude}, {longitude}]")]
pub struct CoordinateError {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `None` if either component is NaN or infinite.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        (latitude.is_finite() && longitude.is_finite()).then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a `"lat, lon"` pair.
    ///
    /// Exactly two comma separated components are accepted, each read from its
    /// leading number, so `"48.8566° N, 2.3522° E"` parses. `"52.5"`, `"abc, 2.3"`
    /// and `"1, 2, 3"` all yield `None`.
    pub fn parse_pair(text: &str) -> Option<Self> {
        let mut parts = text.split(',').map(parse_leading_number);
        let latitude = parts.next()??;
        let longitude = parts.next()??;
        if parts.next().is_some() {
            return None;
        }
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

fn parse_leading_number(component: &str) -> Option<f64> {
    let number = NUMBER_PREFIX_REGEX.find(component.trim())?;
    number.as_str().parse::<f64>().ok()
}

impl TryFrom<[f64; 2]> for Coordinates {
    type Error = CoordinateError;

    fn try_from([latitude, longitude]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude).ok_or(CoordinateError {
            latitude,
            longitude,
        })
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coordinates: Coordinates) -> Self {
        coordinates.as_array()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
