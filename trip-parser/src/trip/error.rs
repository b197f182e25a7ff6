//! Error types for trip parsing
//!
//! Parsing is all-or-nothing: any failure abandons the document and no partial
//! trip escapes. Callers that only care about "did the document work" can use
//! [`TripError::kind`] and [`TripError::user_message`]; both failure families map
//! to the same message.

use thiserror::Error;

/// Errors that can occur while turning itinerary text into a [`Trip`](crate::Trip).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    /// No `# Title` line and no front-matter `title:` with content.
    #[error("invalid trip format: missing title")]
    MissingTitle,
    /// Every day heading lacked valid coordinates, or there were no day headings.
    #[error("invalid trip format: no days with valid coordinates")]
    NoDays,
    /// A retained day does not carry two finite coordinates.
    #[error("invalid coordinates for {label}")]
    InvalidCoordinates { label: String },
    /// Submitted text was empty after trimming.
    #[error("trip document is empty")]
    EmptyDocument,
}

/// Coarse failure classification handed to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidFormat,
    InvalidCoordinates,
}

impl TripError {
    pub fn kind(&self) -> FailureKind {
        match self {
            TripError::InvalidCoordinates { .. } => FailureKind::InvalidCoordinates,
            TripError::MissingTitle | TripError::NoDays | TripError::EmptyDocument => {
                FailureKind::InvalidFormat
            }
        }
    }

    /// Message suitable for showing inline next to the document input.
    pub fn user_message(&self) -> &'static str {
        match self {
            TripError::EmptyDocument => "Please paste your trip Markdown.",
            _ => "Invalid trip format. Please check your Markdown and try again.",
        }
    }
}
