//! Parsing
//!
//!     Parsing is a single left-to-right fold over the document's lines. The fold
//!     state is an explicit [`ScanState`] value: the trip draft, the day under
//!     construction, the current section and the front-matter position. Each line is
//!     one call to [`ScanState::step`], which consumes the state and returns the next
//!     one, so a single step can be tested in isolation.
//!
//!     There is no backtracking. Document order is the only source of ordering for
//!     days, activities and subtitle parts.
//!
//!         text ── lines ──► step* ──► finish ──► TripDraft ──► validate ──► Trip
//!
//! Lenient Day Dropping
//!
//!     A day that reaches its commit point (the next heading, or end of input) without
//!     a valid coordinate pair is silently discarded. This is intentional: a partially
//!     written itinerary still renders the days that can be placed on a map. Only the
//!     trip-level checks in [validation](crate::trip::validation) fail a document.

mod scan;

pub use scan::{FrontMatter, OrphanFields, ScanState, Section};

use crate::trip::ast::Trip;
use crate::trip::building::TripDraft;
use crate::trip::error::TripError;
use crate::trip::validation::validate;

/// Editors on some platforms prefix UTF-8 files with U+FEFF.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse itinerary text into a validated [`Trip`].
pub fn parse_document(source: &str) -> Result<Trip, TripError> {
    validate(scan(source))
}

/// Run the scan without validating.
pub fn scan(source: &str) -> TripDraft {
    let source = source.strip_prefix(BYTE_ORDER_MARK).unwrap_or(source);
    source
        .lines()
        .fold(ScanState::new(), ScanState::step)
        .finish()
}
