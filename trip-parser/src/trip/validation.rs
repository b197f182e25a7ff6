//! Trip model validation
//!
//!     Runs once, after the whole document has been scanned, and turns a
//!     [`TripDraft`] into an immutable [`Trip`] or a single [`TripError`]:
//!
//!         - the title must be non-empty ([`TripError::MissingTitle`])
//!         - at least one day must have survived the coordinate gate
//!           ([`TripError::NoDays`])
//!         - every retained day must carry two finite coordinates
//!           ([`TripError::InvalidCoordinates`])
//!
//!     The last check cannot fail for drafts built by the scanner, since days without
//!     coordinates never commit. It is kept so no day reaches a renderer unchecked,
//!     whatever built the draft.

use crate::trip::ast::Trip;
use crate::trip::building::TripDraft;
use crate::trip::error::TripError;

pub fn validate(draft: TripDraft) -> Result<Trip, TripError> {
    let TripDraft {
        title,
        subtitle,
        days,
        dropped,
    } = draft;

    if title.trim().is_empty() {
        tracing::warn!("parsing failed: missing title");
        return Err(TripError::MissingTitle);
    }
    if days.is_empty() {
        tracing::warn!(dropped = dropped.len(), "parsing failed: no days found");
        return Err(TripError::NoDays);
    }
    if let Some(day) = days.iter().find(|day| !day.coordinates.is_valid()) {
        tracing::warn!(day = %day.label, "missing or invalid coordinates");
        return Err(TripError::InvalidCoordinates {
            label: day.label.clone(),
        });
    }
    if !dropped.is_empty() {
        tracing::debug!(?dropped, "days dropped for missing coordinates");
    }

    Ok(Trip {
        title,
        subtitle: subtitle.build(),
        days,
    })
}
