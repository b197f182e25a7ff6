//! Building
//!
//!     Drafts are the mutable halves of the model. The scanner feeds each field line
//!     into the [`DayDraft`] under construction and commits it on the next day heading
//!     or at end of input. Committing is where the coordinate gate lives: a draft
//!     without a valid pair commits to nothing.
//!
//!     [`TripDraft`] is the accumulator handed to
//!     [validation](crate::trip::validation) once scanning is finished.

mod day_draft;
mod subtitle;
mod trip_draft;

pub use day_draft::{split_location, DayDraft};
pub use subtitle::{SubtitleBuilder, SUBTITLE_SEPARATOR};
pub use trip_draft::TripDraft;
