//! Lexer
//!
//!     Itineraries are line oriented, so lexing is classification: every trimmed line
//!     becomes exactly one [`Line`]. Classification is stateless. Whether a field line
//!     attaches to a day, or whether a `- ` line is an activity, is decided by the scan
//!     in [parsing](crate::trip::parsing), which owns all the carried state.
//!
//!     The one exception is front matter. Inside a `---` block every line is a
//!     `key: value` entry regardless of its shape, so the scanner calls
//!     [`classify_front_matter_line`] instead of [`classify_line`] there.

pub mod line_classification;

pub use line_classification::{
    classify_front_matter_line, classify_line, FieldName, FieldSyntax, Line, TripMetaField,
    LINE_RULES,
};
