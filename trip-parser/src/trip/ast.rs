//! Trip model
//!
//!     The parsed itinerary is a flat, immutable value: a [`Trip`] owns an ordered
//!     sequence of [`Day`]s, and every day carries a [`Coordinates`] pair. There are no
//!     optional coordinates at this level. Days that never received a valid pair are
//!     dropped while scanning, so anything holding a `Day` can place it on a map.
//!
//!     The model is serde serializable with camelCase field names, which is the shape
//!     the map and gallery layer consumes.

mod coordinates;
mod day;
mod trip;

pub use coordinates::{CoordinateError, Coordinates};
pub use day::Day;
pub use trip::Trip;
