//! Testing utilities for trip parsing
//!
//!     Parser tests follow two rules:
//!
//!         1. Sources come from the sample documents in `trip-parser/samples`, loaded
//!            through [`Samples`], or from short inline documents when a test is about
//!            one specific line shape.
//!         2. Results are checked with the fluent [`assert_trip`] API rather than by
//!            walking `Trip` fields by hand.
//!
//!     ```rust,ignore
//!     let trip = Samples::legacy_loop().parse().unwrap();
//!     assert_trip(&trip)
//!         .title("Berlin to Normandy")
//!         .day_count(4)
//!         .day(0, |day| {
//!             day.city("Berlin")
//!                 .country("Germany")
//!                 .activities(&["Pick up the van", "Walk around Mitte"]);
//!         });
//!     ```

mod samples;
mod trip_assertions;

pub use samples::Samples;
pub use trip_assertions::{assert_trip, DayAssertion, TripAssertion};
