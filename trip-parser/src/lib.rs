//! # trip-parser
//!
//! A parser for markdown travel itineraries.
//!
//! An itinerary is a line oriented markdown document: a title, an optional
//! subtitle, and a sequence of `## Day N: City, Country` sections carrying
//! coordinates, camping notes, narrative text and activities. Two conventions
//! coexist in the wild and are accepted in the same pass:
//!
//!     ---
//!     title: Normandy Coast
//!     subtitle: 5 days in July
//!     ---
//!     ## Day 1: Bayeux, France
//!     - **Coords**: 49.2764, -0.7028
//!
//! and the older bold-label form:
//!
//!     # Berlin Loop
//!     **Duration:** 2 days
//!     ## Day 1: Berlin, Germany
//!     **Coordinates:** 52.52, 13.405
//!
//! File Layout
//!
//! src/trip
//!   ├── ast          The trip model handed to renderers
//!   ├── lexing       Line classification (ordered rule table)
//!   ├── parsing      The scan fold over classified lines
//!   ├── building     Day and trip drafts assembled while scanning
//!   ├── validation   Post-scan invariants
//!   └── formats      Json / treeviz / itinerary output
//!
//! For testing guidelines see the [testing module](trip::testing): parser tests
//! load sample documents and verify them with the fluent `assert_trip` API.

#![allow(rustdoc::invalid_html_tags)]

pub mod trip;

pub use trip::ast::{Coordinates, Day, Trip};
pub use trip::error::{FailureKind, TripError};
pub use trip::parsing::parse_document;
