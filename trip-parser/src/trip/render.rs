//! Renderer boundary
//!
//! The map, markers, route line and slideshow live outside this crate. They receive
//! one [`Trip`] per call through [`TripRenderer`]. A failed parse never reaches a
//! renderer, so whatever it last rendered stays on screen.
//!
//! [`ItineraryRenderer`] is the plain text renderer the command line uses.

use crate::trip::ast::{Day, Trip};
use std::io;

pub trait TripRenderer {
    type Error;

    fn render(&mut self, trip: &Trip) -> Result<(), Self::Error>;
}

/// Writes a day-by-day text listing.
pub struct ItineraryRenderer<W> {
    out: W,
}

impl<W: io::Write> ItineraryRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> TripRenderer for ItineraryRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, trip: &Trip) -> Result<(), Self::Error> {
        self.out.write_all(render_itinerary(trip).as_bytes())?;
        self.out.flush()
    }
}

pub fn render_itinerary(trip: &Trip) -> String {
    let mut out = String::new();
    out.push_str(&trip.title);
    out.push('\n');
    if let Some(subtitle) = &trip.subtitle {
        out.push_str(subtitle);
        out.push('\n');
    }
    for day in &trip.days {
        out.push('\n');
        push_day(&mut out, day);
    }
    out
}

fn push_day(out: &mut String, day: &Day) {
    out.push_str(&format!("{}: {}\n", day.label, day.location()));
    let mut field = |label: &str, value: &str| {
        out.push_str(&format!("  {}: {}\n", label, value));
    };
    if let Some(date) = &day.date {
        field("Date", date.as_str());
    }
    field("Coordinates", day.coordinates.to_string().as_str());
    if let Some(campsite) = &day.campsite {
        field("Camping", campsite.as_str());
    }
    if let Some(distance) = &day.distance_label {
        field("Distance", distance.as_str());
    }
    if !day.description.is_empty() {
        field("Notes", day.description.as_str());
    }
    if !day.activities.is_empty() {
        out.push_str("  Activities:\n");
        for activity in &day.activities {
            out.push_str(&format!("    - {}\n", activity));
        }
    }
}
