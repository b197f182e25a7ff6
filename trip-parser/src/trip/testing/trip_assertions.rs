//! Fluent assertions for parsed trips
//!
//! Every assertion panics with a context path such as `trip:days[2]` so a failure
//! points at the day that broke.

use crate::trip::ast::{Day, Trip};

/// Create an assertion builder for a trip
pub fn assert_trip(trip: &Trip) -> TripAssertion<'_> {
    TripAssertion {
        trip,
        context: "trip".to_string(),
    }
}

pub struct TripAssertion<'a> {
    trip: &'a Trip,
    context: String,
}

impl<'a> TripAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.trip.title, expected,
            "{}: Expected title {:?}, found {:?}",
            self.context, expected, self.trip.title
        );
        self
    }

    pub fn subtitle(self, expected: &str) -> Self {
        assert_eq!(
            self.trip.subtitle.as_deref(),
            Some(expected),
            "{}: Expected subtitle {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn no_subtitle(self) -> Self {
        assert!(
            self.trip.subtitle.is_none(),
            "{}: Expected no subtitle, found {:?}",
            self.context,
            self.trip.subtitle
        );
        self
    }

    pub fn day_count(self, expected: usize) -> Self {
        let actual = self.trip.days.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} days, found {} days",
            self.context, expected, actual
        );
        self
    }

    /// Assert the declared day numbers, in document order.
    pub fn day_ids(self, expected: &[u32]) -> Self {
        let actual: Vec<u32> = self.trip.days.iter().map(|day| day.id).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected day ids {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn day<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(DayAssertion<'a>),
    {
        assert!(
            index < self.trip.days.len(),
            "{}: Day index {} out of bounds (trip has {} days)",
            self.context,
            index,
            self.trip.days.len()
        );
        assertion(DayAssertion {
            day: &self.trip.days[index],
            context: format!("{}:days[{}]", self.context, index),
        });
        self
    }
}

pub struct DayAssertion<'a> {
    day: &'a Day,
    context: String,
}

impl<'a> DayAssertion<'a> {
    pub fn id(self, expected: u32) -> Self {
        assert_eq!(
            self.day.id, expected,
            "{}: Expected id {}, found {}",
            self.context, expected, self.day.id
        );
        self
    }

    pub fn label(self, expected: &str) -> Self {
        assert_eq!(
            self.day.label, expected,
            "{}: Expected label {:?}, found {:?}",
            self.context, expected, self.day.label
        );
        self
    }

    pub fn city(self, expected: &str) -> Self {
        assert_eq!(
            self.day.city, expected,
            "{}: Expected city {:?}, found {:?}",
            self.context, expected, self.day.city
        );
        self
    }

    pub fn country(self, expected: &str) -> Self {
        assert_eq!(
            self.day.country, expected,
            "{}: Expected country {:?}, found {:?}",
            self.context, expected, self.day.country
        );
        self
    }

    pub fn coordinates(self, latitude: f64, longitude: f64) -> Self {
        assert_eq!(
            self.day.coordinates.as_array(),
            [latitude, longitude],
            "{}: Expected coordinates [{}, {}], found {}",
            self.context,
            latitude,
            longitude,
            self.day.coordinates
        );
        self
    }

    pub fn date(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.day.date.as_deref(),
            expected,
            "{}: Expected date {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn campsite(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.day.campsite.as_deref(),
            expected,
            "{}: Expected campsite {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn distance(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.day.distance_label.as_deref(),
            expected,
            "{}: Expected distance {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn description(self, expected: &str) -> Self {
        assert_eq!(
            self.day.description, expected,
            "{}: Expected description {:?}, found {:?}",
            self.context, expected, self.day.description
        );
        self
    }

    pub fn description_contains(self, needle: &str) -> Self {
        assert!(
            self.day.description.contains(needle),
            "{}: Expected description to contain {:?}, found {:?}",
            self.context,
            needle,
            self.day.description
        );
        self
    }

    pub fn activities(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.day.activities, expected,
            "{}: Expected activities {:?}, found {:?}",
            self.context, expected, self.day.activities
        );
        self
    }

    pub fn image_hints(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.day.image_hints, expected,
            "{}: Expected image hints {:?}, found {:?}",
            self.context, expected, self.day.image_hints
        );
        self
    }
}
