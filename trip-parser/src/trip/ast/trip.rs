use super::{Coordinates, Day};
use serde::{Deserialize, Serialize};

/// The complete parsed itinerary.
///
/// Only ever produced by a successful parse: the title is non-empty and there is
/// at least one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub days: Vec<Day>,
}

impl Trip {
    /// Coordinates of every day in document order, i.e. the route polyline.
    pub fn route(&self) -> Vec<Coordinates> {
        self.days.iter().map(|day| day.coordinates).collect()
    }

    /// First day declared with the given number.
    pub fn day(&self, id: u32) -> Option<&Day> {
        self.days.iter().find(|day| day.id == id)
    }
}
