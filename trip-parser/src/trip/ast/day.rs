use super::Coordinates;
use serde::{Deserialize, Serialize};

/// One stop on the itinerary.
///
/// `id` is the number declared in the `## Day N` heading, taken verbatim, so ids
/// are neither guaranteed contiguous nor sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: u32,
    pub label: String,
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campsite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
    #[serde(default)]
    pub image_hints: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Day {
    /// Display label for a day number, e.g. "Day 3".
    pub fn label_for(id: u32) -> String {
        format!("Day {}", id)
    }

    /// "City, Country", or just the city when no country was given.
    pub fn location(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }

    /// Subjects to source imagery for. Falls back to the city name when the
    /// document listed no image hints.
    pub fn image_queries(&self) -> Vec<&str> {
        if self.image_hints.is_empty() {
            vec![self.city.as_str()]
        } else {
            self.image_hints.iter().map(String::as_str).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(city: &str, country: &str) -> Day {
        Day {
            id: 1,
            label: Day::label_for(1),
            city: city.to_string(),
            country: country.to_string(),
            date: None,
            coordinates: Coordinates::new(0.0, 0.0).unwrap(),
            campsite: None,
            distance_label: None,
            image_hints: Vec::new(),
            description: String::new(),
            activities: Vec::new(),
        }
    }

    #[test]
    fn test_location() {
        assert_eq!(day("Berlin", "Germany").location(), "Berlin, Germany");
        assert_eq!(day("Berlin", "").location(), "Berlin");
    }

    #[test]
    fn test_image_queries_fall_back_to_city() {
        let mut d = day("Bruges", "Belgium");
        assert_eq!(d.image_queries(), vec!["Bruges"]);

        d.image_hints = vec!["Belfry of Bruges".into(), "Rozenhoedkaai".into()];
        assert_eq!(d.image_queries(), vec!["Belfry of Bruges", "Rozenhoedkaai"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut d = day("Bruges", "Belgium");
        d.distance_label = Some("120 km".into());
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["distanceLabel"], "120 km");
        assert!(json.get("imageHints").is_some());
        assert!(json.get("date").is_none());
    }
}
