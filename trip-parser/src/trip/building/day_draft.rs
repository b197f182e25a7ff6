use crate::trip::ast::{Coordinates, Day};
use crate::trip::lexing::{FieldName, FieldSyntax};

/// Split `"City, Country"` on the first comma. Without a comma the whole text is
/// the city and the country is empty.
pub fn split_location(text: &str) -> (String, String) {
    match text.split_once(',') {
        Some((city, country)) => (city.trim().to_string(), country.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A day under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDraft {
    pub id: u32,
    pub city: String,
    pub country: String,
    pub date: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub campsite: Option<String>,
    pub distance_label: Option<String>,
    pub image_hints: Vec<String>,
    pub description: String,
    pub activities: Vec<String>,
}

impl DayDraft {
    /// Start a day from its heading. `title` is the text after the heading's colon.
    pub fn from_heading(id: u32, title: &str) -> Self {
        let (city, country) = split_location(title);
        Self {
            id,
            city,
            country,
            date: None,
            coordinates: None,
            campsite: None,
            distance_label: None,
            image_hints: Vec::new(),
            description: String::new(),
            activities: Vec::new(),
        }
    }

    pub fn label(&self) -> String {
        Day::label_for(self.id)
    }

    /// Apply one field value.
    ///
    /// Returns `false` when the value was rejected (currently only malformed
    /// coordinates, which leave any earlier valid pair in place).
    pub fn apply_field(&mut self, syntax: FieldSyntax, name: FieldName, value: &str) -> bool {
        match name {
            FieldName::Location => self.apply_location(value),
            FieldName::Coords | FieldName::Coordinates => match Coordinates::parse_pair(value) {
                Some(coordinates) => self.coordinates = Some(coordinates),
                None => return false,
            },
            FieldName::Camping => self.campsite = non_empty(value),
            FieldName::Distance => self.distance_label = non_empty(value),
            FieldName::Date => self.date = non_empty(value),
            // List notes always replace the narrative, even when empty; legacy
            // notes only when they say something.
            FieldName::Notes if syntax.is_legacy() => {
                if let Some(notes) = non_empty(value) {
                    self.description = notes;
                }
            }
            FieldName::Notes => self.description = value.trim().to_string(),
            FieldName::Images => self.image_hints = parse_image_hints(value),
        }
        true
    }

    /// An explicit location overrides the heading. A value without a comma only
    /// replaces the city.
    fn apply_location(&mut self, value: &str) {
        match value.split_once(',') {
            Some(_) => (self.city, self.country) = split_location(value),
            None => self.city = value.trim().to_string(),
        }
    }

    /// Append a narrative line, space separated.
    pub fn push_description(&mut self, line: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(line);
    }

    pub fn push_activity(&mut self, activity: &str) {
        self.activities.push(activity.to_string());
    }

    /// Finalize into a [`Day`]. Days without coordinates commit to nothing.
    pub fn commit(self) -> Option<Day> {
        let coordinates = self.coordinates?;
        Some(Day {
            id: self.id,
            label: Day::label_for(self.id),
            city: self.city,
            country: self.country,
            date: self.date,
            coordinates,
            campsite: self.campsite,
            distance_label: self.distance_label,
            image_hints: self.image_hints,
            description: self.description,
            activities: self.activities,
        })
    }
}

fn parse_image_hints(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|hint| !hint.is_empty())
        .map(str::to_string)
        .collect()
}
