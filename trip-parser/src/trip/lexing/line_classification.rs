//! Line Classification
//!
//! Lines are classified by an ordered rule table. Each rule is a (name, classifier)
//! pair and the first classifier that accepts the line wins, so the order encodes the
//! format's precedence:
//!
//! 1. blank - empty after trimming
//! 2. front_matter_delimiter - exactly `---`
//! 3. title - `# Title`
//! 4. trip_meta - `**Duration:**`, `**Dates:**`, `**Type:**` (bare only)
//! 5. day_heading - `## Day N: City, Country`
//! 6. list_field - `- **Name**: value` (front-matter era syntax)
//! 7. bold_field - `**Name:** value` or `- **Name:** value` (legacy syntax)
//! 8. activities_marker - `**Activities:**`
//! 9. list_item - `- text`
//! 10. text - anything not starting with a bold or list marker
//!
//! Lines no rule accepts are [`Line::Unrecognized`] and get ignored downstream.

use once_cell::sync::Lazy;
use regex::Regex;

/// `- **Name**: value`, colon outside the bold markers.
static LIST_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-\s+\*\*(?P<name>[A-Za-z]+)\*\*:\s*(?P<value>.*)$").unwrap()
});

/// `**Name:** value` with an optional `- ` prefix, colon inside the bold markers.
static BOLD_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<list>-\s+)?\*\*(?P<name>[A-Za-z]+):\*\*\s*(?P<value>.*)$").unwrap()
});

/// `## Day 12: rest` — number and title are both optional.
static DAY_HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^## Day (?P<number>\d+)?(?P<rest>.*)$").unwrap());

/// `key: value` inside front matter.
static FRONT_MATTER_ENTRY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<key>[A-Za-z_][A-Za-z0-9_-]*)\s*:\s*(?P<value>.*)$").unwrap());

/// A single classified line, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    FrontMatterDelimiter,
    FrontMatterEntry {
        key: &'a str,
        value: &'a str,
    },
    Title(&'a str),
    TripMeta {
        field: TripMetaField,
        value: &'a str,
    },
    /// `number` is `None` when the heading has no usable positive number.
    /// `title` is whatever follows the first colon, trimmed.
    DayHeading {
        number: Option<u32>,
        title: &'a str,
    },
    Field {
        syntax: FieldSyntax,
        name: FieldName,
        value: &'a str,
    },
    ActivitiesMarker,
    ListItem(&'a str),
    Text(&'a str),
    Unrecognized(&'a str),
}

/// Legacy trip-level metadata, each appended to the subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripMetaField {
    Duration,
    Dates,
    Type,
}

/// How a field line was spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSyntax {
    /// `- **Name**: value`
    List,
    /// `**Name:** value`
    Bold,
    /// `- **Name:** value`
    BoldList,
}

impl FieldSyntax {
    /// Legacy fields only apply once a day heading has been seen.
    pub fn is_legacy(&self) -> bool {
        matches!(self, FieldSyntax::Bold | FieldSyntax::BoldList)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Location,
    Coords,
    Coordinates,
    Camping,
    Distance,
    Date,
    Notes,
    Images,
}

impl FieldName {
    pub fn from_label(label: &str) -> Option<Self> {
        let name = match label {
            "Location" => FieldName::Location,
            "Coords" => FieldName::Coords,
            "Coordinates" => FieldName::Coordinates,
            "Camping" => FieldName::Camping,
            "Distance" => FieldName::Distance,
            "Date" => FieldName::Date,
            "Notes" => FieldName::Notes,
            "Images" => FieldName::Images,
            _ => return None,
        };
        Some(name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Location => "Location",
            FieldName::Coords => "Coords",
            FieldName::Coordinates => "Coordinates",
            FieldName::Camping => "Camping",
            FieldName::Distance => "Distance",
            FieldName::Date => "Date",
            FieldName::Notes => "Notes",
            FieldName::Images => "Images",
        }
    }

    /// Which field names each syntax knows about. The location field only exists
    /// in list syntax; dates and distances only in the bold legacy syntax.
    pub fn accepts(&self, syntax: FieldSyntax) -> bool {
        match syntax {
            FieldSyntax::List => matches!(
                self,
                FieldName::Location
                    | FieldName::Coords
                    | FieldName::Camping
                    | FieldName::Notes
                    | FieldName::Images
            ),
            FieldSyntax::Bold | FieldSyntax::BoldList => !matches!(self, FieldName::Location),
        }
    }
}

type Classifier = for<'a> fn(&'a str) -> Option<Line<'a>>;

/// Classification rules in precedence order.
pub const LINE_RULES: &[(&str, Classifier)] = &[
    ("blank", classify_blank),
    ("front_matter_delimiter", classify_delimiter),
    ("title", classify_title),
    ("trip_meta", classify_trip_meta),
    ("day_heading", classify_day_heading),
    ("list_field", classify_list_field),
    ("bold_field", classify_bold_field),
    ("activities_marker", classify_activities_marker),
    ("list_item", classify_list_item),
    ("text", classify_text),
];

/// Classify one line of body text. The line should already be trimmed.
pub fn classify_line(line: &str) -> Line<'_> {
    for (name, classifier) in LINE_RULES {
        if let Some(classified) = classifier(line) {
            tracing::trace!(rule = name, line, "classified line");
            return classified;
        }
    }
    Line::Unrecognized(line)
}

/// Classify one line inside a front-matter block.
pub fn classify_front_matter_line(line: &str) -> Line<'_> {
    if let Some(delimiter) = classify_blank(line).or_else(|| classify_delimiter(line)) {
        return delimiter;
    }
    match FRONT_MATTER_ENTRY_REGEX.captures(line) {
        Some(caps) => Line::FrontMatterEntry {
            key: caps.name("key").map_or("", |m| m.as_str()),
            value: caps.name("value").map_or("", |m| m.as_str().trim()),
        },
        None => Line::Unrecognized(line),
    }
}

fn classify_blank(line: &str) -> Option<Line<'_>> {
    line.is_empty().then_some(Line::Blank)
}

fn classify_delimiter(line: &str) -> Option<Line<'_>> {
    (line == "---").then_some(Line::FrontMatterDelimiter)
}

fn classify_title(line: &str) -> Option<Line<'_>> {
    line.strip_prefix("# ").map(|title| Line::Title(title.trim()))
}

fn classify_trip_meta(line: &str) -> Option<Line<'_>> {
    const PREFIXES: &[(&str, TripMetaField)] = &[
        ("**Duration:**", TripMetaField::Duration),
        ("**Dates:**", TripMetaField::Dates),
        ("**Type:**", TripMetaField::Type),
    ];
    PREFIXES.iter().find_map(|(prefix, field)| {
        line.strip_prefix(prefix).map(|value| Line::TripMeta {
            field: *field,
            value: value.trim(),
        })
    })
}

fn classify_day_heading(line: &str) -> Option<Line<'_>> {
    let caps = DAY_HEADING_REGEX.captures(line)?;
    let number = caps
        .name("number")
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0);
    let title = caps
        .name("rest")
        .and_then(|m| m.as_str().split_once(':'))
        .map_or("", |(_, title)| title.trim());
    Some(Line::DayHeading { number, title })
}

fn classify_list_field(line: &str) -> Option<Line<'_>> {
    let caps = LIST_FIELD_REGEX.captures(line)?;
    let name = caps.name("name").and_then(|m| FieldName::from_label(m.as_str()))?;
    if !name.accepts(FieldSyntax::List) {
        return None;
    }
    Some(Line::Field {
        syntax: FieldSyntax::List,
        name,
        value: caps.name("value").map_or("", |m| m.as_str().trim()),
    })
}

fn classify_bold_field(line: &str) -> Option<Line<'_>> {
    let caps = BOLD_FIELD_REGEX.captures(line)?;
    let syntax = if caps.name("list").is_some() {
        FieldSyntax::BoldList
    } else {
        FieldSyntax::Bold
    };
    let name = caps.name("name").and_then(|m| FieldName::from_label(m.as_str()))?;
    if !name.accepts(syntax) {
        return None;
    }
    Some(Line::Field {
        syntax,
        name,
        value: caps.name("value").map_or("", |m| m.as_str().trim()),
    })
}

fn classify_activities_marker(line: &str) -> Option<Line<'_>> {
    line.starts_with("**Activities:**")
        .then_some(Line::ActivitiesMarker)
}

fn classify_list_item(line: &str) -> Option<Line<'_>> {
    line.strip_prefix("- ").map(|item| Line::ListItem(item.trim()))
}

fn classify_text(line: &str) -> Option<Line<'_>> {
    (!line.starts_with("**") && !line.starts_with('-')).then_some(Line::Text(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_title_and_meta() {
        assert_eq!(classify_line("# Berlin Loop"), Line::Title("Berlin Loop"));
        assert_eq!(
            classify_line("**Dates:** Jul 18-24"),
            Line::TripMeta {
                field: TripMetaField::Dates,
                value: "Jul 18-24"
            }
        );
    }

    #[test]
    fn test_classify_day_heading() {
        assert_eq!(
            classify_line("## Day 3: Bruges, Belgium"),
            Line::DayHeading {
                number: Some(3),
                title: "Bruges, Belgium"
            }
        );
        assert_eq!(
            classify_line("## Day 0"),
            Line::DayHeading {
                number: None,
                title: ""
            }
        );
        assert_eq!(
            classify_line("## Day one: Paris: Left Bank"),
            Line::DayHeading {
                number: None,
                title: "Paris: Left Bank"
            }
        );
    }

    #[test]
    fn test_field_syntaxes_are_distinguished() {
        assert_eq!(
            classify_line("- **Coords**: 49.27, -0.70"),
            Line::Field {
                syntax: FieldSyntax::List,
                name: FieldName::Coords,
                value: "49.27, -0.70"
            }
        );
        assert_eq!(
            classify_line("- **Coords:** 49.27, -0.70"),
            Line::Field {
                syntax: FieldSyntax::BoldList,
                name: FieldName::Coords,
                value: "49.27, -0.70"
            }
        );
        assert_eq!(
            classify_line("**Coordinates:** 49.27, -0.70"),
            Line::Field {
                syntax: FieldSyntax::Bold,
                name: FieldName::Coordinates,
                value: "49.27, -0.70"
            }
        );
    }

    #[test]
    fn test_syntax_restricts_field_names() {
        // Location has no legacy spelling, Distance has no list spelling.
        assert_eq!(
            classify_line("**Location:** Paris"),
            Line::Unrecognized("**Location:** Paris")
        );
        assert_eq!(
            classify_line("- **Distance**: 40 km"),
            Line::ListItem("**Distance**: 40 km")
        );
    }

    #[test]
    fn test_unknown_fields_fall_through() {
        assert_eq!(
            classify_line("- **Budget**: 40 EUR"),
            Line::ListItem("**Budget**: 40 EUR")
        );
        assert_eq!(
            classify_line("**Highlights:** canals"),
            Line::Unrecognized("**Highlights:** canals")
        );
    }

    #[test]
    fn test_activities_marker_and_text() {
        assert_eq!(classify_line("**Activities:**"), Line::ActivitiesMarker);
        assert_eq!(classify_line("- Unpack"), Line::ListItem("Unpack"));
        assert_eq!(classify_line("Arrival day."), Line::Text("Arrival day."));
        assert_eq!(classify_line("-dash"), Line::Unrecognized("-dash"));
        assert_eq!(classify_line(""), Line::Blank);
        assert_eq!(classify_line("---"), Line::FrontMatterDelimiter);
    }

    #[test]
    fn test_classify_front_matter_line() {
        assert_eq!(
            classify_front_matter_line("title: \"Normandy Coast\""),
            Line::FrontMatterEntry {
                key: "title",
                value: "\"Normandy Coast\""
            }
        );
        assert_eq!(
            classify_front_matter_line("---"),
            Line::FrontMatterDelimiter
        );
        assert_eq!(
            classify_front_matter_line("# not a title here"),
            Line::Unrecognized("# not a title here")
        );
    }
}
