//! Treeviz formatter for trips
//!
//! One line per node, nesting shown as two spaces per level:
//!
//!     <indentation><icon><space><label>
//!
//! Long narrative labels are truncated to 30 characters.
//!
//! Icons
//!     Trip: ⧉
//!     Subtitle: ⊤
//!     Day: §
//!     Date: ◷
//!     Coordinates: ⌖
//!     Campsite: ⛺
//!     Distance: ↔
//!     Image hints: ◫
//!     Description: ¶
//!     Activities: ☰
//!     Activity: •

use crate::trip::ast::{Day, Trip};

const DESCRIPTION_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn push_node(out: &mut String, depth: usize, icon: &str, label: &str) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(icon);
    out.push(' ');
    out.push_str(label);
    out.push('\n');
}

fn push_day(out: &mut String, day: &Day) {
    push_node(out, 1, "§", &format!("{}: {}", day.label, day.location()));
    if let Some(date) = &day.date {
        push_node(out, 2, "◷", date);
    }
    push_node(out, 2, "⌖", &day.coordinates.to_string());
    if let Some(campsite) = &day.campsite {
        push_node(out, 2, "⛺", campsite);
    }
    if let Some(distance) = &day.distance_label {
        push_node(out, 2, "↔", distance);
    }
    if !day.image_hints.is_empty() {
        push_node(out, 2, "◫", &day.image_hints.join(", "));
    }
    if !day.description.is_empty() {
        push_node(out, 2, "¶", &truncate(&day.description, DESCRIPTION_WIDTH));
    }
    if !day.activities.is_empty() {
        let noun = if day.activities.len() == 1 {
            "activity"
        } else {
            "activities"
        };
        push_node(out, 2, "☰", &format!("{} {}", day.activities.len(), noun));
        for activity in &day.activities {
            push_node(out, 3, "•", activity);
        }
    }
}

pub fn to_treeviz_str(trip: &Trip) -> String {
    let mut out = String::new();
    push_node(&mut out, 0, "⧉", &trip.title);
    if let Some(subtitle) = &trip.subtitle {
        push_node(&mut out, 1, "⊤", subtitle);
    }
    for day in &trip.days {
        push_day(&mut out, day);
    }
    out
}
