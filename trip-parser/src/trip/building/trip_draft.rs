use super::SubtitleBuilder;
use crate::trip::ast::Day;

/// Everything the scan produced, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripDraft {
    pub title: String,
    pub subtitle: SubtitleBuilder,
    pub days: Vec<Day>,
    /// Labels of days dropped for lacking valid coordinates, in document order.
    pub dropped: Vec<String>,
}

impl TripDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordinal for a heading that declared no usable number.
    pub fn next_ordinal(&self) -> u32 {
        u32::try_from(self.days.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }
}
