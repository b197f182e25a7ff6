//! Image lookup boundary
//!
//!     Imagery for a day is sourced outside this crate (photo APIs, wiki commons, a
//!     curated table). Lookups are best-effort: they may be slow, rate limited or
//!     return nothing, and an empty result is never an error. This module fixes the
//!     shape of that collaboration:
//!
//!         - [`ImageLookup`] answers one `(hint, country)` query
//!         - [`LookupChain`] tries sources in order, first non-empty answer wins
//!         - [`images_for_day`] runs every query of a day, then falls back to a
//!           placeholder so a gallery always has something to show

mod curated;

pub use curated::CuratedImages;

use crate::trip::ast::Day;
use serde::{Deserialize, Serialize};

/// Shown when no source had anything for a place.
pub const PLACEHOLDER_URL: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='400' height='300'><rect width='100%' height='100%' fill='%23f0f0f0'/></svg>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
    pub caption: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ImageDescriptor {
    pub fn new(url: impl Into<String>, caption: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: caption.into(),
            alt: alt.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn placeholder(place: &str) -> Self {
        Self::new(
            PLACEHOLDER_URL,
            format!("{} - Images not available", place),
            place,
        )
        .with_source("Fallback")
    }
}

/// A source of images for a subject, optionally scoped by country.
pub trait ImageLookup {
    fn lookup(&self, hint: &str, country: &str) -> Vec<ImageDescriptor>;
}

impl<F> ImageLookup for F
where
    F: Fn(&str, &str) -> Vec<ImageDescriptor>,
{
    fn lookup(&self, hint: &str, country: &str) -> Vec<ImageDescriptor> {
        self(hint, country)
    }
}

/// Ordered fallback over several lookups.
#[derive(Default)]
pub struct LookupChain {
    sources: Vec<Box<dyn ImageLookup + Send + Sync>>,
}

impl LookupChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl ImageLookup + Send + Sync + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl ImageLookup for LookupChain {
    fn lookup(&self, hint: &str, country: &str) -> Vec<ImageDescriptor> {
        for (index, source) in self.sources.iter().enumerate() {
            let images = source.lookup(hint, country);
            if !images.is_empty() {
                tracing::debug!(hint, source = index, count = images.len(), "images found");
                return images;
            }
        }
        Vec::new()
    }
}

/// All images for a day's queries, in query order. Falls back to a single
/// placeholder for the city when every query came back empty.
pub fn images_for_day(day: &Day, lookup: &dyn ImageLookup) -> Vec<ImageDescriptor> {
    let images: Vec<ImageDescriptor> = day
        .image_queries()
        .into_iter()
        .flat_map(|hint| lookup.lookup(hint, &day.country))
        .collect();
    if images.is_empty() {
        vec![ImageDescriptor::placeholder(&day.city)]
    } else {
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::parsing::parse_document;

    fn nothing(_: &str, _: &str) -> Vec<ImageDescriptor> {
        Vec::new()
    }

    fn echo(hint: &str, country: &str) -> Vec<ImageDescriptor> {
        vec![ImageDescriptor::new(
            format!("https://img.test/{}", hint),
            format!("{} ({})", hint, country),
            hint,
        )]
    }

    #[test]
    fn test_chain_takes_first_non_empty_source() {
        let chain = LookupChain::new().with(nothing).with(echo);
        let images = chain.lookup("Belfry", "Belgium");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].caption, "Belfry (Belgium)");
    }

    #[test]
    fn test_images_for_day_uses_hints_then_placeholder() {
        let trip = parse_document(
            "# T\n## Day 1: Bruges, Belgium\n- **Coords**: 51.2, 3.2\n- **Images**: Belfry, Canals\n",
        )
        .unwrap();
        let day = &trip.days[0];

        let images = images_for_day(day, &echo);
        let alts: Vec<_> = images.iter().map(|i| i.alt.as_str()).collect();
        assert_eq!(alts, vec!["Belfry", "Canals"]);

        let images = images_for_day(day, &nothing);
        assert_eq!(images, vec![ImageDescriptor::placeholder("Bruges")]);
        assert_eq!(images[0].caption, "Bruges - Images not available");
        assert_eq!(images[0].source.as_deref(), Some("Fallback"));
    }
}
