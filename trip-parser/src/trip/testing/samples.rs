use crate::trip::ast::Trip;
use crate::trip::error::TripError;
use crate::trip::parsing::parse_document;

const LEGACY_LOOP: &str = include_str!("../../../samples/legacy-loop.md");
const FRONT_MATTER_COAST: &str = include_str!("../../../samples/front-matter-coast.md");
const MIXED_FORMATS: &str = include_str!("../../../samples/mixed-formats.md");
const PARTIAL_DRAFT: &str = include_str!("../../../samples/partial-draft.md");
const PROMPT_TEMPLATE: &str = include_str!("../../../samples/prompt-template.md");

/// A bundled sample document.
#[derive(Debug, Clone, Copy)]
pub struct Samples {
    name: &'static str,
    source: &'static str,
}

impl Samples {
    /// Legacy bold-label format, four days.
    pub fn legacy_loop() -> Self {
        Self::new("legacy-loop", LEGACY_LOOP)
    }

    /// Front-matter format with list fields and image hints.
    pub fn front_matter_coast() -> Self {
        Self::new("front-matter-coast", FRONT_MATTER_COAST)
    }

    /// Both conventions in one document.
    pub fn mixed_formats() -> Self {
        Self::new("mixed-formats", MIXED_FORMATS)
    }

    /// A half-written itinerary where some days have no coordinates yet.
    pub fn partial_draft() -> Self {
        Self::new("partial-draft", PARTIAL_DRAFT)
    }

    /// Every itinerary sample.
    pub fn all() -> Vec<Self> {
        vec![
            Self::legacy_loop(),
            Self::front_matter_coast(),
            Self::mixed_formats(),
            Self::partial_draft(),
        ]
    }

    /// The companion prompt template (not an itinerary).
    pub fn prompt_template() -> &'static str {
        PROMPT_TEMPLATE
    }

    fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn parse(&self) -> Result<Trip, TripError> {
        parse_document(self.source)
    }
}
