/// Joins legacy metadata values into one subtitle.
pub const SUBTITLE_SEPARATOR: &str = " • ";

/// Accumulates subtitle parts in the order they appear.
///
/// Legacy `**Duration:**`, `**Dates:**` and `**Type:**` lines append; a
/// front-matter `subtitle:` replaces whatever was accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleBuilder {
    parts: Vec<String>,
}

impl SubtitleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: &str) {
        let part = part.trim();
        if !part.is_empty() {
            self.parts.push(part.to_string());
        }
    }

    pub fn replace(&mut self, subtitle: &str) {
        self.parts.clear();
        self.push(subtitle);
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn build(&self) -> Option<String> {
        (!self.parts.is_empty()).then(|| self.parts.join(SUBTITLE_SEPARATOR))
    }
}
