use crate::trip::building::{DayDraft, TripDraft};
use crate::trip::lexing::{classify_front_matter_line, classify_line, FieldName, FieldSyntax, Line};

/// Where body lines currently attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before the first day heading.
    #[default]
    None,
    /// Directly under a day heading: plain lines are narrative.
    DayBody,
    /// After `**Activities:**`: `- ` lines are activities.
    Activities,
}

/// Position relative to the leading `---` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontMatter {
    /// No non-blank line seen yet; a `---` here opens front matter.
    #[default]
    Pending,
    Inside,
    /// Closed, or the document did not start with one.
    Done,
}

/// Fields seen before any day heading. They cannot be attached to a day and are
/// kept only for diagnostics; every day heading clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrphanFields {
    entries: Vec<(FieldName, String)>,
}

impl OrphanFields {
    pub fn record(&mut self, name: FieldName, value: &str) {
        tracing::debug!(field = name.label(), value, "field before any day heading");
        self.entries.push((name, value.to_string()));
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Fold state for one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    draft: TripDraft,
    current: Option<DayDraft>,
    section: Section,
    front_matter: FrontMatter,
    orphans: OrphanFields,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn front_matter(&self) -> FrontMatter {
        self.front_matter
    }

    pub fn current_day(&self) -> Option<&DayDraft> {
        self.current.as_ref()
    }

    pub fn orphan_fields(&self) -> &OrphanFields {
        &self.orphans
    }

    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    /// Process one raw line of the document.
    pub fn step(mut self, raw: &str) -> Self {
        let line = raw.trim();

        if self.front_matter == FrontMatter::Inside {
            self.step_front_matter(line);
            return self;
        }

        let classified = classify_line(line);
        if self.front_matter == FrontMatter::Pending && classified != Line::Blank {
            if classified == Line::FrontMatterDelimiter {
                self.front_matter = FrontMatter::Inside;
                return self;
            }
            self.front_matter = FrontMatter::Done;
        }

        match classified {
            Line::Title(title) => self.draft.title = title.to_string(),
            Line::TripMeta { value, .. } => self.draft.subtitle.push(value),
            Line::DayHeading { number, title } => self.start_day(number, title),
            Line::Field {
                syntax,
                name,
                value,
            } => self.apply_field(syntax, name, value),
            Line::ActivitiesMarker => {
                if self.current.is_some() {
                    self.section = Section::Activities;
                }
            }
            Line::ListItem(item) => {
                if self.section == Section::Activities {
                    if let Some(day) = self.current.as_mut() {
                        day.push_activity(item);
                    }
                }
            }
            Line::Text(text) => {
                if self.section == Section::DayBody {
                    if let Some(day) = self.current.as_mut() {
                        day.push_description(text);
                    }
                }
            }
            // A `---` after the leading block is a horizontal rule.
            Line::FrontMatterDelimiter
            | Line::FrontMatterEntry { .. }
            | Line::Blank
            | Line::Unrecognized(_) => {}
        }
        self
    }

    /// End of input: commit the last day and hand over the draft.
    pub fn finish(mut self) -> TripDraft {
        self.commit_current();
        if !self.orphans.is_empty() {
            tracing::debug!("orphan fields before the first day heading were ignored");
        }
        self.draft
    }

    fn step_front_matter(&mut self, line: &str) {
        match classify_front_matter_line(line) {
            Line::FrontMatterDelimiter => self.front_matter = FrontMatter::Done,
            Line::FrontMatterEntry { key, value } => match key {
                "title" => self.draft.title = unquote(value),
                "subtitle" => self.draft.subtitle.replace(&unquote(value)),
                _ => tracing::trace!(key, "ignoring front matter entry"),
            },
            _ => {}
        }
    }

    fn start_day(&mut self, number: Option<u32>, title: &str) {
        self.commit_current();
        self.orphans.clear();
        let id = number.unwrap_or_else(|| self.draft.next_ordinal());
        self.current = Some(DayDraft::from_heading(id, title));
        self.section = Section::DayBody;
    }

    fn apply_field(&mut self, syntax: FieldSyntax, name: FieldName, value: &str) {
        match self.current.as_mut() {
            Some(day) => {
                if !day.apply_field(syntax, name, value) {
                    tracing::debug!(
                        day = %day.label(),
                        field = name.label(),
                        value,
                        "rejected malformed coordinates"
                    );
                }
            }
            // Legacy fields before any heading are simply unrecognized.
            None if syntax.is_legacy() => {}
            None => self.orphans.record(name, value),
        }
    }

    fn commit_current(&mut self) {
        let Some(day) = self.current.take() else {
            return;
        };
        let label = day.label();
        match day.commit() {
            Some(day) => self.draft.days.push(day),
            None => {
                tracing::debug!(day = %label, "dropping day without valid coordinates");
                self.draft.dropped.push(label);
            }
        }
    }
}

/// Front-matter scalars are YAML: `"quoted"`, `'single ''quoted'''` or plain.
/// Anything that is not a YAML string (numbers, lists, broken quoting) is kept as
/// written.
fn unquote(value: &str) -> String {
    match serde_yaml::from_str::<serde_yaml::Value>(value) {
        Ok(serde_yaml::Value::String(s)) => s,
        _ => value.to_string(),
    }
}
