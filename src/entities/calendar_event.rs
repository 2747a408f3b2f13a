use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::collection::{CollectionManager, FieldErrors, IdPolicy, InsertPosition, KindSpec, Record, RecordId};

labelled_enum! {
    EventKind {
        Meeting => "meeting",
        Deadline => "deadline",
        Presentation => "presentation",
        Workshop => "workshop",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    /// Local wall-clock time.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: EventKind,
    pub description: String,
    pub location: String,
    pub attendees: Vec<String>,
}

impl CalendarEvent {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Split a comma-separated list, dropping blanks.
pub fn parse_attendees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: EventKind,
    pub description: String,
    pub location: String,
    pub attendees: Vec<String>,
}

impl Default for CalendarEventDraft {
    fn default() -> Self {
        let start = chrono::Local::now().naive_local();
        Self {
            title: String::new(),
            start,
            end: start + chrono::Duration::hours(1),
            kind: EventKind::Meeting,
            description: String::new(),
            location: String::new(),
            attendees: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarEventPatch {
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub kind: Option<EventKind>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub attendees: Option<Vec<String>>,
}

impl Record for CalendarEvent {
    type Class = EventKind;
    type Draft = CalendarEventDraft;
    type Patch = CalendarEventPatch;

    const KIND: KindSpec = KindSpec {
        name: "event",
        required_fields: &["title", "start", "end"],
        searchable_fields: &["title", "description", "location"],
        classification_field: "kind",
        unique_field: None,
        id_policy: IdPolicy::Sequential,
        insert_at: InsertPosition::Back,
    };

    const CLASSES: &'static [EventKind] = EventKind::ALL;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn classification(&self) -> EventKind {
        self.kind
    }

    fn searchable_values(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(&self.title),
            Cow::Borrowed(&self.description),
            Cow::Borrowed(&self.location),
        ]
    }

    fn from_draft(id: RecordId, draft: CalendarEventDraft, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            start: draft.start,
            end: draft.end,
            kind: draft.kind,
            description: draft.description.trim().to_string(),
            location: draft.location.trim().to_string(),
            attendees: draft.attendees,
        })
    }

    fn apply_patch(&mut self, patch: CalendarEventPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(location) = patch.location {
            self.location = location.trim().to_string();
        }
        if let Some(attendees) = patch.attendees {
            self.attendees = attendees;
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Event title is required");
        if self.end < self.start {
            errors.insert("end", "End must not be before start");
        }
        errors.into_result()
    }
}

impl CollectionManager<CalendarEvent> {
    /// Events starting strictly after `now`, soonest first.
    pub fn upcoming(&self, now: NaiveDateTime, limit: usize) -> Vec<&CalendarEvent> {
        let mut events: Vec<&CalendarEvent> = self.records().iter().filter(|e| e.start > now).collect();
        events.sort_by_key(|e| e.start);
        events.truncate(limit);
        events
    }

    /// Events overlapping the given day, by start time.
    pub fn on_day(&self, day: chrono::NaiveDate) -> Vec<&CalendarEvent> {
        let mut events: Vec<&CalendarEvent> = self
            .records()
            .iter()
            .filter(|e| e.start.date() <= day && e.end.date() >= day)
            .collect();
        events.sort_by_key(|e| e.start);
        events
    }
}
