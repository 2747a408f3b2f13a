use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{initials, Priority};
use crate::collection::{FieldErrors, IdPolicy, InsertPosition, KindSpec, Record, RecordId};

/// A card on the kanban board. `status` holds the id of its column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanTask {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assignees: Vec<String>,
    pub comments: u32,
    pub attachments: u32,
}

impl KanbanTask {
    pub fn assignee_initials(&self) -> Vec<String> {
        self.assignees.iter().map(|name| initials(name)).collect()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KanbanTaskDraft {
    pub title: String,
    pub description: String,
    /// Column the task starts in.
    pub status: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assignees: Vec<String>,
}

impl KanbanTaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for KanbanTaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: String::new(),
            priority: Priority::Medium,
            due_date: None,
            assignees: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KanbanTaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub assignees: Option<Vec<String>>,
}

impl KanbanTaskPatch {
    pub fn move_to(column: impl Into<String>) -> Self {
        Self {
            status: Some(column.into()),
            ..Self::default()
        }
    }
}

impl Record for KanbanTask {
    type Class = Priority;
    type Draft = KanbanTaskDraft;
    type Patch = KanbanTaskPatch;

    const KIND: KindSpec = KindSpec {
        name: "task",
        required_fields: &["title", "status"],
        searchable_fields: &["title", "description"],
        classification_field: "priority",
        unique_field: None,
        id_policy: IdPolicy::Sequential,
        insert_at: InsertPosition::Back,
    };

    const CLASSES: &'static [Priority] = Priority::ALL;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn classification(&self) -> Priority {
        self.priority
    }

    fn searchable_values(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.title), Cow::Borrowed(&self.description)]
    }

    fn from_draft(id: RecordId, draft: KanbanTaskDraft, _now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            assignees: draft.assignees,
            comments: 0,
            attachments: 0,
        })
    }

    fn apply_patch(&mut self, patch: KanbanTaskPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(assignees) = patch.assignees {
            self.assignees = assignees;
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Task title is required");
        errors.require("status", &self.status, "Column is required");
        errors.into_result()
    }
}
