use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::collection::{CollectionError, CollectionManager, FieldErrors, IdPolicy, InsertPosition, KindSpec, Record, RecordId};

labelled_enum! {
    NotificationKind {
        Order => "order",
        User => "user",
        Alert => "alert",
        Report => "report",
        Reminder => "reminder",
    }
}

labelled_enum! {
    /// Page a notification leads to when opened.
    NotificationLink {
        Orders => "orders",
        Users => "users",
        Products => "products",
        Charts => "charts",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub link: Option<NotificationLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub link: Option<NotificationLink>,
}

impl NotificationDraft {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            link: None,
        }
    }

    pub fn with_link(mut self, link: NotificationLink) -> Self {
        self.link = Some(link);
        self
    }
}

impl Default for NotificationDraft {
    fn default() -> Self {
        Self::new(NotificationKind::Alert, "", "")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub kind: Option<NotificationKind>,
    pub read: Option<bool>,
    pub link: Option<Option<NotificationLink>>,
}

impl NotificationPatch {
    pub fn read() -> Self {
        Self {
            read: Some(true),
            ..Self::default()
        }
    }
}

impl Record for Notification {
    type Class = NotificationKind;
    type Draft = NotificationDraft;
    type Patch = NotificationPatch;

    const KIND: KindSpec = KindSpec {
        name: "notification",
        required_fields: &["title", "message"],
        searchable_fields: &["title", "message"],
        classification_field: "kind",
        unique_field: None,
        id_policy: IdPolicy::Sequential,
        insert_at: InsertPosition::Front,
    };

    const CLASSES: &'static [NotificationKind] = NotificationKind::ALL;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn classification(&self) -> NotificationKind {
        self.kind
    }

    fn searchable_values(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.title), Cow::Borrowed(&self.message)]
    }

    fn from_draft(id: RecordId, draft: NotificationDraft, now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            message: draft.message.trim().to_string(),
            kind: draft.kind,
            created_at: now,
            read: false,
            link: draft.link,
        })
    }

    fn apply_patch(&mut self, patch: NotificationPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(message) = patch.message {
            self.message = message.trim().to_string();
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(read) = patch.read {
            self.read = read;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("message", &self.message, "Message is required");
        errors.into_result()
    }
}

/// Inbox operations on top of the generic collection.
impl CollectionManager<Notification> {
    pub fn unread_count(&self) -> usize {
        self.records().iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: &RecordId) -> Result<Notification, CollectionError> {
        self.update(id, NotificationPatch::read())
    }

    /// Returns how many notifications changed state.
    pub fn mark_all_read(&mut self) -> usize {
        let unread = self.unread_count();
        self.update_all(|n| n.read = true);
        unread
    }

    /// Mark a notification read and return where it points.
    pub fn open(&mut self, id: &RecordId) -> Result<Option<NotificationLink>, CollectionError> {
        self.mark_read(id).map(|n| n.link)
    }
}
