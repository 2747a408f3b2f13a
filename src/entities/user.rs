use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{initials, is_valid_email};
use crate::collection::{FieldErrors, IdPolicy, InsertPosition, KindSpec, Record, RecordId};

labelled_enum! {
    /// Access level of a dashboard user.
    UserRole {
        Admin => "Admin",
        Editor => "Editor",
        User => "User",
    }
}

labelled_enum! {
    UserStatus {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Creation date, never changed afterwards.
    pub joined_on: NaiveDate,
    /// `None` until the user logs in for the first time.
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Avatar initials, recomputed from the current name.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::User,
            status: UserStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl Record for User {
    type Class = UserStatus;
    type Draft = UserDraft;
    type Patch = UserPatch;

    const KIND: KindSpec = KindSpec {
        name: "user",
        required_fields: &["name", "email"],
        searchable_fields: &["name", "email"],
        classification_field: "status",
        unique_field: Some("email"),
        id_policy: IdPolicy::Sequential,
        insert_at: InsertPosition::Back,
    };

    const CLASSES: &'static [UserStatus] = UserStatus::ALL;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn classification(&self) -> UserStatus {
        self.status
    }

    fn searchable_values(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name), Cow::Borrowed(&self.email)]
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn from_draft(id: RecordId, draft: UserDraft, now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            role: draft.role,
            status: draft.status,
            joined_on: now.date_naive(),
            last_login: None,
        })
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            self.email = email.trim().to_string();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Full name is required");
        errors.require("email", &self.email, "Email address is required");
        if !errors.contains("email") && !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email address");
        }
        errors.into_result()
    }
}
