//! The record abstraction every managed collection is built on.
//!
//! A record kind describes itself once through a [`KindSpec`] (required,
//! searchable, classification and unique fields plus its id and insertion
//! policies) and implements [`Record`] to expose those fields to the
//! generic [`CollectionManager`](super::CollectionManager).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::error::FieldErrors;

/// Identifier of a record, unique within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(u64),
    Code(String),
}

impl RecordId {
    /// Numeric sequence carried by the identifier.
    ///
    /// `Int(7)` and `ORD-007` both yield `7`; codes without a numeric
    /// suffix yield `None` and never take part in id allocation.
    pub fn sequence(&self) -> Option<u64> {
        match self {
            RecordId::Int(n) => Some(*n),
            RecordId::Code(code) => code.rsplit('-').next().and_then(|n| n.parse().ok()),
        }
    }

    /// Compare against a raw identifier as received from the front-end.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            RecordId::Int(n) => raw.parse::<u64>().map(|r| r == *n).unwrap_or(false),
            RecordId::Code(code) => code == raw,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Code(code) => f.write_str(code),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Code(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Code(value)
    }
}

/// How new identifiers are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Plain integers: `1`, `2`, `3`, ...
    Sequential,
    /// Prefixed, zero-padded codes such as `ORD-007`.
    Prefixed { prefix: &'static str, width: usize },
}

impl IdPolicy {
    /// Build the identifier for a sequence number.
    pub fn format(self, sequence: u64) -> RecordId {
        match self {
            IdPolicy::Sequential => RecordId::Int(sequence),
            IdPolicy::Prefixed { prefix, width } => RecordId::Code(format!("{prefix}-{sequence:0width$}")),
        }
    }
}

/// Where a freshly created record lands in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Front,
    Back,
}

/// Static description of a record kind.
#[derive(Debug, Clone, Copy)]
pub struct KindSpec {
    /// Singular, lowercase kind name used in messages ("user", "order").
    pub name: &'static str,
    pub required_fields: &'static [&'static str],
    pub searchable_fields: &'static [&'static str],
    pub classification_field: &'static str,
    /// Field that must be unique, compared case-insensitively.
    pub unique_field: Option<&'static str>,
    pub id_policy: IdPolicy,
    pub insert_at: InsertPosition,
}

/// A record that can live in a [`CollectionManager`](super::CollectionManager).
pub trait Record: Clone + fmt::Debug + Serialize {
    /// Enumerated classification used by the category/status filter.
    type Class: Copy + Eq + fmt::Debug + fmt::Display + 'static;
    /// Input for `create`.
    type Draft: Clone + fmt::Debug;
    /// Partial input for `update`; `None` fields are left untouched.
    type Patch: Clone + fmt::Debug + Default;

    const KIND: KindSpec;

    /// Every classification value, in display order.
    const CLASSES: &'static [Self::Class];

    fn id(&self) -> &RecordId;

    fn classification(&self) -> Self::Class;

    /// Values of [`KindSpec::searchable_fields`], in the same order.
    fn searchable_values(&self) -> Vec<Cow<'_, str>>;

    /// Value of [`KindSpec::unique_field`], if the kind has one.
    fn unique_value(&self) -> Option<&str> {
        None
    }

    /// Build a record from a draft.
    ///
    /// Fails only for draft fields the record type cannot represent when
    /// missing (a product without a price); every other rule belongs in
    /// [`Record::validate`].
    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Result<Self, FieldErrors>;

    /// Merge a patch. Must never touch the identifier or creation time.
    fn apply_patch(&mut self, patch: Self::Patch);

    fn validate(&self) -> Result<(), FieldErrors>;

    /// Refresh the update timestamp, for kinds that carry one.
    fn touch(&mut self, _now: DateTime<Utc>) {}

    /// Case-insensitive substring match against the searchable fields.
    fn matches_search(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        let needle = text.to_lowercase();
        self.searchable_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_of_prefixed_code() {
        assert_eq!(RecordId::from("ORD-012").sequence(), Some(12));
        assert_eq!(RecordId::from("draft").sequence(), None);
        assert_eq!(RecordId::Int(4).sequence(), Some(4));
    }

    #[test]
    fn prefixed_policy_pads_to_width() {
        let policy = IdPolicy::Prefixed { prefix: "ORD", width: 3 };
        assert_eq!(policy.format(6), RecordId::from("ORD-006"));
        assert_eq!(policy.format(1234), RecordId::from("ORD-1234"));
        assert_eq!(IdPolicy::Sequential.format(9), RecordId::Int(9));
    }

    #[test]
    fn raw_matching() {
        assert!(RecordId::Int(3).matches("3"));
        assert!(!RecordId::Int(3).matches("03x"));
        assert!(RecordId::from("ORD-001").matches("ORD-001"));
    }
}
