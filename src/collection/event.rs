use super::filter::ClassFilter;
use super::record::{Record, RecordId};

/// Input events a collection accepts from its rendering layer.
#[derive(Debug, Clone)]
pub enum CollectionEvent<R: Record> {
    SearchTextChanged(String),
    ClassificationFilterChanged(ClassFilter<R::Class>),
    PageChanged(usize),
    Create(R::Draft),
    Update(RecordId, R::Patch),
    Delete(RecordId),
}

/// What a dispatched event did to the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome<R> {
    /// Filter state changed; the view must be recomputed.
    FilterChanged,
    Created(R),
    Updated(R),
    /// `None` when the identifier was already absent.
    Deleted(Option<R>),
}
