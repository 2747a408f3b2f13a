//! Generic client-side collection management.
//!
//! Users, orders, products, notifications and calendar events all share one
//! pattern: an owned, ordered sequence of records plus a transient filter
//! state (search text, classification filter, current page) from which a
//! paginated view is derived. [`CollectionManager`] implements that pattern
//! once, parameterised by the record kind's [`KindSpec`].
//!
//! Mutations are synchronous and validated up front: a failed `create` or
//! `update` leaves the collection untouched.

pub mod error;
pub mod event;
pub mod filter;
pub mod record;
pub mod view;

pub use error::{CollectionError, FieldErrors};
pub use event::{CollectionEvent, EventOutcome};
pub use filter::{ClassFilter, FilterState};
pub use record::{IdPolicy, InsertPosition, KindSpec, Record, RecordId};
pub use view::CollectionView;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use crate::constants::PAGE_SIZE;

/// Owns one collection of records and its filter state.
#[derive(Debug, Clone)]
pub struct CollectionManager<R: Record> {
    records: Vec<R>,
    filter: FilterState<R::Class>,
    /// Highest sequence ever issued or seeded; ids are never reused.
    highest_sequence: u64,
}

impl<R: Record> CollectionManager<R> {
    /// Create a manager around seed data.
    pub fn new(seed: Vec<R>) -> Self {
        let highest_sequence = seed.iter().filter_map(|r| r.id().sequence()).max().unwrap_or(0);
        Self {
            records: seed,
            filter: FilterState::default(),
            highest_sequence,
        }
    }

    pub fn kind(&self) -> &'static str {
        R::KIND.name
    }

    /// The full collection, in display order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn filter_state(&self) -> &FilterState<R::Class> {
        &self.filter
    }

    pub fn create(&mut self, draft: R::Draft) -> Result<R, CollectionError> {
        self.create_at(draft, Utc::now())
    }

    /// Validate and insert a new record, stamping it with `now`.
    pub fn create_at(&mut self, draft: R::Draft, now: DateTime<Utc>) -> Result<R, CollectionError> {
        let sequence = self.next_sequence();
        let id = R::KIND.id_policy.format(sequence);

        let record = R::from_draft(id, draft, now)?;
        record.validate()?;
        self.ensure_unique(&record, None)?;

        self.highest_sequence = sequence;
        match R::KIND.insert_at {
            InsertPosition::Front => self.records.insert(0, record.clone()),
            InsertPosition::Back => self.records.push(record.clone()),
        }
        log::info!("{}: created {}", R::KIND.name, record.id());
        Ok(record)
    }

    pub fn update(&mut self, id: &RecordId, patch: R::Patch) -> Result<R, CollectionError> {
        self.update_at(id, patch, Utc::now())
    }

    /// Merge `patch` into the record `id`, refreshing its update timestamp.
    pub fn update_at(&mut self, id: &RecordId, patch: R::Patch, now: DateTime<Utc>) -> Result<R, CollectionError> {
        let index = self.position(id).ok_or_else(|| CollectionError::NotFound {
            kind: R::KIND.name,
            id: id.clone(),
        })?;

        let mut candidate = self.records[index].clone();
        candidate.apply_patch(patch);
        candidate.validate()?;
        self.ensure_unique(&candidate, Some(id))?;
        candidate.touch(now);

        self.records[index] = candidate.clone();
        log::info!("{}: updated {}", R::KIND.name, id);
        // The edit may have moved the record out of the current filter
        self.clamp_current_page();
        Ok(candidate)
    }

    /// Remove a record. Deleting an absent id is a no-op.
    ///
    /// The current page is clamped afterwards so the view never lands past
    /// the last page.
    pub fn delete(&mut self, id: &RecordId) -> Option<R> {
        let removed = self.position(id).map(|index| self.records.remove(index));
        match &removed {
            Some(_) => log::info!("{}: deleted {}", R::KIND.name, id),
            None => log::debug!("{}: delete of missing id {} ignored", R::KIND.name, id),
        }
        self.clamp_current_page();
        removed
    }

    /// Set the search text and go back to the first page.
    pub fn search(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        self.filter.current_page = 1;
    }

    /// Set the classification filter and go back to the first page.
    pub fn set_classification_filter(&mut self, filter: ClassFilter<R::Class>) {
        self.filter.class_filter = filter;
        self.filter.current_page = 1;
    }

    /// Advance the classification filter to the next value.
    pub fn cycle_classification_filter(&mut self) -> ClassFilter<R::Class> {
        let next = self.filter.class_filter.cycle(R::CLASSES);
        self.set_classification_filter(next);
        next
    }

    /// Jump to `page`, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.filter.current_page = view::clamp_page(page, self.matching_count(), PAGE_SIZE);
        self.filter.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.filter.current_page + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.filter.current_page.saturating_sub(1))
    }

    /// Put back a previously captured filter state.
    pub fn restore_filter(&mut self, filter: FilterState<R::Class>) {
        self.filter = filter;
        self.clamp_current_page();
    }

    /// Every record matching the current search and classification filter.
    pub fn matches(&self) -> Vec<&R> {
        self.records.iter().filter(|r| self.is_match(r)).collect()
    }

    pub fn matching_count(&self) -> usize {
        self.records.iter().filter(|r| self.is_match(r)).count()
    }

    /// The current page of matches.
    pub fn view(&self) -> CollectionView<'_, R> {
        let matches = self.matches();
        let total_matches = matches.len();
        let (start, end) = view::page_bounds(self.filter.current_page, total_matches, PAGE_SIZE);
        CollectionView {
            items: matches[start..end].to_vec(),
            total_matches,
            total_pages: view::total_pages(total_matches, PAGE_SIZE),
            current_page: self.filter.current_page,
        }
    }

    /// Number of records per classification value, over the whole collection.
    pub fn counts_by_class(&self) -> Vec<(R::Class, usize)> {
        R::CLASSES
            .iter()
            .map(|class| {
                let count = self.records.iter().filter(|r| r.classification() == *class).count();
                (*class, count)
            })
            .collect()
    }

    pub fn count_of(&self, class: R::Class) -> usize {
        self.records.iter().filter(|r| r.classification() == class).count()
    }

    /// Apply `f` to every record. Returns how many records were visited.
    pub fn update_all(&mut self, mut f: impl FnMut(&mut R)) -> usize {
        let now = Utc::now();
        for record in &mut self.records {
            f(record);
            record.touch(now);
        }
        self.clamp_current_page();
        self.records.len()
    }

    /// Drop every record. Identifiers already issued stay retired.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.filter.current_page = 1;
        log::info!("{}: cleared {} records", R::KIND.name, removed);
        removed
    }

    /// Handle one input event from the rendering layer.
    pub fn dispatch(&mut self, event: CollectionEvent<R>) -> Result<EventOutcome<R>, CollectionError> {
        match event {
            CollectionEvent::SearchTextChanged(text) => {
                self.search(text);
                Ok(EventOutcome::FilterChanged)
            }
            CollectionEvent::ClassificationFilterChanged(filter) => {
                self.set_classification_filter(filter);
                Ok(EventOutcome::FilterChanged)
            }
            CollectionEvent::PageChanged(page) => {
                self.set_page(page);
                Ok(EventOutcome::FilterChanged)
            }
            CollectionEvent::Create(draft) => self.create(draft).map(EventOutcome::Created),
            CollectionEvent::Update(id, patch) => self.update(&id, patch).map(EventOutcome::Updated),
            CollectionEvent::Delete(id) => Ok(EventOutcome::Deleted(self.delete(&id))),
        }
    }

    /// Write the current matches to `path` as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<usize> {
        let matches = self.matches();
        let json = serde_json::to_string_pretty(&matches)
            .with_context(|| format!("Failed to serialize {} records", R::KIND.name))?;
        std::fs::write(path, json).with_context(|| format!("Failed to write export file: {}", path.display()))?;
        log::info!("{}: exported {} records to {}", R::KIND.name, matches.len(), path.display());
        Ok(matches.len())
    }

    fn is_match(&self, record: &R) -> bool {
        self.filter.class_filter.matches(record.classification()) && record.matches_search(&self.filter.search_text)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn next_sequence(&self) -> u64 {
        let existing = self.records.iter().filter_map(|r| r.id().sequence()).max().unwrap_or(0);
        self.highest_sequence.max(existing) + 1
    }

    fn clamp_current_page(&mut self) {
        self.filter.current_page = view::clamp_page(self.filter.current_page, self.matching_count(), PAGE_SIZE);
    }

    fn ensure_unique(&self, candidate: &R, exclude: Option<&RecordId>) -> Result<(), CollectionError> {
        let Some(value) = candidate.unique_value() else {
            return Ok(());
        };
        let needle = value.to_lowercase();
        let clash = self.records.iter().any(|r| {
            Some(r.id()) != exclude && r.unique_value().is_some_and(|other| other.to_lowercase() == needle)
        });
        if clash {
            return Err(CollectionError::Duplicate {
                kind: R::KIND.name,
                field: R::KIND.unique_field.unwrap_or("value"),
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

impl<R: Record> Default for CollectionManager<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
