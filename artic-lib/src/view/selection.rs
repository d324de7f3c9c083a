//! Selected records, keyed by row key.

use std::collections::HashSet;

use crate::model::ArtworkId;
use crate::model::ArtworkRecord;

/// The records currently checked by the user.
///
/// Membership is keyed by [`ArtworkRecord::id`] and does not depend on which
/// page is displayed: records selected on another page stay selected. The set
/// holds its own copies so it survives page turns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    records: Vec<ArtworkRecord>,
    keys: HashSet<ArtworkId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a full selection, keeping first-seen order. A later
    /// record with an already seen id replaces the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = ArtworkRecord>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert(record);
        }
        set
    }

    fn insert(&mut self, record: ArtworkRecord) {
        if self.keys.insert(record.id) {
            self.records.push(record);
        } else if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        }
    }

    /// Check if a key is selected.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.keys.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Selected records in selection order.
    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Selected keys in selection order.
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// Returns the full selection that results from toggling `record`.
    pub fn toggled(&self, record: &ArtworkRecord) -> Vec<ArtworkRecord> {
        if self.contains(record.id) {
            self.records
                .iter()
                .filter(|r| r.id != record.id)
                .cloned()
                .collect()
        } else {
            let mut next = self.records.clone();
            next.push(record.clone());
            next
        }
    }

    /// Returns the full selection after a header-level "select all" on `page`.
    ///
    /// If every row of `page` is already selected they are all removed;
    /// otherwise the missing ones are added. Selections from other pages are
    /// untouched either way.
    pub fn page_toggled(&self, page: &[ArtworkRecord]) -> Vec<ArtworkRecord> {
        if self.all_selected(page) {
            let on_page: HashSet<_> = page.iter().map(|r| r.id).collect();
            self.records
                .iter()
                .filter(|r| !on_page.contains(&r.id))
                .cloned()
                .collect()
        } else {
            let mut next = self.records.clone();
            next.extend(page.iter().filter(|r| !self.contains(r.id)).cloned());
            next
        }
    }

    /// Returns `true` if `page` is non-empty and all of its rows are selected.
    pub fn all_selected(&self, page: &[ArtworkRecord]) -> bool {
        !page.is_empty() && page.iter().all(|r| self.contains(r.id))
    }
}
