use std::collections::HashSet;

use chrono::NaiveDate;

use crate::catalog::TutorialId;

/// One row of a queue snapshot: the fields the queue view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub id: TutorialId,
    pub title: String,
    pub publish_date: NaiveDate,
    pub update_count: u32,
}

impl QueueItem {
    pub fn has_pending_update(&self) -> bool {
        self.update_count > 0
    }
}

/// An ordered, immutable view of the queue at a point in time.
///
/// Construction asserts identity uniqueness: a duplicate id inside one
/// snapshot means the store is corrupted, and there is no sane way to
/// diff or render it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueSnapshot {
    items: Vec<QueueItem>,
}

impl QueueSnapshot {
    pub fn new(items: Vec<QueueItem>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            assert!(
                seen.insert(item.id),
                "duplicate tutorial id in snapshot: {}",
                item.id
            );
        }
        Self { items }
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    pub fn ids(&self) -> Vec<TutorialId> {
        self.items.iter().map(|i| i.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: TutorialId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn position(&self, id: TutorialId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }
}
