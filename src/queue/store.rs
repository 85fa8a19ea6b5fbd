use std::collections::BTreeSet;

use crate::catalog::{Catalog, Tutorial, TutorialId};
use crate::queue::snapshot::{QueueItem, QueueSnapshot};

/// The canonical ordered queue.
///
/// Owns the catalog and an explicit ordering of queued ids; the ordering
/// diverges from catalog order once commits start promoting items. Every
/// operation referencing a stale or unknown id is a no-op — scheduler
/// events race with user-driven deletes by design, and losing that race
/// is normal, not an error.
pub struct QueueStore {
    catalog: Catalog,
    order: Vec<TutorialId>,
}

impl QueueStore {
    /// Builds the store over a catalog, seeding the queue with every
    /// tutorial flagged as queued, in catalog order.
    pub fn new(catalog: Catalog) -> Self {
        let order = catalog.queued_ids();
        Self { catalog, order }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tutorial(&self, id: TutorialId) -> Option<&Tutorial> {
        self.catalog.tutorial(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_queued(&self, id: TutorialId) -> bool {
        self.order.contains(&id)
    }

    /// Current queue contents in display order.
    pub fn snapshot(&self) -> QueueSnapshot {
        let items = self
            .order
            .iter()
            .filter_map(|&id| self.catalog.tutorial(id))
            .map(|t| QueueItem {
                id: t.id,
                title: t.title.clone(),
                publish_date: t.publish_date,
                update_count: t.update_count,
            })
            .collect();
        QueueSnapshot::new(items)
    }

    /// Dequeues every id in `ids` that is currently queued, clearing its
    /// `is_queued` flag. Returns the ids actually removed.
    pub fn remove(&mut self, ids: &BTreeSet<TutorialId>) -> BTreeSet<TutorialId> {
        let removed: BTreeSet<TutorialId> = ids
            .iter()
            .copied()
            .filter(|id| self.order.contains(id))
            .collect();

        for &id in &removed {
            if let Some(tutorial) = self.catalog.tutorial_mut(id) {
                tutorial.is_queued = false;
            }
        }
        self.order.retain(|id| !removed.contains(id));
        removed
    }

    /// Reorders `id` to sit immediately before `anchor`.
    ///
    /// No-op when `id == anchor` or either id is not queued.
    pub fn move_before(&mut self, id: TutorialId, anchor: TutorialId) {
        if id == anchor {
            return;
        }
        let Some(from) = self.order.iter().position(|&x| x == id) else {
            return;
        };
        if !self.order.contains(&anchor) {
            return;
        }

        self.order.remove(from);
        let to = self
            .order
            .iter()
            .position(|&x| x == anchor)
            .expect("anchor checked above");
        self.order.insert(to, id);
    }

    /// Appends `id` to the back of the queue. No-op if already queued or
    /// unknown to the catalog.
    pub fn enqueue(&mut self, id: TutorialId) {
        if self.order.contains(&id) {
            return;
        }
        if let Some(tutorial) = self.catalog.tutorial_mut(id) {
            tutorial.is_queued = true;
            self.order.push(id);
        }
    }

    /// Dequeues a single id.
    pub fn dequeue(&mut self, id: TutorialId) {
        let single: BTreeSet<TutorialId> = [id].into();
        self.remove(&single);
    }

    /// Sets the pending-update badge counter. Returns false if the id is
    /// not currently queued.
    pub fn set_update_count(&mut self, id: TutorialId, count: u32) -> bool {
        if !self.order.contains(&id) {
            return false;
        }
        match self.catalog.tutorial_mut(id) {
            Some(tutorial) => {
                tutorial.update_count = count;
                true
            }
            None => false,
        }
    }
}
