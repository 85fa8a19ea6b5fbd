use std::collections::BTreeSet;

use crate::catalog::TutorialId;
use crate::queue::store::QueueStore;

/// Multi-select editing state for the queue view.
///
/// Selection is a set of ids, so deleting `{A, B}` in one confirmation
/// and deleting `{A}` then `{B}` in two produce the same store. Ids that
/// left the queue between selection and confirmation are ignored.
#[derive(Debug, Default)]
pub struct SelectionController {
    editing: bool,
    selected: BTreeSet<TutorialId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selected(&self) -> &BTreeSet<TutorialId> {
        &self.selected
    }

    pub fn is_selected(&self, id: TutorialId) -> bool {
        self.selected.contains(&id)
    }

    /// Enters or leaves editing mode. Leaving clears the selection.
    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
        if !self.editing {
            self.selected.clear();
        }
    }

    pub fn select(&mut self, id: TutorialId) {
        self.selected.insert(id);
    }

    pub fn deselect(&mut self, id: TutorialId) {
        self.selected.remove(&id);
    }

    pub fn toggle(&mut self, id: TutorialId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Dequeues every selected id still present in the store and exits
    /// editing mode. Returns the ids actually removed.
    pub fn confirm_delete(&mut self, store: &mut QueueStore) -> BTreeSet<TutorialId> {
        let removed = store.remove(&self.selected);
        self.selected.clear();
        self.editing = false;
        removed
    }
}
