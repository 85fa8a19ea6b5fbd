use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Tutorial;
use crate::queue::{reconciler, scheduler, QueueSnapshot, QueueStore, SelectionController};
use crate::ui::detail::{DetailDialogState, DetailIntent, DetailReducer};
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    Library,
    Queue,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Whole-app state: the store, both tab cursors, editing selection, the
/// detail dialog, and the last rendered queue snapshot.
///
/// Every mutation runs here, on the event loop thread — scheduler events
/// and key handling alike — so the store has exactly one writer.
pub struct App {
    should_quit: bool,
    tab: Tab,
    store: QueueStore,
    selection: SelectionController,
    /// Queue snapshot the view currently shows; [`Self::sync_displayed`]
    /// reconciles it after each mutation.
    displayed: QueueSnapshot,
    library_cursor: usize,
    queue_cursor: usize,
    detail: DetailDialogState,
    rng: StdRng,
}

impl App {
    pub fn new(store: QueueStore) -> Self {
        let displayed = store.snapshot();
        Self {
            should_quit: false,
            tab: Tab::Library,
            store,
            selection: SelectionController::new(),
            displayed,
            library_cursor: 0,
            queue_cursor: 0,
            detail: DetailDialogState::Hidden,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {}

    // -- Tabs --

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Library => Tab::Queue,
            Tab::Queue => Tab::Library,
        };
    }

    // -- Read access for the views --

    pub fn store(&self) -> &QueueStore {
        &self.store
    }

    pub fn displayed(&self) -> &QueueSnapshot {
        &self.displayed
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn detail(&self) -> &DetailDialogState {
        &self.detail
    }

    pub fn queue_cursor(&self) -> usize {
        self.queue_cursor
    }

    pub fn library_cursor(&self) -> usize {
        self.library_cursor
    }

    /// All catalog tutorials flattened in display order; the library
    /// cursor indexes into this list.
    pub fn library_items(&self) -> Vec<&Tutorial> {
        self.store
            .catalog()
            .collections()
            .iter()
            .flat_map(|c| c.tutorials.iter())
            .collect()
    }

    // -- Cursor movement --

    pub fn move_library_cursor(&mut self, delta: i64) {
        let count = self.library_items().len();
        self.library_cursor = step(self.library_cursor, delta, count);
    }

    pub fn move_queue_cursor(&mut self, delta: i64) {
        let count = self.displayed.len();
        self.queue_cursor = step(self.queue_cursor, delta, count);
    }

    // -- Update simulation (tick + commit share these with the keys) --

    pub fn on_update_tick(&mut self) {
        scheduler::mark_random_pending(&mut self.store, &mut self.rng);
        self.sync_displayed();
    }

    pub fn on_apply_updates(&mut self) {
        scheduler::commit_pending(&mut self.store);
        self.sync_displayed();
    }

    // -- Queue editing --

    pub fn toggle_queue_editing(&mut self) {
        self.selection.toggle_editing();
    }

    pub fn exit_queue_editing(&mut self) {
        if self.selection.is_editing() {
            self.selection.toggle_editing();
        }
    }

    pub fn toggle_select_current(&mut self) {
        if !self.selection.is_editing() {
            return;
        }
        if let Some(item) = self.displayed.items().get(self.queue_cursor) {
            self.selection.toggle(item.id);
        }
    }

    pub fn delete_selected(&mut self) {
        let removed = self.selection.confirm_delete(&mut self.store);
        if !removed.is_empty() {
            tracing::info!(count = removed.len(), "dequeued selected tutorials");
        }
        self.sync_displayed();
    }

    // -- Detail dialog --

    pub fn detail_visible(&self) -> bool {
        self.detail.is_visible()
    }

    /// Opens the detail dialog for whatever the active tab's cursor
    /// points at.
    pub fn open_detail_selected(&mut self) {
        let id = match self.tab {
            Tab::Library => self
                .library_items()
                .get(self.library_cursor)
                .map(|t| t.id),
            Tab::Queue => self
                .displayed
                .items()
                .get(self.queue_cursor)
                .map(|item| item.id),
        };
        if let Some(tutorial) = id {
            dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Open { tutorial });
        }
    }

    pub fn close_detail(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::Close);
    }

    pub fn detail_scroll_up(&mut self) {
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::ScrollUp);
    }

    pub fn detail_scroll_down(&mut self) {
        let limit = self.detail_scroll_limit();
        dispatch_mvi!(self, detail, DetailReducer, DetailIntent::ScrollDown { limit });
    }

    /// Toggles the displayed tutorial in or out of the queue.
    pub fn toggle_detail_queued(&mut self) {
        let Some(id) = self.detail.tutorial() else {
            return;
        };
        if self.store.is_queued(id) {
            self.store.dequeue(id);
        } else {
            self.store.enqueue(id);
        }
        self.sync_displayed();
    }

    fn detail_scroll_limit(&self) -> usize {
        let Some(id) = self.detail.tutorial() else {
            return 0;
        };
        let Some(tutorial) = self.store.tutorial(id) else {
            return 0;
        };
        let content_lines: usize = tutorial
            .content
            .iter()
            .map(|s| 1 + s.videos.len())
            .sum();
        content_lines.saturating_sub(1)
    }

    /// Reconciles the displayed snapshot with the store.
    ///
    /// The diff drives logging and keeps the cursor pinned to the row it
    /// was on; the debug assertion checks the reconciler round-trip law
    /// against live data.
    fn sync_displayed(&mut self) {
        let next = self.store.snapshot();
        let ops = reconciler::diff(&self.displayed, &next);
        if !ops.is_empty() {
            tracing::debug!(?ops, "queue view reconciled");
            debug_assert_eq!(reconciler::apply(&self.displayed.ids(), &ops), next.ids());

            if let Some(item) = self.displayed.items().get(self.queue_cursor) {
                if let Some(position) = next.position(item.id) {
                    self.queue_cursor = position;
                }
            }
        }
        self.queue_cursor = self.queue_cursor.min(next.len().saturating_sub(1));
        self.displayed = next;
    }
}

fn step(cursor: usize, delta: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let moved = cursor as i64 + delta;
    moved.clamp(0, count as i64 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, TutorialCollection, TutorialId};
    use chrono::NaiveDate;

    fn app_with(titles: &[(&str, bool)]) -> App {
        let tutorials = titles
            .iter()
            .map(|&(title, queued)| Tutorial {
                id: TutorialId::random(),
                title: title.to_string(),
                publish_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                artwork_color: "#DA7756".to_string(),
                is_queued: queued,
                update_count: 0,
                content: Vec::new(),
            })
            .collect();
        App::new(QueueStore::new(Catalog::new(vec![TutorialCollection {
            title: "all".to_string(),
            tutorials,
        }])))
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app_with(&[("a", true), ("b", true)]);
        app.move_queue_cursor(5);
        assert_eq!(app.queue_cursor(), 1);
        app.move_queue_cursor(-5);
        assert_eq!(app.queue_cursor(), 0);
    }

    #[test]
    fn tab_cycles() {
        let mut app = app_with(&[("a", true)]);
        assert_eq!(app.tab(), Tab::Library);
        app.next_tab();
        assert_eq!(app.tab(), Tab::Queue);
        app.next_tab();
        assert_eq!(app.tab(), Tab::Library);
    }

    #[test]
    fn queue_cursor_follows_its_row_across_promotions() {
        let mut app = app_with(&[("a", true), ("b", true), ("c", true), ("d", true)]);
        // cursor on c
        app.move_queue_cursor(2);
        let c = app.displayed().items()[2].id;

        // badge c manually, then commit: c moves to the front
        app.store.set_update_count(c, 3);
        app.on_apply_updates();

        assert_eq!(app.displayed().items()[0].id, c);
        assert_eq!(app.queue_cursor(), 0);
    }

    #[test]
    fn delete_selected_updates_view_and_exits_editing() {
        let mut app = app_with(&[("a", true), ("b", true), ("c", true)]);
        app.toggle_queue_editing();
        app.toggle_select_current();
        app.delete_selected();

        assert!(!app.selection().is_editing());
        assert_eq!(app.displayed().len(), 2);
        assert_eq!(app.displayed().items()[0].title, "b");
    }

    #[test]
    fn detail_toggle_dequeues_and_requeues() {
        let mut app = app_with(&[("a", true), ("b", true)]);
        app.open_detail_selected();
        let id = app.detail().tutorial().unwrap();
        assert!(app.store().is_queued(id));

        app.toggle_detail_queued();
        assert!(!app.store().is_queued(id));
        assert_eq!(app.displayed().len(), 1);

        app.toggle_detail_queued();
        assert!(app.store().is_queued(id));
        // re-queueing appends at the back
        assert_eq!(app.displayed().items()[1].id, id);
    }
}
