mod common;

use common::{id_of, store_with, titles_of};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shelfq::queue::scheduler::{commit_pending, mark_random_pending, PENDING_SENTINEL};

#[test]
fn tick_badges_exactly_one_item() {
    let mut store = store_with(&["a", "b", "c", "d"]);
    let mut rng = StdRng::seed_from_u64(7);

    let badged = mark_random_pending(&mut store, &mut rng).unwrap();

    let snapshot = store.snapshot();
    let pending: Vec<_> = snapshot
        .items()
        .iter()
        .filter(|item| item.has_pending_update())
        .collect();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, badged);
    assert_eq!(pending[0].update_count, PENDING_SENTINEL);
}

#[test]
fn tick_on_empty_store_is_none() {
    let mut store = store_with(&[]);
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(mark_random_pending(&mut store, &mut rng), None);
}

#[test]
fn badged_item_moves_to_front_on_commit() {
    let mut store = store_with(&["a", "b", "c", "d"]);
    let b = id_of(&store, "b");
    store.set_update_count(b, PENDING_SENTINEL);

    let promoted = commit_pending(&mut store);

    assert_eq!(promoted, vec![b]);
    assert_eq!(titles_of(&store), vec!["b", "a", "c", "d"]);
    assert_eq!(store.snapshot().items()[0].update_count, 0);
}

#[test]
fn commit_below_three_items_is_a_noop() {
    let mut store = store_with(&["a", "b"]);
    let a = id_of(&store, "a");
    store.set_update_count(a, PENDING_SENTINEL);

    let promoted = commit_pending(&mut store);

    assert!(promoted.is_empty());
    assert_eq!(titles_of(&store), vec!["a", "b"]);
    // the pending badge persists untouched
    assert_eq!(store.snapshot().items()[0].update_count, PENDING_SENTINEL);
}

#[test]
fn multiple_badged_items_keep_their_relative_order() {
    let mut store = store_with(&["a", "b", "c", "d"]);
    let b = id_of(&store, "b");
    let d = id_of(&store, "d");
    store.set_update_count(b, PENDING_SENTINEL);
    store.set_update_count(d, PENDING_SENTINEL);

    let promoted = commit_pending(&mut store);

    assert_eq!(promoted, vec![b, d]);
    assert_eq!(titles_of(&store), vec!["b", "d", "a", "c"]);
    let snapshot = store.snapshot();
    assert!(snapshot.items().iter().take(2).all(|i| i.update_count == 0));
}

#[test]
fn badged_first_item_is_the_anchor_and_keeps_its_badge() {
    let mut store = store_with(&["a", "b", "c"]);
    let a = id_of(&store, "a");
    let c = id_of(&store, "c");
    store.set_update_count(a, PENDING_SENTINEL);
    store.set_update_count(c, PENDING_SENTINEL);

    let promoted = commit_pending(&mut store);

    assert_eq!(promoted, vec![c]);
    assert_eq!(titles_of(&store), vec!["c", "a", "b"]);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.items()[0].update_count, 0);
    // the anchor was skipped, not resolved
    assert_eq!(snapshot.items()[1].update_count, PENDING_SENTINEL);
}

#[test]
fn item_deleted_between_tick_and_commit_is_skipped() {
    let mut store = store_with(&["a", "b", "c", "d"]);
    let b = id_of(&store, "b");
    store.set_update_count(b, PENDING_SENTINEL);

    // the user dequeues b before the commit timer fires
    store.remove(&[b].into());

    let promoted = commit_pending(&mut store);

    assert!(promoted.is_empty());
    assert_eq!(titles_of(&store), vec!["a", "c", "d"]);
}

#[test]
fn ticks_accumulate_when_they_outpace_commits() {
    let mut store = store_with(&["a", "b", "c", "d", "e"]);
    let c = id_of(&store, "c");
    let e = id_of(&store, "e");

    // two ticks land before one commit
    store.set_update_count(c, PENDING_SENTINEL);
    store.set_update_count(e, PENDING_SENTINEL);

    let promoted = commit_pending(&mut store);
    assert_eq!(promoted, vec![c, e]);
    assert_eq!(titles_of(&store), vec!["c", "e", "a", "b", "d"]);

    // nothing left pending for the next commit
    assert!(commit_pending(&mut store).is_empty());
    assert_eq!(titles_of(&store), vec!["c", "e", "a", "b", "d"]);
}

#[test]
fn random_selection_is_always_a_queued_item() {
    let mut store = store_with(&["a", "b", "c"]);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let badged = mark_random_pending(&mut store, &mut rng).unwrap();
        assert!(store.is_queued(badged));
        store.set_update_count(badged, 0);
    }
}
