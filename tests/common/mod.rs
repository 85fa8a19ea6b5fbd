#![allow(dead_code)]

use chrono::NaiveDate;

use shelfq::catalog::{Catalog, Tutorial, TutorialCollection, TutorialId};
use shelfq::queue::{QueueItem, QueueSnapshot, QueueStore};

/// A store with one collection where every listed title is queued.
pub fn store_with(titles: &[&str]) -> QueueStore {
    let tutorials = titles
        .iter()
        .map(|title| Tutorial {
            id: TutorialId::random(),
            title: title.to_string(),
            publish_date: NaiveDate::from_ymd_opt(2026, 5, 12).unwrap(),
            artwork_color: "#DA7756".to_string(),
            is_queued: true,
            update_count: 0,
            content: Vec::new(),
        })
        .collect();
    QueueStore::new(Catalog::new(vec![TutorialCollection {
        title: "test".to_string(),
        tutorials,
    }]))
}

pub fn id_of(store: &QueueStore, title: &str) -> TutorialId {
    store
        .snapshot()
        .items()
        .iter()
        .find(|item| item.title == title)
        .unwrap_or_else(|| panic!("no queued tutorial titled '{title}'"))
        .id
}

pub fn titles_of(store: &QueueStore) -> Vec<String> {
    store
        .snapshot()
        .items()
        .iter()
        .map(|item| item.title.clone())
        .collect()
}

/// A snapshot over pre-made ids, titled by position.
pub fn snapshot_from(ids: &[TutorialId]) -> QueueSnapshot {
    QueueSnapshot::new(
        ids.iter()
            .enumerate()
            .map(|(index, &id)| QueueItem {
                id,
                title: format!("item-{index}"),
                publish_date: NaiveDate::from_ymd_opt(2026, 5, 12).unwrap(),
                update_count: 0,
            })
            .collect(),
    )
}

pub fn fresh_ids(count: usize) -> Vec<TutorialId> {
    (0..count).map(|_| TutorialId::random()).collect()
}
