//! The shared tutorial catalog: every tutorial the app knows about,
//! grouped into collections. The queue references catalog entries by id
//! and never owns them.

mod item;
mod loader;

pub use item::{ContentSection, Tutorial, TutorialCollection, TutorialId, Video};
pub use loader::CatalogError;

use serde::Deserialize;

/// All tutorial collections, in display order.
///
/// The catalog is the single owner of every [`Tutorial`]; the queue holds
/// ids into it. Removing a tutorial from the queue clears its `is_queued`
/// flag but leaves the catalog entry intact.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    collections: Vec<TutorialCollection>,
}

impl Catalog {
    pub fn new(collections: Vec<TutorialCollection>) -> Self {
        Self { collections }
    }

    pub fn collections(&self) -> &[TutorialCollection] {
        &self.collections
    }

    pub fn tutorial(&self, id: TutorialId) -> Option<&Tutorial> {
        self.collections
            .iter()
            .flat_map(|c| c.tutorials.iter())
            .find(|t| t.id == id)
    }

    pub fn tutorial_mut(&mut self, id: TutorialId) -> Option<&mut Tutorial> {
        self.collections
            .iter_mut()
            .flat_map(|c| c.tutorials.iter_mut())
            .find(|t| t.id == id)
    }

    /// Ids of all tutorials flagged as queued, in catalog order.
    /// Seeds the queue ordering at startup.
    pub fn queued_ids(&self) -> Vec<TutorialId> {
        self.collections
            .iter()
            .flat_map(|c| c.tutorials.iter())
            .filter(|t| t.is_queued)
            .map(|t| t.id)
            .collect()
    }

    pub fn tutorial_count(&self) -> usize {
        self.collections.iter().map(|c| c.tutorials.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tutorial(title: &str, queued: bool) -> Tutorial {
        Tutorial {
            id: TutorialId::random(),
            title: title.to_string(),
            publish_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            artwork_color: "#DA7756".to_string(),
            is_queued: queued,
            update_count: 0,
            content: Vec::new(),
        }
    }

    #[test]
    fn queued_ids_preserves_catalog_order() {
        let a = tutorial("a", true);
        let b = tutorial("b", false);
        let c = tutorial("c", true);
        let (a_id, c_id) = (a.id, c.id);

        let catalog = Catalog::new(vec![TutorialCollection {
            title: "one".to_string(),
            tutorials: vec![a, b, c],
        }]);

        assert_eq!(catalog.queued_ids(), vec![a_id, c_id]);
    }

    #[test]
    fn lookup_spans_collections() {
        let a = tutorial("a", false);
        let b = tutorial("b", false);
        let b_id = b.id;

        let catalog = Catalog::new(vec![
            TutorialCollection {
                title: "one".to_string(),
                tutorials: vec![a],
            },
            TutorialCollection {
                title: "two".to_string(),
                tutorials: vec![b],
            },
        ]);

        assert_eq!(catalog.tutorial(b_id).unwrap().title, "b");
        assert!(catalog.tutorial(TutorialId::random()).is_none());
    }

    #[test]
    fn tutorial_mut_updates_in_place() {
        let a = tutorial("a", false);
        let a_id = a.id;
        let mut catalog = Catalog::new(vec![TutorialCollection {
            title: "one".to_string(),
            tutorials: vec![a],
        }]);

        catalog.tutorial_mut(a_id).unwrap().update_count = 3;
        assert_eq!(catalog.tutorial(a_id).unwrap().update_count, 3);
    }
}
