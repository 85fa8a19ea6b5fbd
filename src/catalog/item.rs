use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

/// Stable identity of a tutorial within one catalog.
///
/// Assigned at load time and never serialized; the queue and the diff
/// layer key everything by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TutorialId(Uuid);

impl TutorialId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TutorialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One library section: a titled group of tutorials.
#[derive(Debug, Clone, Deserialize)]
pub struct TutorialCollection {
    pub title: String,
    pub tutorials: Vec<Tutorial>,
}

/// A single tutorial.
///
/// `update_count` is transient badge state: nonzero means an update is
/// pending and the queue shows a badge until the next commit promotes
/// the item and resets the count.
#[derive(Debug, Clone, Deserialize)]
pub struct Tutorial {
    #[serde(skip, default = "TutorialId::random")]
    pub id: TutorialId,
    pub title: String,
    pub publish_date: NaiveDate,
    #[serde(default = "default_artwork_color")]
    pub artwork_color: String,
    #[serde(default)]
    pub is_queued: bool,
    #[serde(skip)]
    pub update_count: u32,
    #[serde(default)]
    pub content: Vec<ContentSection>,
}

fn default_artwork_color() -> String {
    "#666666".to_string()
}

impl Tutorial {
    /// Publish date the way the queue rows show it, e.g. "Nov 4".
    pub fn formatted_date(&self) -> String {
        self.publish_date.format("%b %-d").to_string()
    }

    pub fn has_pending_update(&self) -> bool {
        self.update_count > 0
    }

    pub fn video_count(&self) -> usize {
        self.content.iter().map(|s| s.videos.len()).sum()
    }
}

/// A titled group of videos inside one tutorial.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
    pub title: String,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub title: String,
    pub duration_minutes: u32,
}
