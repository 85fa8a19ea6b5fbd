use crate::catalog::TutorialId;
use crate::ui::mvi::UiState;

/// State of the tutorial detail dialog.
///
/// Holds only the id; the view resolves title, date, and content
/// sections through the store at render time, so the dialog can never
/// show stale rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailDialogState {
    #[default]
    Hidden,
    Visible {
        tutorial: TutorialId,
        scroll_offset: usize,
    },
}

impl UiState for DetailDialogState {}

impl DetailDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn tutorial(&self) -> Option<TutorialId> {
        match *self {
            Self::Hidden => None,
            Self::Visible { tutorial, .. } => Some(tutorial),
        }
    }

    pub fn scroll_offset(&self) -> usize {
        match *self {
            Self::Hidden => 0,
            Self::Visible { scroll_offset, .. } => scroll_offset,
        }
    }
}
