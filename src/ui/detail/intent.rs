use crate::catalog::TutorialId;
use crate::ui::mvi::Intent;

/// User actions on the detail dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailIntent {
    Open { tutorial: TutorialId },
    Close,
    ScrollUp,
    /// `limit` is the last offset the content allows, computed by the
    /// caller from the rendered line count.
    ScrollDown { limit: usize },
}

impl Intent for DetailIntent {}
