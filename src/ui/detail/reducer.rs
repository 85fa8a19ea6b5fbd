//! Reducer for the detail dialog.

use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailDialogState;

/// Pure state transitions for the detail dialog; opening resets the
/// scroll position, scrolling saturates at both ends.
pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailDialogState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { tutorial } => DetailDialogState::Visible {
                tutorial,
                scroll_offset: 0,
            },

            DetailIntent::Close => DetailDialogState::Hidden,

            DetailIntent::ScrollUp => match state {
                DetailDialogState::Visible {
                    tutorial,
                    scroll_offset,
                } => DetailDialogState::Visible {
                    tutorial,
                    scroll_offset: scroll_offset.saturating_sub(1),
                },
                hidden => hidden,
            },

            DetailIntent::ScrollDown { limit } => match state {
                DetailDialogState::Visible {
                    tutorial,
                    scroll_offset,
                } => DetailDialogState::Visible {
                    tutorial,
                    scroll_offset: (scroll_offset + 1).min(limit),
                },
                hidden => hidden,
            },
        }
    }
}
