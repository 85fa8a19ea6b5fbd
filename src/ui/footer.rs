use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::{App, Tab};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = if app.detail_visible() {
            " ↑/↓: Scroll │ q: Toggle queued │ Esc: Close"
        } else if app.selection().is_editing() {
            " ↑/↓: Move │ Space: Select │ d: Delete │ Esc: Done"
        } else {
            match app.tab() {
                Tab::Library => " ↑/↓: Move │ Enter: Details │ Tab: Switch │ q: Quit",
                Tab::Queue => {
                    " ↑/↓: Move │ e: Edit │ u: Badge │ a: Apply │ Tab: Switch │ q: Quit"
                }
            }
        };
        let version = format!("v{} ", VERSION);

        // Pad using char count, not byte count (the hints contain
        // non-ASCII separators).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints.to_string(), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
