use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Tab;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: Tab) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let tab_style = |tab: Tab| {
            if tab == active {
                active_style
            } else {
                text_style
            }
        };

        let line = Line::from(vec![
            Span::styled("  shelfq", active_style),
            Span::styled("  │  ", separator_style),
            Span::styled("[1] Library", tab_style(Tab::Library)),
            Span::styled("   ", text_style),
            Span::styled("[2] Queue", tab_style(Tab::Queue)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
