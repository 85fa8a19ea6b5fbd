use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::theme::{artwork_color, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};

/// The Library tab: every collection as a titled section, tutorials
/// underneath, the cursor walking the flattened item list.
pub struct LibraryView;

impl Default for LibraryView {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryView {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut item_index = 0usize;
        let mut cursor_line = 0usize;

        for collection in app.store().catalog().collections() {
            lines.push(Line::from(Span::styled(
                format!(" {}", collection.title),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )));

            for tutorial in &collection.tutorials {
                let selected = item_index == app.library_cursor();
                if selected {
                    cursor_line = lines.len();
                }

                let queued_mark = if tutorial.is_queued { "  [queued]" } else { "" };
                let row_style = if selected {
                    Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };

                lines.push(Line::from(vec![
                    Span::raw("   "),
                    Span::styled("■ ", Style::default().fg(artwork_color(&tutorial.artwork_color))),
                    Span::styled(tutorial.title.clone(), row_style),
                    Span::styled(
                        format!(
                            "  {} · {} videos{}",
                            tutorial.formatted_date(),
                            tutorial.video_count(),
                            queued_mark
                        ),
                        Style::default().fg(DIM_TEXT),
                    ),
                ]));
                item_index += 1;
            }

            lines.push(Line::from(""));
        }

        let viewport = area.height.saturating_sub(2) as usize;
        let offset = cursor_line.saturating_sub(viewport.saturating_sub(1).max(1)) as u16;

        Paragraph::new(lines).scroll((offset, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(" Library "),
        )
    }
}
