use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BADGE, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, SELECTED_MARK,
};

/// The Queue tab: one row per queued tutorial in display order, with a
/// pending-update badge marker and, in editing mode, selection checks.
pub struct QueueView;

impl Default for QueueView {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueView {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let snapshot = app.displayed();
        let editing = app.selection().is_editing();

        let mut lines: Vec<Line<'static>> = Vec::new();

        if snapshot.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  The queue is empty.",
                Style::default().fg(HEADER_TEXT),
            )));
            lines.push(Line::from(Span::styled(
                "  Open a tutorial in the Library tab and press q to queue it.",
                Style::default().fg(DIM_TEXT),
            )));
        }

        for (index, item) in snapshot.items().iter().enumerate() {
            let selected = index == app.queue_cursor();
            let row_style = if selected {
                Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };

            let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

            if editing {
                let (check, style) = if app.selection().is_selected(item.id) {
                    ("[x] ", Style::default().fg(SELECTED_MARK))
                } else {
                    ("[ ] ", Style::default().fg(DIM_TEXT))
                };
                spans.push(Span::styled(check, style));
            }

            if item.has_pending_update() {
                spans.push(Span::styled(
                    "● ",
                    Style::default().fg(BADGE).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw("  "));
            }

            spans.push(Span::styled(item.title.clone(), row_style));
            spans.push(Span::styled(
                format!("  {}", item.publish_date.format("%b %-d")),
                Style::default().fg(DIM_TEXT),
            ));

            lines.push(Line::from(spans));
        }

        let viewport = area.height.saturating_sub(2) as usize;
        let offset = app
            .queue_cursor()
            .saturating_sub(viewport.saturating_sub(1).max(1)) as u16;

        let title = if editing {
            format!(" Queue ({}) — editing ", snapshot.len())
        } else {
            format!(" Queue ({}) ", snapshot.len())
        };

        Paragraph::new(lines).scroll((offset, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(title),
        )
    }
}
