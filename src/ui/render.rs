use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Tab};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::library_view::LibraryView;
use crate::ui::queue_view::QueueView;
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT, POPUP_BORDER, SELECTED_MARK};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.tab()), header);

    match app.tab() {
        Tab::Library => frame.render_widget(LibraryView::new().widget(app, body), body),
        Tab::Queue => frame.render_widget(QueueView::new().widget(app, body), body),
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);

    if app.detail_visible() {
        draw_detail(frame, app);
    }
}

fn draw_detail(frame: &mut Frame<'_>, app: &App) {
    let Some(id) = app.detail().tutorial() else {
        return;
    };
    let Some(tutorial) = app.store().tutorial(id) else {
        return;
    };

    let area = frame.area();
    let popup = centered_rect_by_size(
        area.width.saturating_sub(8).min(70),
        area.height.saturating_sub(4).min(20),
        area,
    );

    let queued_line = if app.store().is_queued(id) {
        Span::styled("In queue", Style::default().fg(SELECTED_MARK))
    } else {
        Span::styled("Not queued", Style::default().fg(DIM_TEXT))
    };

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(vec![
            Span::styled(
                format!(" Published {}", tutorial.formatted_date()),
                Style::default().fg(DIM_TEXT),
            ),
            Span::styled(
                format!("  ·  {} videos  ·  ", tutorial.video_count()),
                Style::default().fg(DIM_TEXT),
            ),
            queued_line,
        ]),
        Line::from(""),
    ];

    for section in &tutorial.content {
        lines.push(Line::from(Span::styled(
            format!(" {}", section.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        for video in &section.videos {
            lines.push(Line::from(Span::styled(
                format!("   • {} ({} min)", video.title, video.duration_minutes),
                Style::default().fg(HEADER_TEXT),
            )));
        }
    }

    let offset = app.detail().scroll_offset() as u16;
    let widget = Paragraph::new(lines).scroll((offset, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER))
            .title(format!(" {} ", tutorial.title)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
