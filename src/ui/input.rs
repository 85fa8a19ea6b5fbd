use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Tab};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The detail dialog captures everything while open.
    if app.detail_visible() {
        match key.code {
            KeyCode::Esc => app.close_detail(),
            KeyCode::Up | KeyCode::Char('k') => app.detail_scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => app.detail_scroll_down(),
            KeyCode::Char('q') => app.toggle_detail_queued(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::Char('1') => {
            app.set_tab(Tab::Library);
            return;
        }
        KeyCode::Char('2') => {
            app.set_tab(Tab::Queue);
            return;
        }
        _ => {}
    }

    match app.tab() {
        Tab::Library => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_library_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_library_cursor(1),
            KeyCode::Enter => app.open_detail_selected(),
            _ => {}
        },
        Tab::Queue => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_queue_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_queue_cursor(1),
            KeyCode::Enter => app.open_detail_selected(),
            KeyCode::Char('e') => app.toggle_queue_editing(),
            KeyCode::Esc => app.exit_queue_editing(),
            KeyCode::Char(' ') => app.toggle_select_current(),
            KeyCode::Char('d') => {
                if app.selection().is_editing() {
                    app.delete_selected();
                }
            }
            KeyCode::Char('u') => app.on_update_tick(),
            KeyCode::Char('a') => app.on_apply_updates(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Tutorial, TutorialCollection, TutorialId};
    use chrono::NaiveDate;
    use crate::queue::QueueStore;

    fn app() -> App {
        let tutorials = ["a", "b", "c"]
            .iter()
            .map(|title| Tutorial {
                id: TutorialId::random(),
                title: title.to_string(),
                publish_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                artwork_color: "#DA7756".to_string(),
                is_queued: true,
                update_count: 0,
                content: Vec::new(),
            })
            .collect();
        App::new(QueueStore::new(Catalog::new(vec![TutorialCollection {
            title: "all".to_string(),
            tutorials,
        }])))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_outside_dialogs() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_q_always_quits() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn tab_key_switches_tabs() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.tab(), Tab::Queue);
    }

    #[test]
    fn q_inside_detail_toggles_queue_membership() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.detail_visible());

        let id = app.detail().tutorial().unwrap();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert!(!app.store().is_queued(id));
    }

    #[test]
    fn editing_flow_selects_and_deletes() {
        let mut app = app();
        app.set_tab(Tab::Queue);
        handle_key(&mut app, press(KeyCode::Char('e')));
        assert!(app.selection().is_editing());

        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert!(!app.selection().is_editing());
        assert_eq!(app.displayed().len(), 2);
    }

    #[test]
    fn d_outside_editing_is_ignored() {
        let mut app = app();
        app.set_tab(Tab::Queue);
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert_eq!(app.displayed().len(), 3);
    }
}
