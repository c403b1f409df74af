use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_stopwatch_key(key: KeyEvent, app: &mut App) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        // Ctrl+C also quits
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char(' ') => app.toggle_timer(),
        // The lap control only exists while running
        KeyCode::Char('l') | KeyCode::Char('L') if app.is_running() => app.record_lap(),
        KeyCode::Down | KeyCode::Char('j') => app.lap_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.lap_focus_up(),
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.open_category_picker_for_focused();
        }
        KeyCode::Esc => {
            if app.status_message.is_some() {
                app.clear_status();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_keys::{ch, ctrl, key};
    use super::*;
    use crate::app::{test_app, Modal, TimerState};

    #[test]
    fn space_toggles_timer() {
        let (mut app, _) = test_app();
        handle_stopwatch_key(ch(' '), &mut app);
        assert_eq!(app.timer_state(), TimerState::Running);
        handle_stopwatch_key(ch(' '), &mut app);
        assert_eq!(app.timer_state(), TimerState::Stopped);
    }

    #[test]
    fn lap_key_ignored_while_stopped() {
        let (mut app, _) = test_app();
        handle_stopwatch_key(ch('l'), &mut app);
        assert!(app.laps.is_empty());

        handle_stopwatch_key(ch(' '), &mut app);
        handle_stopwatch_key(ch('l'), &mut app);
        assert_eq!(app.laps.len(), 1);
    }

    #[test]
    fn enter_opens_picker_for_focused_lap() {
        let (mut app, _) = test_app();
        app.record_lap();
        app.record_lap();

        // Nothing focused yet
        handle_stopwatch_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.modal, Modal::None);

        handle_stopwatch_key(ch('j'), &mut app);
        handle_stopwatch_key(ch('j'), &mut app);
        handle_stopwatch_key(ch('c'), &mut app);
        assert_eq!(app.category_picker().unwrap().lap_index, 1);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let (mut app, _) = test_app();
        handle_stopwatch_key(ch('q'), &mut app);
        assert!(!app.running);

        let (mut app, _) = test_app();
        handle_stopwatch_key(ctrl('c'), &mut app);
        assert!(!app.running);
    }
}
