use crate::app::App;
use crossterm::event::KeyEvent;

mod category_picker;
mod color_picker;
mod stopwatch;

/// Route a key to whichever layer is on top: color picker, category picker, then the stopwatch.
pub(super) fn handle_view_key(key: KeyEvent, app: &mut App) {
    if app.color_picker().is_some() {
        color_picker::handle_color_picker_key(key, app);
    } else if app.category_picker().is_some() {
        category_picker::handle_category_picker_key(key, app);
    } else {
        stopwatch::handle_stopwatch_key(key, app);
    }
}

#[cfg(test)]
pub(super) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::{ch, key};
    use super::*;
    use crate::app::{test_app, Modal};
    use crossterm::event::KeyCode;

    fn press_all(app: &mut App, keys: &[KeyEvent]) {
        for k in keys {
            handle_view_key(*k, app);
        }
    }

    #[test]
    fn full_flow_through_both_modals() {
        let (mut app, sched) = test_app();

        press_all(&mut app, &[ch(' ')]);
        let generation = sched.active_generation().unwrap();
        app.tick(generation);
        press_all(&mut app, &[ch('l'), key(KeyCode::Down), key(KeyCode::Enter)]);
        assert!(app.category_picker().is_some());

        // Move to the draft row, name it, pick the second palette color, create
        press_all(
            &mut app,
            &[key(KeyCode::Down), key(KeyCode::Down), ch('R'), ch('u'), ch('n')],
        );
        press_all(&mut app, &[key(KeyCode::Tab)]);
        assert!(app.color_picker().is_some());
        press_all(&mut app, &[ch('2'), key(KeyCode::Enter)]);

        let created = app.categories.get_index(2).unwrap();
        assert_eq!(created.name, "Run");
        assert_eq!(created.color.as_str(), "#66ccff");

        // Cursor is back on the draft row; step up onto "Run" and select it
        press_all(&mut app, &[key(KeyCode::Up), key(KeyCode::Enter)]);
        assert_eq!(app.modal, Modal::None);
        let lap = app.laps.get(0).unwrap();
        assert_eq!(app.lap_category(lap).unwrap().name, "Run");
        assert_eq!(lap.time, 1);
    }

    #[test]
    fn keys_go_to_topmost_modal_only() {
        let (mut app, _) = test_app();
        app.record_lap();
        app.open_category_picker(0);
        app.open_color_picker_for_category(0);

        // Space would toggle the stopwatch if it leaked through
        press_all(&mut app, &[ch(' ')]);
        assert!(!app.is_running());

        press_all(&mut app, &[key(KeyCode::Esc)]);
        assert!(app.color_picker().is_none());
        assert!(app.category_picker().is_some());

        press_all(&mut app, &[key(KeyCode::Esc)]);
        assert_eq!(app.modal, Modal::None);
    }
}
