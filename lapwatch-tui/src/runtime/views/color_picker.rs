use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_color_picker_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            app.color_picker_previous();
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            app.color_picker_next();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(num) = c.to_digit(10) {
                app.color_picker_select_number(num as usize);
            }
        }
        KeyCode::Enter => app.color_picker_confirm(),
        KeyCode::Esc => app.cancel_color_picker(),
        _ => {}
    }
}
