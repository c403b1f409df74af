use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_category_picker_key(key: KeyEvent, app: &mut App) {
    if app.is_on_draft_row() {
        handle_draft_row_key(key, app);
    } else {
        handle_category_row_key(key, app);
    }
}

fn handle_category_row_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.picker_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.picker_next(),
        KeyCode::Enter => app.picker_confirm(),
        // Palette affordance for the category under the cursor
        KeyCode::Tab | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.open_color_picker_under_cursor();
        }
        KeyCode::Esc => app.close_category_picker(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

/// The draft row is a text field, so letters type instead of navigating.
fn handle_draft_row_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') | KeyCode::Char('X')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.draft_clear();
        }
        KeyCode::Char('q') | KeyCode::Char('Q')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.quit();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft_input_char(c);
        }
        KeyCode::Backspace => app.draft_backspace(),
        KeyCode::Left => app.draft_move_cursor(true),
        KeyCode::Right => app.draft_move_cursor(false),
        KeyCode::Home => app.draft_cursor_home_end(true),
        KeyCode::End => app.draft_cursor_home_end(false),
        KeyCode::Up => app.picker_previous(),
        KeyCode::Tab => app.open_color_picker_for_draft(),
        KeyCode::Enter => app.picker_confirm(),
        KeyCode::Esc => app.close_category_picker(),
        _ => {}
    }
}
