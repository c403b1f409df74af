use crate::types::HexColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerState {
    Stopped,
    Running,
}

/// Which overlay is on screen. The color picker only exists inside the category picker.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    None,
    CategoryPicker(CategoryPicker),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPicker {
    /// Display index of the lap being categorized.
    pub lap_index: usize,
    /// Row under the cursor: `0..categories.len()` are categories, `categories.len()` is the draft row.
    pub cursor: usize,
    pub color_picker: Option<ColorPicker>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorTarget {
    /// The new-category draft.
    Draft,
    /// An existing category, by position.
    Category(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    pub target: ColorTarget,
    /// Index into the palette.
    pub cursor: usize,
}

/// The not-yet-committed "add category" form.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub name: TextInput,
    pub color: HexColor,
}

impl CategoryDraft {
    pub fn new(color: HexColor) -> Self {
        Self {
            name: TextInput::new(),
            color,
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_handle_multibyte_chars() {
        let mut input = TextInput::new();
        for c in "休憩".chars() {
            input.insert(c);
        }
        assert_eq!(input.value, "休憩");
        input.backspace();
        assert_eq!(input.value, "休");
        assert_eq!(input.cursor, "休".len());
    }

    #[test]
    fn insert_mid_string() {
        let mut input = TextInput::from_str("Stdy");
        input.home();
        input.move_right();
        input.move_right();
        input.insert('u');
        assert_eq!(input.value, "Study");
        assert_eq!(input.split_at_cursor(), ("Stu", "dy"));
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::from_str("a");
        input.home();
        input.backspace();
        assert_eq!(input.value, "a");
    }
}
