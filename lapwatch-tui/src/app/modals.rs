use super::{App, CategoryPicker, ColorPicker, ColorTarget, Modal};
use crate::types::HexColor;

impl App {
    /// Open the category picker for the lap at display index `lap_index`.
    pub fn open_category_picker(&mut self, lap_index: usize) {
        if lap_index >= self.laps.len() {
            return;
        }
        // Start on the lap's current category when it has one
        let cursor = self
            .laps
            .get(lap_index)
            .and_then(|lap| lap.category)
            .and_then(|id| self.categories.iter().position(|c| c.id == id))
            .unwrap_or(0);
        self.modal = Modal::CategoryPicker(CategoryPicker {
            lap_index,
            cursor,
            color_picker: None,
        });
        self.touch();
    }

    pub fn open_category_picker_for_focused(&mut self) {
        if let Some(idx) = self.focused_lap_index {
            self.open_category_picker(idx);
        }
    }

    /// Close the picker along with any color picker stacked on it.
    pub fn close_category_picker(&mut self) {
        if self.modal != Modal::None {
            self.modal = Modal::None;
            self.touch();
        }
    }

    pub fn category_picker(&self) -> Option<&CategoryPicker> {
        match &self.modal {
            Modal::CategoryPicker(picker) => Some(picker),
            Modal::None => None,
        }
    }

    fn category_picker_mut(&mut self) -> Option<&mut CategoryPicker> {
        match &mut self.modal {
            Modal::CategoryPicker(picker) => Some(picker),
            Modal::None => None,
        }
    }

    pub fn color_picker(&self) -> Option<&ColorPicker> {
        self.category_picker()
            .and_then(|picker| picker.color_picker.as_ref())
    }

    /// Assign the category at `category_index` to the picker's lap and close the picker.
    pub fn select_category(&mut self, category_index: usize) {
        let Some(lap_index) = self.category_picker().map(|p| p.lap_index) else {
            return;
        };
        self.assign_category(lap_index, category_index);
        self.close_category_picker();
    }

    pub fn is_on_draft_row(&self) -> bool {
        self.category_picker()
            .is_some_and(|picker| picker.cursor >= self.categories.len())
    }

    pub fn picker_next(&mut self) {
        let last = self.categories.len();
        if let Some(picker) = self.category_picker_mut() {
            picker.cursor = (picker.cursor + 1).min(last);
        }
        self.touch();
    }

    pub fn picker_previous(&mut self) {
        if let Some(picker) = self.category_picker_mut() {
            picker.cursor = picker.cursor.saturating_sub(1);
        }
        self.touch();
    }

    /// Enter on a category row selects it; on the draft row it creates the draft.
    pub fn picker_confirm(&mut self) {
        let Some(cursor) = self.category_picker().map(|p| p.cursor) else {
            return;
        };
        if self.is_on_draft_row() {
            self.create_category();
        } else {
            self.select_category(cursor);
        }
    }

    /// After a category is appended, the draft row moves down with it.
    pub(super) fn sync_picker_cursor_to_draft(&mut self) {
        let draft_row = self.categories.len();
        if let Some(picker) = self.category_picker_mut() {
            picker.cursor = draft_row;
        }
    }

    pub fn draft_input_char(&mut self, c: char) {
        self.draft.name.insert(c);
        self.touch();
    }

    pub fn draft_backspace(&mut self) {
        self.draft.name.backspace();
        self.touch();
    }

    pub fn draft_clear(&mut self) {
        self.draft.name.clear();
        self.touch();
    }

    pub fn draft_move_cursor(&mut self, left: bool) {
        if left {
            self.draft.name.move_left();
        } else {
            self.draft.name.move_right();
        }
        self.touch();
    }

    pub fn draft_cursor_home_end(&mut self, home: bool) {
        if home {
            self.draft.name.home();
        } else {
            self.draft.name.end();
        }
        self.touch();
    }

    pub fn open_color_picker_for_draft(&mut self) {
        self.open_color_picker(ColorTarget::Draft);
    }

    pub fn open_color_picker_for_category(&mut self, index: usize) {
        if index >= self.categories.len() {
            return;
        }
        self.open_color_picker(ColorTarget::Category(index));
    }

    /// Open the color picker for whichever row the category picker cursor is on.
    pub fn open_color_picker_under_cursor(&mut self) {
        let Some(cursor) = self.category_picker().map(|p| p.cursor) else {
            return;
        };
        if self.is_on_draft_row() {
            self.open_color_picker_for_draft();
        } else {
            self.open_color_picker_for_category(cursor);
        }
    }

    fn open_color_picker(&mut self, target: ColorTarget) {
        let cursor = self
            .current_color(target)
            .and_then(|current| self.palette.iter().position(|c| c.same_color(current)))
            .unwrap_or(0);
        let Some(picker) = self.category_picker_mut() else {
            return;
        };
        picker.color_picker = Some(ColorPicker { target, cursor });
        self.touch();
    }

    /// The color the target has right now, highlighted in the palette.
    pub fn current_color(&self, target: ColorTarget) -> Option<&HexColor> {
        match target {
            ColorTarget::Draft => Some(&self.draft.color),
            ColorTarget::Category(index) => self.categories.get_index(index).map(|c| &c.color),
        }
    }

    /// Apply `color` to the color picker's target, then close the color picker.
    pub fn select_color(&mut self, color: HexColor) {
        let Some(target) = self.color_picker().map(|p| p.target) else {
            return;
        };
        match target {
            ColorTarget::Draft => {
                self.draft.color = color;
            }
            ColorTarget::Category(index) => self.update_category_color(index, color),
        }
        self.close_color_picker();
    }

    pub fn cancel_color_picker(&mut self) {
        self.close_color_picker();
    }

    fn close_color_picker(&mut self) {
        if let Some(picker) = self.category_picker_mut() {
            picker.color_picker = None;
        }
        self.touch();
    }

    pub fn color_picker_next(&mut self) {
        let last = self.palette.len().saturating_sub(1);
        if let Some(cp) = self.category_picker_mut().and_then(|p| p.color_picker.as_mut()) {
            cp.cursor = (cp.cursor + 1).min(last);
        }
        self.touch();
    }

    pub fn color_picker_previous(&mut self) {
        if let Some(cp) = self.category_picker_mut().and_then(|p| p.color_picker.as_mut()) {
            cp.cursor = cp.cursor.saturating_sub(1);
        }
        self.touch();
    }

    /// Pick the palette color under the color picker cursor.
    pub fn color_picker_confirm(&mut self) {
        let Some(cursor) = self.color_picker().map(|p| p.cursor) else {
            return;
        };
        if let Some(color) = self.palette.get(cursor).cloned() {
            self.select_color(color);
        }
    }

    /// Pick palette entry `num` (1-based) directly.
    pub fn color_picker_select_number(&mut self, num: usize) {
        if num == 0 {
            return;
        }
        if let Some(color) = self.palette.get(num - 1).cloned() {
            self.select_color(color);
        }
    }
}
