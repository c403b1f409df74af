use crate::config::LapwatchConfig;
use crate::types::HexColor;

mod categories;
mod laps;
mod modals;
mod state;
mod stopwatch;

pub use categories::{Category, CategoryBook, CategoryId};
pub use laps::{Lap, LapLog};
pub use state::{
    CategoryDraft, CategoryPicker, ColorPicker, ColorTarget, Modal, TextInput, TimerState,
};
pub use stopwatch::{format_secs, Stopwatch, TickScheduler};

#[cfg(test)]
pub(crate) use stopwatch::testing;

/// App with default config and a scheduler tests can inspect.
#[cfg(test)]
pub(crate) fn test_app() -> (App, testing::RecordingScheduler) {
    let scheduler = testing::RecordingScheduler::default();
    let app = App::new(&LapwatchConfig::default(), Box::new(scheduler.clone()));
    (app, scheduler)
}

pub struct App {
    pub running: bool,
    pub stopwatch: Stopwatch,
    pub laps: LapLog,
    pub categories: CategoryBook,
    pub draft: CategoryDraft,
    pub modal: Modal,
    pub palette: Vec<HexColor>,
    pub default_color: HexColor,
    pub status_message: Option<String>,

    // Lap list navigation
    pub focused_lap_index: Option<usize>,

    // Redraw tracking: bumped on every mutation, compared against the last drawn value
    revision: u64,
    drawn_revision: Option<u64>,
}

impl App {
    pub fn new(cfg: &LapwatchConfig, scheduler: Box<dyn TickScheduler>) -> Self {
        Self {
            running: true,
            stopwatch: Stopwatch::new(scheduler),
            laps: LapLog::new(),
            categories: CategoryBook::from_seeds(&cfg.categories),
            draft: CategoryDraft::new(cfg.default_color.clone()),
            modal: Modal::None,
            palette: cfg.palette.clone(),
            default_color: cfg.default_color.clone(),
            status_message: None,
            focused_lap_index: None,
            revision: 0,
            drawn_revision: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
        self.touch();
    }

    /// Release the tick before the screen goes away.
    pub fn shutdown(&mut self) {
        self.stop();
        self.running = false;
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn needs_redraw(&self) -> bool {
        self.drawn_revision != Some(self.revision)
    }

    pub fn mark_drawn(&mut self) {
        self.drawn_revision = Some(self.revision);
    }

    pub fn request_redraw(&mut self) {
        self.drawn_revision = None;
    }

    pub fn timer_state(&self) -> TimerState {
        self.stopwatch.state()
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs()
    }

    pub fn start(&mut self) {
        if self.stopwatch.start() {
            tracing::info!(elapsed = self.elapsed_secs(), "stopwatch started");
            self.clear_status();
            self.touch();
        }
    }

    pub fn stop(&mut self) {
        if self.stopwatch.stop() {
            tracing::info!(elapsed = self.elapsed_secs(), "stopwatch stopped");
            self.touch();
        }
    }

    pub fn toggle_timer(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn tick(&mut self, generation: u64) {
        if self.stopwatch.tick(generation) {
            self.touch();
        } else {
            tracing::debug!(generation, "dropped stale tick");
        }
    }

    /// Snapshot the current elapsed time as a new lap at the top of the list.
    pub fn record_lap(&mut self) {
        let time = self.elapsed_secs();
        let number = self.laps.record(time).number;
        tracing::info!(lap = number, time, "lap recorded");

        // The new lap lands at index 0, pushing the focused lap down by one
        if let Some(idx) = self.focused_lap_index {
            self.focused_lap_index = Some(idx + 1);
        }
        self.set_status(format!("Lap {} recorded at {}", number, format_secs(time)));
    }

    /// Tag the lap at display index `lap_index` with the category at `category_index`.
    pub fn assign_category(&mut self, lap_index: usize, category_index: usize) {
        let Some(category) = self.categories.get_index(category_index) else {
            tracing::debug!(category_index, "assign ignored: no such category");
            return;
        };
        let (id, name) = (category.id, category.name.clone());

        if self.laps.assign_category(lap_index, id) {
            let number = self.laps.get(lap_index).map(|l| l.number).unwrap_or_default();
            tracing::info!(lap = number, category = %name, "category assigned");
            self.set_status(format!("Lap {} tagged {}", number, name));
        } else {
            tracing::debug!(lap_index, "assign ignored: no such lap");
        }
    }

    /// Commit the draft as a new category. Blank names are ignored and keep the draft.
    pub fn create_category(&mut self) -> Option<CategoryId> {
        let color = self.draft.color.clone();
        let Some(id) = self.categories.create(&self.draft.name.value, color) else {
            tracing::debug!("create ignored: blank category name");
            return None;
        };
        self.draft = CategoryDraft::new(self.default_color.clone());

        if let Some(category) = self.categories.get(id) {
            tracing::info!(name = %category.name, color = %category.color, "category created");
            let message = format!("Category '{}' created", category.name);
            self.set_status(message);
        }
        self.sync_picker_cursor_to_draft();
        Some(id)
    }

    pub fn update_category_color(&mut self, index: usize, color: HexColor) {
        if self.categories.update_color(index, color.clone()) {
            let name = self
                .categories
                .get_index(index)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            tracing::info!(category = %name, color = %color, "category recolored");
            self.set_status(format!("{} recolored to {}", name, color));
        } else {
            tracing::debug!(index, "recolor ignored: no such category");
        }
    }

    /// The category a lap currently points at, with its live color.
    pub fn lap_category(&self, lap: &Lap) -> Option<&Category> {
        lap.category.and_then(|id| self.categories.get(id))
    }

    pub fn lap_focus_down(&mut self) {
        if self.laps.is_empty() {
            return;
        }
        let last = self.laps.len() - 1;
        self.focused_lap_index = Some(match self.focused_lap_index {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
        self.touch();
    }

    pub fn lap_focus_up(&mut self) {
        if self.laps.is_empty() {
            return;
        }
        self.focused_lap_index = Some(match self.focused_lap_index {
            None | Some(0) => 0,
            Some(i) => i - 1,
        });
        self.touch();
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.touch();
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.touch();
    }

    /// Hint shown in the status bar when there is no message.
    pub fn get_contextual_status(&self) -> String {
        match (&self.modal, self.timer_state()) {
            (Modal::CategoryPicker(picker), _) if picker.color_picker.is_some() => {
                "Pick a color for the category".to_string()
            }
            (Modal::CategoryPicker(_), _) => "Choose or create a category for the lap".to_string(),
            (Modal::None, TimerState::Stopped) if self.elapsed_secs() == 0 => {
                "Press Space to start".to_string()
            }
            (Modal::None, TimerState::Stopped) => "Stopped - press Space to resume".to_string(),
            (Modal::None, TimerState::Running) => "Running - press L to record a lap".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingScheduler;
    use super::*;
    use crate::types::hex;

    fn tick_n(app: &mut App, sched: &RecordingScheduler, n: usize) {
        let generation = sched.active_generation().expect("ticker should be scheduled");
        for _ in 0..n {
            app.tick(generation);
        }
    }

    fn lap_times(app: &App) -> Vec<(u64, Option<CategoryId>)> {
        app.laps.iter().map(|l| (l.time, l.category)).collect()
    }

    #[test]
    fn starts_with_seeded_categories() {
        let (app, _) = test_app();
        let names: Vec<_> = app.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Study", "Break"]);
        assert_eq!(app.draft.color.as_str(), "#999");
    }

    #[test]
    fn laps_across_stop_and_restart() {
        let (mut app, sched) = test_app();

        app.start();
        tick_n(&mut app, &sched, 3);
        app.record_lap();
        assert_eq!(app.elapsed_secs(), 3);
        assert_eq!(lap_times(&app), vec![(3, None)]);

        app.stop();
        app.start();
        tick_n(&mut app, &sched, 2);
        app.record_lap();
        assert_eq!(app.elapsed_secs(), 5);
        assert_eq!(lap_times(&app), vec![(5, None), (3, None)]);
    }

    #[test]
    fn record_lap_grows_list_by_one() {
        let (mut app, sched) = test_app();
        app.start();
        tick_n(&mut app, &sched, 1);
        let before = app.laps.len();
        app.record_lap();
        assert_eq!(app.laps.len(), before + 1);
        assert_eq!(app.laps.get(0).unwrap().time, 1);
        assert_eq!(app.laps.get(0).unwrap().category, None);
    }

    #[test]
    fn record_lap_keeps_focus_on_same_lap() {
        let (mut app, _) = test_app();
        app.record_lap();
        app.lap_focus_down();
        assert_eq!(app.focused_lap_index, Some(0));
        app.record_lap();
        assert_eq!(app.focused_lap_index, Some(1));
        assert_eq!(app.laps.get(1).unwrap().number, 1);
    }

    #[test]
    fn create_category_ignores_blank_name() {
        let (mut app, _) = test_app();
        app.draft.color = hex("#FF0000");
        assert_eq!(app.create_category(), None);
        assert_eq!(app.categories.len(), 2);
        assert_eq!(app.draft.color.as_str(), "#FF0000");
    }

    #[test]
    fn create_category_trims_and_resets_draft() {
        let (mut app, _) = test_app();
        app.draft.name = TextInput::from_str("  Study  ");
        app.draft.color = hex("#FF0000");

        let id = app.create_category().unwrap();

        assert_eq!(app.categories.len(), 3);
        let created = app.categories.get(id).unwrap();
        assert_eq!(created.name, "Study");
        assert_eq!(created.color.as_str(), "#FF0000");
        assert_eq!(app.draft, CategoryDraft::new(hex("#999")));
    }

    #[test]
    fn recolor_reaches_every_lap_with_that_category() {
        let (mut app, _) = test_app();
        app.record_lap();
        app.record_lap();
        app.record_lap();
        app.assign_category(0, 1);
        app.assign_category(2, 1);
        app.assign_category(1, 0);

        app.update_category_color(1, hex("#00ff00"));

        let colors: Vec<_> = app
            .laps
            .iter()
            .map(|lap| app.lap_category(lap).unwrap().color.as_str().to_string())
            .collect();
        assert_eq!(colors, vec!["#00ff00", "#FF6666", "#00ff00"]);
        assert_eq!(app.categories.get_index(1).unwrap().name, "Break");
    }

    #[test]
    fn assign_with_bad_indices_is_ignored() {
        let (mut app, _) = test_app();
        app.record_lap();
        app.assign_category(5, 0);
        app.assign_category(0, 9);
        assert_eq!(app.laps.get(0).unwrap().category, None);
    }

    #[test]
    fn shutdown_cancels_running_tick() {
        let (mut app, sched) = test_app();
        app.start();
        app.shutdown();
        assert!(!app.is_running());
        assert!(!app.running);
        assert_eq!(sched.active_generation(), None);
    }

    #[test]
    fn mutations_request_redraw() {
        let (mut app, sched) = test_app();
        app.mark_drawn();
        assert!(!app.needs_redraw());

        app.start();
        assert!(app.needs_redraw());
        app.mark_drawn();

        tick_n(&mut app, &sched, 1);
        assert!(app.needs_redraw());
        app.mark_drawn();

        // Stale ticks change nothing, so nothing to redraw
        app.tick(0);
        assert!(!app.needs_redraw());
    }
}
