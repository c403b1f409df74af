use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, HighlightSpacing, List, ListItem, ListState, Padding, Paragraph,
        Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};

mod big_digits;
mod category_dialog;
mod color_dialog;
mod stopwatch_view;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);
    stopwatch_view::render_stopwatch_view(frame, app, root[1]);

    // Dialogs stack on top of the stopwatch: category picker, then its color picker
    if let Some(picker) = app.category_picker() {
        category_dialog::render_category_dialog(frame, app, picker);
        if let Some(color_picker) = &picker.color_picker {
            color_dialog::render_color_dialog(frame, app, color_picker);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(1), // content
        ])
        .split(area);
    let content_row = rows[1];
    let area = Rect {
        x: content_row.x + 2,
        y: content_row.y,
        width: content_row.width.saturating_sub(4),
        height: content_row.height,
    };

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);
    let yellow = Style::default().fg(Color::Yellow);

    let tagged = app.laps.iter().filter(|l| l.category.is_some()).count();
    let header = Line::from(vec![
        Span::styled(" Lapwatch", yellow.add_modifier(Modifier::BOLD)),
        Span::styled("  |  ", muted),
        Span::styled("Laps:", yellow),
        Span::styled(format!(" {}", app.laps.len()), white),
        Span::styled(format!(" ({} tagged)", tagged), muted),
        Span::styled("  |  ", muted),
        Span::styled("Categories:", yellow),
        Span::styled(format!(" {}", app.categories.len()), white),
    ]);

    frame.render_widget(Paragraph::new(header), area);
}
