use super::utils::centered_rect;
use super::widgets::{category_chip, swatch};
use super::*;
use crate::app::{format_secs, CategoryPicker};

pub fn render_category_dialog(frame: &mut Frame, app: &App, picker: &CategoryPicker) {
    let height = app.categories.len() as u16 + 11;
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Choose Category ")
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The category list takes whatever is left; the draft row and help never scroll away
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // lap label
            Constraint::Min(1),    // categories
            Constraint::Length(2), // "+ New category"
            Constraint::Length(1), // draft row
            Constraint::Length(2), // help
        ])
        .split(inner);

    let lap_label = match app.laps.get(picker.lap_index) {
        Some(lap) => format!("Lap {}  ·  {}", lap.number, format_secs(lap.time)),
        None => String::new(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(lap_label, Style::default().fg(Color::DarkGray))),
        rows[0],
    );

    render_category_list(frame, rows[1], app, picker);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "+ New category",
                Style::default().fg(Color::Yellow),
            )),
        ]),
        rows[2],
    );

    frame.render_widget(Paragraph::new(draft_line(app)), rows[3]);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("↑↓", Style::default().fg(Color::Yellow)),
                Span::raw(": Move  "),
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(": Select/Add  "),
                Span::styled("Tab", Style::default().fg(Color::Yellow)),
                Span::raw(": Color  "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(": Close"),
            ]),
        ]),
        rows[4],
    );
}

fn render_category_list(frame: &mut Frame, area: Rect, app: &App, picker: &CategoryPicker) {
    let items: Vec<ListItem> = app
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let mut spans = vec![category_chip(Some(category))];
            if picker.cursor == i {
                spans.push(Span::styled(
                    "  c: color",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol("▶ ")
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = ListState::default();
    if !app.is_on_draft_row() {
        state.select(Some(picker.cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);

    if app.categories.len() > area.height as usize {
        let mut scrollbar_state =
            ScrollbarState::new(app.categories.len()).position(picker.cursor);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

fn draft_line(app: &App) -> Line<'static> {
    let on_draft = app.is_on_draft_row();
    let name_text = if on_draft {
        let (before, after) = app.draft.name.split_at_cursor();
        format!("{}█{}", before, after)
    } else if app.draft.name.value.is_empty() {
        "Name".to_string()
    } else {
        app.draft.name.value.clone()
    };
    let name_style = if on_draft {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(
            if on_draft { "▶ " } else { "  " },
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(format!("[{}]", name_text), name_style),
        Span::raw("  "),
        swatch(&app.draft.color),
        Span::styled(
            format!(" {}", app.draft.color),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
