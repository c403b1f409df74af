use super::big_digits::{render_large_time, DIGIT_HEIGHT};
use super::widgets::build_lap_row;
use super::*;
use crate::app::TimerState;

pub fn render_stopwatch_view(frame: &mut Frame, app: &App, body: Rect) {
    let timer_height = DIGIT_HEIGHT as u16 + 6;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(timer_height), // Timer display + buttons
            Constraint::Min(5),               // Laps
            Constraint::Length(3),            // Status
            Constraint::Length(3),            // Controls
        ])
        .split(body);

    render_timer(frame, chunks[0], app);
    render_laps(frame, chunks[1], app);
    render_status(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_timer(frame: &mut Frame, area: Rect, app: &App) {
    let is_running = app.timer_state() == TimerState::Running;

    let (border_style, digit_color) = if is_running {
        (Style::default().fg(Color::Green), Color::White)
    } else {
        (Style::default(), Color::Gray)
    };

    let mut lines = vec![Line::from("")];
    lines.extend(render_large_time(&app.stopwatch.format_elapsed(), digit_color));
    lines.push(Line::from(""));

    // Lap button only exists while running
    let key = Style::default().fg(Color::Black).bg(Color::Yellow);
    let mut buttons = vec![
        Span::styled(" Space ", key),
        Span::raw(if is_running { " Stop " } else { " Start " }),
    ];
    if is_running {
        buttons.push(Span::raw("   "));
        buttons.push(Span::styled(" L ", key));
        buttons.push(Span::raw(" Lap "));
    }
    lines.push(Line::from(buttons));

    let title = if is_running {
        " Stopwatch ⏵ "
    } else {
        " Stopwatch "
    };

    let timer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(timer, area);
}

fn render_laps(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .laps
        .iter()
        .enumerate()
        .map(|(i, lap)| {
            let is_focused = app.focused_lap_index == Some(i);
            ListItem::new(build_lap_row(lap, app.lap_category(lap), is_focused))
        })
        .collect();

    let title = format!(" Laps ({}) ", app.laps.len());

    if items.is_empty() {
        let hint = if app.is_running() {
            "Press L to record a lap"
        } else {
            "No laps yet"
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(app.focused_lap_index);
    frame.render_stateful_widget(list, area, &mut state);

    // Scrollbar once the list overflows
    let inner_height = area.height.saturating_sub(2) as usize;
    if app.laps.len() > inner_height {
        let mut scrollbar_state = ScrollbarState::new(app.laps.len())
            .position(app.focused_lap_index.unwrap_or(0));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let contextual_status = app.get_contextual_status();
    let (status_text, text_color) = match app.status_message.as_deref() {
        Some(message) => (message, Color::Green),
        None => (contextual_status.as_str(), Color::White),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(text_color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(text_color))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = vec![
        Span::styled("Space", Style::default().fg(Color::Yellow)),
        Span::raw(": Start/Stop  "),
        Span::styled("L", Style::default().fg(Color::Yellow)),
        Span::raw(": Lap  "),
        Span::styled("↑↓/j/k", Style::default().fg(Color::Yellow)),
        Span::raw(": Navigate  "),
        Span::styled("Enter/C", Style::default().fg(Color::Yellow)),
        Span::raw(": Category  "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(Line::from(line))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
