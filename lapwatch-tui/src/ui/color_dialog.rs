use super::utils::centered_rect;
use super::*;
use crate::app::{ColorPicker, ColorTarget};

const CELL_WIDTH: usize = 7;

pub fn render_color_dialog(frame: &mut Frame, app: &App, picker: &ColorPicker) {
    let width = (app.palette.len() * CELL_WIDTH) as u16 + 8;
    let area = centered_rect(width.max(44), 10, frame.area());
    frame.render_widget(Clear, area);

    let current = app.current_color(picker.target);

    let mut swatches = Vec::new();
    let mut markers = String::new();
    for (i, color) in app.palette.iter().enumerate() {
        let is_current = current.is_some_and(|c| c.same_color(color));
        let (open, close) = if is_current { ("[", "]") } else { (" ", " ") };
        swatches.push(Span::styled(open, Style::default().fg(Color::White)));
        swatches.push(Span::styled(
            format!("  {}  ", i + 1),
            Style::default()
                .bg(color.to_color())
                .fg(color.contrast_text())
                .add_modifier(if is_current {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        ));
        swatches.push(Span::styled(close, Style::default().fg(Color::White)));

        markers.push_str(if picker.cursor == i {
            "  ▲▲▲  "
        } else {
            "       "
        });
    }

    let target_name = match picker.target {
        ColorTarget::Draft => "new category".to_string(),
        ColorTarget::Category(index) => app
            .categories
            .get_index(index)
            .map(|c| c.name.clone())
            .unwrap_or_default(),
    };

    let selected = app
        .palette
        .get(picker.cursor)
        .map(|c| c.to_string())
        .unwrap_or_default();

    let pick_hint = match app.palette.len().min(9) {
        1 => "1".to_string(),
        n => format!("1-{}", n),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("For {}", target_name),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(swatches),
        Line::from(Span::styled(markers, Style::default().fg(Color::Magenta))),
        Line::from(Span::styled(selected, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("←→", Style::default().fg(Color::Yellow)),
            Span::raw(": Move  "),
            Span::styled(pick_hint, Style::default().fg(Color::Yellow)),
            Span::raw(": Pick  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Select  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(" Pick Color ")
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(paragraph, area);
}
