use super::utils::to_local_time;
use crate::app::{format_secs, Category, Lap};
use crate::types::HexColor;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Chip background for laps that have no category yet.
const UNSET_CHIP_BG: Color = Color::Rgb(0xee, 0xee, 0xee);

/// A colored chip with the category name, or a placeholder when unset.
pub fn category_chip(category: Option<&Category>) -> Span<'static> {
    match category {
        Some(c) => Span::styled(
            format!(" {} ", c.name),
            Style::default()
                .bg(c.color.to_color())
                .fg(c.color.contrast_text()),
        ),
        None => Span::styled(
            " Set category ",
            Style::default().bg(UNSET_CHIP_BG).fg(Color::Black),
        ),
    }
}

/// A small block of solid color.
pub fn swatch(color: &HexColor) -> Span<'static> {
    Span::styled("   ", Style::default().bg(color.to_color()))
}

pub fn build_lap_row(lap: &Lap, category: Option<&Category>, is_focused: bool) -> Line<'static> {
    let recorded = to_local_time(lap.recorded_at).time();
    let recorded_str = format!(
        "{:02}:{:02}:{:02}",
        recorded.hour(),
        recorded.minute(),
        recorded.second()
    );

    let label_style = if is_focused {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("Lap {:>3}", lap.number), label_style),
        Span::styled("  ", Style::default()),
        Span::styled(format_secs(lap.time), Style::default().fg(Color::Yellow)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("at {} ", recorded_str),
            Style::default().fg(Color::DarkGray),
        ),
        category_chip(category),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CategoryId;
    use crate::types::hex;
    use time::OffsetDateTime;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lap_row_shows_number_time_and_placeholder() {
        let lap = Lap {
            number: 2,
            time: 65,
            recorded_at: OffsetDateTime::now_utc(),
            category: None,
        };
        let text = line_text(&build_lap_row(&lap, None, false));
        assert!(text.starts_with("Lap   2  00:01:05"));
        assert!(text.ends_with(" Set category "));
    }

    #[test]
    fn chip_uses_category_color() {
        let category = Category {
            id: CategoryId(0),
            name: "Study".to_string(),
            color: hex("#FF6666"),
        };
        let chip = category_chip(Some(&category));
        assert_eq!(chip.content, " Study ");
        assert_eq!(chip.style.bg, Some(Color::Rgb(0xff, 0x66, 0x66)));
    }
}
