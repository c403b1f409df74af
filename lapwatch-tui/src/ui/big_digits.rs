use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub const DIGIT_HEIGHT: usize = 5;

/// 5x5 glyphs, '#' is a filled cell.
#[rustfmt::skip]
const GLYPHS: [[&str; DIGIT_HEIGHT]; 10] = [
    ["#####", "##.##", "##.##", "##.##", "#####"],
    ["...##", "...##", "...##", "...##", "...##"],
    ["#####", "...##", "#####", "##...", "#####"],
    ["#####", "...##", "#####", "...##", "#####"],
    ["##.##", "##.##", "#####", "...##", "...##"],
    ["#####", "##...", "#####", "...##", "#####"],
    ["#####", "##...", "#####", "##.##", "#####"],
    ["#####", "...##", "...##", "...##", "...##"],
    ["#####", "##.##", "#####", "##.##", "#####"],
    ["#####", "##.##", "#####", "...##", "#####"],
];

const COLON: [&str; DIGIT_HEIGHT] = ["   ", " ██", "   ", " ██", "   "];

/// Render an "HH:MM:SS" string as block digits.
pub fn render_large_time(time_str: &str, color: Color) -> Vec<Line<'static>> {
    let mut rows = vec![String::new(); DIGIT_HEIGHT];

    for ch in time_str.chars() {
        if ch == ':' {
            for (row, part) in rows.iter_mut().zip(COLON) {
                row.push_str(part);
                row.push_str("  ");
            }
        } else if let Some(d) = ch.to_digit(10) {
            for (row, pattern) in rows.iter_mut().zip(GLYPHS[d as usize]) {
                row.extend(pattern.chars().map(|c| if c == '#' { '█' } else { ' ' }));
                row.push(' ');
            }
        }
    }

    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    rows.into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_five_rows() {
        let lines = render_large_time("00:00:07", Color::White);
        assert_eq!(lines.len(), DIGIT_HEIGHT);
    }

    #[test]
    fn one_is_right_aligned_bar() {
        let lines = render_large_time("1", Color::White);
        for line in lines {
            assert_eq!(line.spans[0].content, "   ██ ");
        }
    }

    #[test]
    fn all_rows_have_equal_width() {
        let lines = render_large_time("12:34:56", Color::White);
        let width = lines[0].width();
        assert!(lines.iter().all(|l| l.width() == width));
    }
}
