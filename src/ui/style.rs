//! Mapping from cell formatting to terminal styles.

use std::str::FromStr;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};

use crate::grid::{
    CellContent, FontStyle, FontWeight, Padding, TextAlign, TextDecoration, TextFormat,
};

/// Pixels of cell padding per terminal cell.
const PIXELS_PER_CELL: f64 = 16.0;

/// Border style of the selected cell.
pub fn selected_border() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Border style of the cell open in the panel.
pub fn editing_border() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn plain_border() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Parse a CSS-ish color (`#rrggbb` or a color name). Unknown values and
/// `transparent` give `None`.
pub fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

/// Fill style for a leaf's background.
pub fn background(content: &CellContent) -> Style {
    content
        .background_color
        .as_deref()
        .and_then(parse_color)
        .map_or_else(Style::default, |color| Style::default().bg(color))
}

pub fn text_style(format: &TextFormat) -> Style {
    let mut style = Style::default();
    if let Some(color) = parse_color(&format.color) {
        style = style.fg(color);
    }
    if let Some(color) = parse_color(&format.background_color) {
        style = style.bg(color);
    }
    if format.font_weight == FontWeight::Bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if format.font_style == FontStyle::Italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    match format.text_decoration {
        TextDecoration::None => {}
        TextDecoration::Underline => style = style.add_modifier(Modifier::UNDERLINED),
        TextDecoration::LineThrough => style = style.add_modifier(Modifier::CROSSED_OUT),
    }
    style
}

/// Terminals cannot justify; justified text is left-aligned.
pub const fn alignment(format: &TextFormat) -> Alignment {
    match format.text_align {
        TextAlign::Left | TextAlign::Justify => Alignment::Left,
        TextAlign::Center => Alignment::Center,
        TextAlign::Right => Alignment::Right,
    }
}

/// Convert pixel padding to whole terminal cells.
pub fn block_padding(padding: Option<Padding>) -> ratatui::widgets::Padding {
    let padding = padding.unwrap_or_default();
    ratatui::widgets::Padding::new(
        to_cells(padding.left),
        to_cells(padding.right),
        to_cells(padding.top),
        to_cells(padding.bottom),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cells(pixels: f64) -> u16 {
    let cells = (pixels / PIXELS_PER_CELL).round();
    if cells.is_finite() && cells > 0.0 {
        cells.min(f64::from(u16::MAX)) as u16
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_accepts_hex_and_names() {
        assert_eq!(parse_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("transparent"), None);
    }

    #[test]
    fn test_background_uses_color_only() {
        let content = CellContent {
            background_color: Some("#000080".to_string()),
            ..CellContent::default()
        };
        assert_eq!(background(&content).bg, Some(Color::Rgb(0, 0, 128)));

        let image = CellContent {
            background_image: Some("bg.png".to_string()),
            ..CellContent::default()
        };
        assert_eq!(background(&image).bg, None);
    }

    #[test]
    fn test_text_style_maps_modifiers() {
        let format = TextFormat {
            font_weight: FontWeight::Bold,
            font_style: FontStyle::Italic,
            text_decoration: TextDecoration::LineThrough,
            ..TextFormat::default()
        };
        let style = text_style(&format);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn test_justify_falls_back_to_left() {
        let format = TextFormat {
            text_align: TextAlign::Justify,
            ..TextFormat::default()
        };
        assert_eq!(alignment(&format), Alignment::Left);
    }

    #[test]
    fn test_block_padding_rounds_pixels_to_cells() {
        let padding = block_padding(Some(Padding {
            top: 16.0,
            right: 40.0,
            bottom: 0.0,
            left: 7.0,
        }));
        assert_eq!(padding, ratatui::widgets::Padding::new(0, 3, 1, 0));
        assert_eq!(block_padding(None), ratatui::widgets::Padding::uniform(1));
    }

    #[test]
    fn test_block_padding_clamps_out_of_range_pixels() {
        let padding = block_padding(Some(Padding {
            top: 1.0e12,
            right: -48.0,
            bottom: f64::NAN,
            left: f64::INFINITY,
        }));
        assert_eq!(padding, ratatui::widgets::Padding::new(0, 0, u16::MAX, 0));
    }
}
