//! Colours, fonts, titles, and mesh styling shared by the charts.

use crate::traits::Canvas;
use fraudviz_common::Result;
use fraudviz_config::StyleConfig;
use plotters::chart::MeshStyle;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

/// ColorBrewer "Blues" stops, light to dark.
const BLUES: [RGBColor; 9] = [
    RGBColor(247, 251, 255),
    RGBColor(222, 235, 247),
    RGBColor(198, 219, 239),
    RGBColor(158, 202, 225),
    RGBColor(107, 174, 214),
    RGBColor(66, 146, 198),
    RGBColor(33, 113, 181),
    RGBColor(8, 81, 156),
    RGBColor(8, 48, 107),
];

/// Parse a `#rrggbb` colour string, falling back to black.
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Resolved colours for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    /// Non-fraud / legitimate series.
    pub legit: RGBColor,
    /// Fraud series.
    pub fraud: RGBColor,
    /// Canvas background.
    pub background: RGBColor,
    /// Grid lines.
    pub grid: RGBColor,
}

impl ChartPalette {
    /// Resolves the palette from the styling block.
    pub fn from_style(style: &StyleConfig) -> Self {
        Self {
            legit: parse_color(&style.legit_color),
            fraud: parse_color(&style.fraud_color),
            background: parse_color(&style.background_color),
            grid: parse_color(&style.grid_color),
        }
    }
}

/// Font of the given pixel size in the configured family.
pub fn font(style: &StyleConfig, size: u32) -> FontDesc<'_> {
    (style.font_family.as_str(), size).into_font()
}

/// Sequential blue colour map over `t` in `[0, 1]`.
pub fn blues(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (BLUES.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(BLUES.len() - 1);
    let frac = scaled - lower as f64;
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
    let (a, b) = (BLUES[lower], BLUES[upper]);
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Text colour readable on top of `background`.
pub fn contrasting_text(background: RGBColor) -> RGBColor {
    let luminance = 0.0722_f64.mul_add(
        f64::from(background.2),
        0.2126_f64.mul_add(f64::from(background.0), 0.7152 * f64::from(background.1)),
    );
    if luminance < 140.0 {
        WHITE
    } else {
        BLACK
    }
}

/// Draws a centred title (one line per `\n`) and returns the area below it.
pub fn draw_title<'a>(root: &Canvas<'a>, style: &StyleConfig, title: &str) -> Result<Canvas<'a>> {
    let size = style.title_size() as i32;
    let line_height = size + 6;
    let lines: Vec<&str> = title.lines().collect();
    let header_height = line_height * lines.len() as i32 + 20;

    let (header, body) = root.split_vertically(header_height);
    let (width, _) = header.dim_in_pixel();
    let text_style = font(style, style.title_size())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, line) in lines.iter().enumerate() {
        header.draw_text(line, &text_style, (width as i32 / 2, 12 + i as i32 * line_height))?;
    }
    Ok(body)
}

/// Applies fonts and the whitegrid look to a mesh.
pub fn style_mesh<'a, 'b, X, Y>(
    mesh: &mut MeshStyle<'a, 'b, X, Y, BitMapBackend<'_>>,
    style: &'b StyleConfig,
) where
    X: Ranged,
    Y: Ranged,
{
    let palette = ChartPalette::from_style(style);
    mesh.axis_desc_style(font(style, style.label_size()))
        .label_style(font(style, style.tick_size()))
        .light_line_style(TRANSPARENT);
    if style.show_grid {
        mesh.bold_line_style(palette.grid);
    } else {
        mesh.disable_mesh();
    }
}

/// Axis range placing `count` categories at the integers `0..count`.
pub fn category_range(count: usize) -> Range<f64> {
    -0.5..(count as f64 - 0.5)
}

/// Tick budget that makes the numeric axis land ticks on every category.
pub const fn category_ticks(count: usize) -> usize {
    count + 1
}

/// Label for a categorical tick, or empty between categories.
pub fn category_label(value: f64, categories: &[&str]) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    categories
        .get(index as usize)
        .map(|label| (*label).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::coord::types::RangedCoordf64;

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(parse_color("#2ecc71"), RGBColor(46, 204, 113));
        assert_eq!(parse_color("#e74c3c"), RGBColor(231, 76, 60));

        // Invalid colours default to black
        assert_eq!(parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(parse_color("#ZZ0000"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_palette_from_default_style() {
        let palette = ChartPalette::from_style(&StyleConfig::default());
        assert_eq!(palette.legit, RGBColor(46, 204, 113));
        assert_eq!(palette.fraud, RGBColor(231, 76, 60));
        assert_eq!(palette.background, RGBColor(255, 255, 255));
    }

    #[test]
    fn test_blues_endpoints() {
        assert_eq!(blues(0.0), RGBColor(247, 251, 255));
        assert_eq!(blues(1.0), RGBColor(8, 48, 107));
        assert_eq!(blues(-1.0), blues(0.0));
        assert_eq!(blues(2.0), blues(1.0));
        assert_eq!(blues(f64::NAN), blues(0.0));
    }

    #[test]
    fn test_blues_darkens_monotonically() {
        let sum = |c: RGBColor| u32::from(c.0) + u32::from(c.1) + u32::from(c.2);
        let mut previous = sum(blues(0.0));
        for step in 1..=20 {
            let current = sum(blues(f64::from(step) / 20.0));
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_contrasting_text() {
        assert_eq!(contrasting_text(blues(1.0)), WHITE);
        assert_eq!(contrasting_text(blues(0.0)), BLACK);
    }

    #[test]
    fn test_category_axis_ticks_hit_every_category() {
        let labels = ["Non-Fraud", "Fraud"];
        let axis: RangedCoordf64 = category_range(labels.len()).into();
        let ticks: Vec<String> = axis
            .key_points(category_ticks(labels.len()))
            .into_iter()
            .map(|x| category_label(x, &labels))
            .collect();
        assert_eq!(ticks, vec!["Non-Fraud", "Fraud"]);
    }

    #[test]
    fn test_category_label() {
        let labels = ["Non-Fraud", "Fraud"];
        assert_eq!(category_label(0.0, &labels), "Non-Fraud");
        assert_eq!(category_label(1.0, &labels), "Fraud");
        assert_eq!(category_label(0.5, &labels), "");
        assert_eq!(category_label(2.0, &labels), "");
        assert_eq!(category_label(-1.0, &labels), "");
    }
}
