//! Visual styling for the chart renderers.

use brio_paint::Color;

/// Brand colors shared by charts and dashboard chrome.
pub fn primary() -> Color {
    Color::from_hex(0x2563EB)
}

pub fn secondary() -> Color {
    Color::from_hex(0x64748B)
}

pub fn success() -> Color {
    Color::from_hex(0x10B981)
}

pub fn warning() -> Color {
    Color::from_hex(0xF59E0B)
}

pub fn error() -> Color {
    Color::from_hex(0xEF4444)
}

/// Fixed 5-color series palette, cycled by index.
pub fn palette_color(index: usize) -> Color {
    match index % 5 {
        0 => primary(),
        1 => success(),
        2 => warning(),
        3 => error(),
        _ => secondary(),
    }
}

/// Styling for the line chart.
#[derive(Clone, Debug)]
pub struct LineStyle {
    pub bg: Color,
    pub grid: Color,
    pub axis: Color,
    pub line: Color,
    pub text: Color,
    pub stroke_width: f32,
    pub marker_radius: f32,
    pub marker_border: Color,
    pub marker_border_width: f32,
    pub label_size: f32,
    /// Horizontal grid divisions (vertical divisions follow the point count)
    pub y_divisions: usize,
    /// Evenly spaced currency labels on the Y axis
    pub y_label_count: usize,
    pub fill_top_alpha: f32,
    pub fill_bottom_alpha: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            bg: Color::WHITE,
            grid: Color::from_hex(0xE2E8F0),
            axis: secondary(),
            line: primary(),
            text: secondary(),
            stroke_width: 3.0,
            marker_radius: 6.0,
            marker_border: Color::WHITE,
            marker_border_width: 2.0,
            label_size: 12.0,
            y_divisions: 5,
            y_label_count: 6,
            fill_top_alpha: 0.2,
            fill_bottom_alpha: 0.02,
        }
    }
}

/// Styling for the bar chart.
#[derive(Clone, Debug)]
pub struct BarStyle {
    pub bg: Color,
    pub text: Color,
    pub label_size: f32,
    /// Bar width as a fraction of the per-category slot (rest is spacing)
    pub bar_width_ratio: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bg: Color::WHITE,
            text: Color::from_hex(0x1E293B),
            label_size: 12.0,
            bar_width_ratio: 0.8,
        }
    }
}

/// Styling for the donut chart.
#[derive(Clone, Debug)]
pub struct DonutStyle {
    pub bg: Color,
    /// Annulus thickness: inner radius = outer radius * this ratio
    pub inner_radius_ratio: f32,
    /// Margin between the outer radius and the surface edge
    pub edge_margin: f32,
    pub center_value_color: Color,
    pub center_value_size: f32,
    pub center_caption_color: Color,
    pub center_caption_size: f32,
}

impl Default for DonutStyle {
    fn default() -> Self {
        Self {
            bg: Color::WHITE,
            inner_radius_ratio: 0.6,
            edge_margin: 20.0,
            center_value_color: Color::from_hex(0x1E293B),
            center_value_size: 24.0,
            center_caption_color: secondary(),
            center_caption_size: 14.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(palette_color(0), palette_color(5));
        assert_eq!(palette_color(4), secondary());
    }
}
