//! The drawing-surface abstraction renderers paint into.
//!
//! Renderers decide *what* to draw and *where*; a `DrawSurface`
//! implementation decides how the primitives reach pixels. `PaintContext`
//! (in `context`) is the recording implementation used by backends and
//! tests.

use crate::color::Color;
use crate::gradient::Gradient;
use crate::path::{Path, Point};
use crate::primitives::{Circle, Rect};

/// Fill style for shapes
#[derive(Clone, Debug)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke style
#[derive(Clone, Debug)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    /// Round caps and joins, for smooth polylines
    pub fn rounded(mut self) -> Self {
        self.line_cap = LineCap::Round;
        self.line_join = LineJoin::Round;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text styling for `draw_text`
#[derive(Clone, Debug)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: Color::BLACK,
            align: TextAlign::Left,
            bold: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// The primitive set every paint backend provides.
pub trait DrawSurface {
    /// Clear the whole surface
    fn clear(&mut self, color: Color);

    /// Pixel-density scaling (e.g. 2.0 on a hi-dpi surface)
    fn set_pixel_scale(&mut self, scale: f32);

    fn fill_rect(&mut self, rect: Rect, style: FillStyle);

    fn fill_circle(&mut self, circle: Circle, style: FillStyle);

    fn stroke_circle(&mut self, circle: Circle, style: StrokeStyle);

    /// Stroke a connected polyline through `points`
    fn stroke_polyline(&mut self, points: &[Point], style: StrokeStyle);

    fn fill_path(&mut self, path: Path, style: FillStyle);

    fn stroke_path(&mut self, path: Path, style: StrokeStyle);

    /// Place `text` with its alignment anchor at `position`
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}
