//! Gradient fills

use crate::color::Color;
use crate::path::Point;

/// A color stop along a gradient, `offset` in `[0, 1]`
#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// A linear color ramp between two anchor points in surface space.
#[derive(Clone, Debug)]
pub struct Gradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn new(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Self { start, end, stops }
    }

    /// Two-stop ramp: `from` at the start point, `to` at the end point
    pub fn between(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self::new(
            start,
            end,
            vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        )
    }
}
