//! Paint context - the recording draw surface

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::{Circle, Rect};
use crate::surface::{DrawSurface, FillStyle, StrokeStyle, TextStyle};

/// A recorded paint command
#[derive(Clone, Debug)]
pub enum PaintCommand {
    Clear {
        color: Color,
    },
    SetPixelScale {
        scale: f32,
    },
    FillRect {
        rect: Rect,
        style: FillStyle,
    },
    FillCircle {
        circle: Circle,
        style: FillStyle,
    },
    StrokeCircle {
        circle: Circle,
        style: StrokeStyle,
    },
    StrokePolyline {
        points: Vec<Point>,
        style: StrokeStyle,
    },
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    DrawText {
        text: String,
        position: Point,
        style: TextStyle,
    },
}

/// A `DrawSurface` that records commands for a backend to execute.
///
/// One context per chart surface; `clear` via the trait resets pixels on a
/// real backend but keeps the recording growing, so hosts call
/// `take_commands` once per frame.
#[derive(Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    pixel_scale: f32,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            pixel_scale: 1.0,
        }
    }

    /// All commands recorded since the last `take_commands`
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the context empty
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn pixel_scale(&self) -> f32 {
        if self.pixel_scale > 0.0 {
            self.pixel_scale
        } else {
            1.0
        }
    }
}

impl DrawSurface for PaintContext {
    fn clear(&mut self, color: Color) {
        self.commands.push(PaintCommand::Clear { color });
    }

    fn set_pixel_scale(&mut self, scale: f32) {
        self.pixel_scale = scale;
        self.commands.push(PaintCommand::SetPixelScale { scale });
    }

    fn fill_rect(&mut self, rect: Rect, style: FillStyle) {
        self.commands.push(PaintCommand::FillRect { rect, style });
    }

    fn fill_circle(&mut self, circle: Circle, style: FillStyle) {
        self.commands.push(PaintCommand::FillCircle { circle, style });
    }

    fn stroke_circle(&mut self, circle: Circle, style: StrokeStyle) {
        self.commands
            .push(PaintCommand::StrokeCircle { circle, style });
    }

    fn stroke_polyline(&mut self, points: &[Point], style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokePolyline {
            points: points.to_vec(),
            style,
        });
    }

    fn fill_path(&mut self, path: Path, style: FillStyle) {
        self.commands.push(PaintCommand::FillPath { path, style });
    }

    fn stroke_path(&mut self, path: Path, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokePath { path, style });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(PaintCommand::DrawText {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}
