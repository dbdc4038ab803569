//! Brio Paint API
//!
//! A 2D drawing API for dashboard graphics, similar to HTML Canvas.
//!
//! # Features
//!
//! - Path drawing (lines, arcs)
//! - Shape primitives (rect, circle)
//! - Fills and strokes with colors and gradients
//! - Text placement with alignment
//! - A command-recording surface (`PaintContext`) for backends and tests

pub mod color;
pub mod context;
pub mod gradient;
pub mod path;
pub mod primitives;
pub mod surface;

pub use color::Color;
pub use context::{PaintCommand, PaintContext};
pub use gradient::{Gradient, GradientStop};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use surface::{DrawSurface, FillStyle, LineCap, LineJoin, StrokeStyle, TextAlign, TextStyle};
