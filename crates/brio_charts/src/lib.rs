//! brio_charts
//!
//! Canvas-first charts for the Brio dashboard.
//!
//! Design goals:
//! - Pure coordinate mapping and renderers over `brio_paint::DrawSurface`
//! - One recorded command stream per chart surface, backend-agnostic
//! - Frame-driven transitions owned per chart, abortable via a handle

pub mod bar;
pub mod donut;
pub mod format;
pub mod grid;
pub mod interpolate;
pub mod line;
pub mod scale;
pub mod series;
pub mod style;
pub mod transition;

pub use interpolate::{interpolate_series, lerp};
pub use scale::{map_points, Scale};
pub use series::DataPoint;
pub use style::{BarStyle, DonutStyle, LineStyle};
pub use transition::{CounterAnimation, SeriesTransition, TransitionHandle};

use brio_paint::DrawSurface;

/// The closed set of chart kinds; the render dispatch is exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Donut,
}

/// Two-line caption rendered in a donut's hole.
#[derive(Clone, Debug, PartialEq)]
pub struct CenterLabel {
    pub value: String,
    pub label: String,
}

/// Static configuration for one chart instance, passed by value into
/// render calls. Owned by the caller; the renderers hold no state.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub surface_width: f32,
    pub surface_height: f32,
    pub padding: f32,
    pub center_label: Option<CenterLabel>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, surface_width: f32, surface_height: f32, padding: f32) -> Self {
        Self {
            kind,
            surface_width,
            surface_height,
            padding,
            center_label: None,
        }
    }

    pub fn with_center_label(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.center_label = Some(CenterLabel {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Resize the target surface, keeping everything else.
    pub fn resized(mut self, width: f32, height: f32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }
}

/// Render `data` according to the spec's kind, with default styling.
pub fn render_chart(
    spec: &ChartSpec,
    data: &[DataPoint],
    ctx: &mut dyn DrawSurface,
) -> anyhow::Result<()> {
    tracing::trace!(kind = ?spec.kind, points = data.len(), "render chart");
    match spec.kind {
        ChartKind::Line => line::render(spec, data, &LineStyle::default(), ctx),
        ChartKind::Bar => bar::render(spec, data, &BarStyle::default(), ctx),
        ChartKind::Donut => donut::render(spec, data, &DonutStyle::default(), ctx),
    }
}

/// Common imports for chart users.
pub mod prelude {
    pub use crate::bar::render as render_bar;
    pub use crate::donut::render as render_donut;
    pub use crate::line::render as render_line;
    pub use crate::{
        interpolate_series, lerp, map_points, render_chart, BarStyle, CenterLabel, ChartKind,
        ChartSpec, CounterAnimation, DataPoint, DonutStyle, LineStyle, Scale, SeriesTransition,
        TransitionHandle,
    };
}
