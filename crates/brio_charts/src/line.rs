//! Line chart with markers, axis labels, and a gradient area fill.

use brio_paint::{Circle, DrawSurface, Gradient, PathBuilder, Point, StrokeStyle, TextStyle};

use crate::grid::{draw_axes, draw_grid};
use crate::scale::{map_points, Scale};
use crate::series::DataPoint;
use crate::style::LineStyle;
use crate::{format::format_currency, ChartSpec};

const X_LABEL_OFFSET: f32 = 20.0;
const Y_LABEL_GAP: f32 = 10.0;

pub fn render(
    spec: &ChartSpec,
    data: &[DataPoint],
    style: &LineStyle,
    ctx: &mut dyn DrawSurface,
) -> anyhow::Result<()> {
    anyhow::ensure!(!data.is_empty(), "line chart requires a non-empty series");

    let padding = spec.padding;
    let width = spec.surface_width - padding * 2.0;
    let height = spec.surface_height - padding * 2.0;

    ctx.clear(style.bg);
    if width <= 0.0 || height <= 0.0 {
        return Ok(());
    }

    draw_grid(
        ctx,
        padding,
        width,
        height,
        data.len(),
        style.y_divisions,
        style.grid,
    );
    draw_axes(ctx, padding, width, height, style.axis);

    let points = map_points(data, width, height, padding);

    if points.len() >= 2 {
        ctx.stroke_polyline(
            &points,
            StrokeStyle::new(style.line, style.stroke_width).rounded(),
        );
    }

    for p in &points {
        let marker = Circle::new(*p, style.marker_radius);
        ctx.fill_circle(marker, style.line.into());
        ctx.stroke_circle(
            marker,
            StrokeStyle::new(style.marker_border, style.marker_border_width),
        );
    }

    let x_text = TextStyle::new(style.label_size)
        .with_color(style.text)
        .with_align(brio_paint::TextAlign::Center);
    for (d, p) in data.iter().zip(&points) {
        ctx.draw_text(
            &d.label,
            Point::new(p.x, padding + height + X_LABEL_OFFSET),
            &x_text,
        );
    }

    // Scale is Some here: data is non-empty.
    if let Some(scale) = Scale::from_values(data.iter().map(|d| d.value), height) {
        let y_text = TextStyle::new(style.label_size)
            .with_color(style.text)
            .with_align(brio_paint::TextAlign::Right);
        let steps = style.y_label_count.max(2) - 1;
        let span = scale.max - scale.min;
        for i in 0..=steps {
            let value = scale.min + span * i as f32 / steps as f32;
            let y = padding + height - i as f32 * height / steps as f32;
            ctx.draw_text(
                &format_currency(value),
                Point::new(padding - Y_LABEL_GAP, y + 4.0),
                &y_text,
            );
        }
    }

    // Decorative area fill, polyline down to the baseline, fading downward.
    let mut builder = PathBuilder::new().move_to(padding, padding + height);
    for p in &points {
        builder = builder.line_to(p.x, p.y);
    }
    let area = builder
        .line_to(padding + width, padding + height)
        .close()
        .build();
    let fade = Gradient::between(
        Point::new(0.0, padding),
        Point::new(0.0, padding + height),
        style.line.with_alpha(style.fill_top_alpha),
        style.line.with_alpha(style.fill_bottom_alpha),
    );
    ctx.fill_path(area, fade.into());

    Ok(())
}
