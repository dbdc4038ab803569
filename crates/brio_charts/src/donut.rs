//! Donut chart: proportional annulus slices with an optional center label.

use std::f32::consts::{FRAC_PI_2, TAU};

use brio_paint::{DrawSurface, PathBuilder, Point, TextStyle};

use crate::series::{total, DataPoint};
use crate::style::{palette_color, DonutStyle};
use crate::ChartSpec;

/// Angular sweep of each slice, proportional to its share of the sum.
///
/// Sweeps sum to 2π (within float error) for any positive series.
pub fn slice_sweeps(data: &[DataPoint]) -> Vec<f32> {
    let sum = total(data);
    if sum <= 0.0 {
        return vec![0.0; data.len()];
    }
    data.iter().map(|d| d.value / sum * TAU).collect()
}

pub fn render(
    spec: &ChartSpec,
    data: &[DataPoint],
    style: &DonutStyle,
    ctx: &mut dyn DrawSurface,
) -> anyhow::Result<()> {
    anyhow::ensure!(!data.is_empty(), "donut chart requires a non-empty series");

    let cx = spec.surface_width / 2.0;
    let cy = spec.surface_height / 2.0;
    let outer = (cx.min(cy) - style.edge_margin).max(0.0);
    let inner = outer * style.inner_radius_ratio;

    ctx.clear(style.bg);
    if outer <= 0.0 {
        return Ok(());
    }

    // Walk clockwise from 12 o'clock.
    let mut angle = -FRAC_PI_2;
    for (i, sweep) in slice_sweeps(data).into_iter().enumerate() {
        if sweep <= 0.0 {
            continue;
        }
        let end = angle + sweep;
        let slice = PathBuilder::new()
            .arc_to(cx, cy, outer, angle, end)
            .arc_to(cx, cy, inner, end, angle)
            .close()
            .build();
        ctx.fill_path(slice, palette_color(i).into());
        angle = end;
    }

    if let Some(center) = &spec.center_label {
        let value_text = TextStyle::new(style.center_value_size)
            .with_color(style.center_value_color)
            .with_align(brio_paint::TextAlign::Center)
            .bold();
        ctx.draw_text(&center.value, Point::new(cx, cy - 5.0), &value_text);

        let caption_text = TextStyle::new(style.center_caption_size)
            .with_color(style.center_caption_color)
            .with_align(brio_paint::TextAlign::Center);
        ctx.draw_text(&center.label, Point::new(cx, cy + 20.0), &caption_text);
    }

    Ok(())
}
