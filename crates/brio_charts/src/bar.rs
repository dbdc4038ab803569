//! Bar chart with per-category colors and value/category labels.

use brio_paint::{DrawSurface, Point, Rect, TextStyle};

use crate::format::format_grouped;
use crate::series::{max_value, DataPoint};
use crate::style::{palette_color, BarStyle};
use crate::ChartSpec;

const LABEL_OFFSET: f32 = 20.0;
const VALUE_GAP: f32 = 5.0;

pub fn render(
    spec: &ChartSpec,
    data: &[DataPoint],
    style: &BarStyle,
    ctx: &mut dyn DrawSurface,
) -> anyhow::Result<()> {
    anyhow::ensure!(!data.is_empty(), "bar chart requires a non-empty series");

    let padding = spec.padding;
    let width = spec.surface_width - padding * 2.0;
    let height = spec.surface_height - padding * 2.0;

    ctx.clear(style.bg);
    if width <= 0.0 || height <= 0.0 {
        return Ok(());
    }

    // max is Some here: data is non-empty. All-zero data draws flat bars.
    let max = max_value(data).unwrap_or(0.0);

    let slot = width / data.len() as f32;
    let bar_width = slot * style.bar_width_ratio;
    let spacing = slot * (1.0 - style.bar_width_ratio);

    let text = TextStyle::new(style.label_size)
        .with_color(style.text)
        .with_align(brio_paint::TextAlign::Center);

    for (i, d) in data.iter().enumerate() {
        let bar_height = if max > 0.0 {
            d.value / max * height
        } else {
            0.0
        };
        let x = padding + i as f32 * slot + spacing / 2.0;
        let y = padding + height - bar_height;

        ctx.fill_rect(
            Rect::new(x, y, bar_width, bar_height),
            palette_color(i).into(),
        );

        let center_x = x + bar_width / 2.0;
        ctx.draw_text(
            &format_grouped(d.value.round() as i64),
            Point::new(center_x, y - VALUE_GAP),
            &text,
        );
        ctx.draw_text(
            &d.label,
            Point::new(center_x, padding + height + LABEL_OFFSET),
            &text,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brio_paint::{PaintCommand, PaintContext};
    use crate::ChartKind;

    fn spec() -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            surface_width: 400.0,
            surface_height: 240.0,
            padding: 40.0,
            center_label: None,
        }
    }

    fn data() -> Vec<DataPoint> {
        vec![
            DataPoint::new("Q1", 100.0),
            DataPoint::new("Q2", 50.0),
            DataPoint::new("Q3", 200.0),
        ]
    }

    #[test]
    fn rejects_empty_series() {
        let mut ctx = PaintContext::new();
        assert!(render(&spec(), &[], &BarStyle::default(), &mut ctx).is_err());
    }

    #[test]
    fn tallest_bar_spans_the_full_plot_height() {
        let mut ctx = PaintContext::new();
        render(&spec(), &data(), &BarStyle::default(), &mut ctx).unwrap();
        let bars: Vec<&Rect> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                PaintCommand::FillRect { rect, .. } => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 3);
        // plot height = 240 - 80 = 160
        assert!((bars[2].height - 160.0).abs() < 1e-4);
        assert!((bars[1].height - 40.0).abs() < 1e-4);
    }

    #[test]
    fn bars_take_80_percent_of_their_slot() {
        let mut ctx = PaintContext::new();
        render(&spec(), &data(), &BarStyle::default(), &mut ctx).unwrap();
        let slot = (400.0 - 80.0) / 3.0;
        if let Some(PaintCommand::FillRect { rect, .. }) = ctx
            .commands()
            .iter()
            .find(|c| matches!(c, PaintCommand::FillRect { .. }))
        {
            assert!((rect.width - slot * 0.8).abs() < 1e-4);
            assert!((rect.x - (40.0 + slot * 0.1)).abs() < 1e-4);
        } else {
            panic!("no bar recorded");
        }
    }

    #[test]
    fn labels_value_above_and_category_below() {
        let mut ctx = PaintContext::new();
        render(&spec(), &data(), &BarStyle::default(), &mut ctx).unwrap();
        let texts: Vec<(&str, f32)> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                PaintCommand::DrawText { text, position, .. } => {
                    Some((text.as_str(), position.y))
                }
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 6);
        let baseline = 40.0 + 160.0;
        let (value_y, label_y) = (texts[0].1, texts[1].1);
        assert!(value_y < baseline);
        assert!(label_y > baseline);
        assert_eq!(texts[0].0, "100");
        assert_eq!(texts[1].0, "Q1");
    }
}
