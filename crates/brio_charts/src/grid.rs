//! Background grid and axis painting shared by the XY charts.

use brio_paint::{Color, DrawSurface, Rect};

/// Paint the background grid for a padded plot rectangle.
///
/// Vertical lines follow the category count (`x_divisions` points produce
/// `x_divisions` lines, one per mapped X position); horizontal lines split
/// the plot into `y_divisions` bands.
pub fn draw_grid(
    ctx: &mut dyn DrawSurface,
    padding: f32,
    width: f32,
    height: f32,
    x_divisions: usize,
    y_divisions: usize,
    color: Color,
) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    if x_divisions > 1 {
        let step = width / (x_divisions - 1) as f32;
        for i in 0..x_divisions {
            let x = padding + i as f32 * step;
            ctx.fill_rect(Rect::new(x, padding, 1.0, height), color.into());
        }
    }

    let y_divisions = y_divisions.max(1);
    for i in 0..=y_divisions {
        let y = padding + i as f32 * height / y_divisions as f32;
        ctx.fill_rect(Rect::new(padding, y, width, 1.0), color.into());
    }
}

/// Paint the X and Y axis lines along the left and bottom plot edges.
pub fn draw_axes(ctx: &mut dyn DrawSurface, padding: f32, width: f32, height: f32, color: Color) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    ctx.fill_rect(Rect::new(padding, padding + height, width, 2.0), color.into());
    ctx.fill_rect(Rect::new(padding, padding, 2.0, height), color.into());
}
