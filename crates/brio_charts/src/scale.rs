//! Value-to-pixel mapping shared by every chart kind.

use brio_paint::Point;

use crate::series::DataPoint;

/// Derived min/max/range mapping from data values to pixel space.
///
/// Ephemeral: recomputed on every draw, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min: f32,
    pub max: f32,
    pub range: f32,
    pub pixel_per_unit: f32,
}

impl Scale {
    /// Derive a scale over `values` for a vertical pixel span.
    ///
    /// Returns `None` for an empty slice. When all values are equal the
    /// range is coerced to 1.0 so the mapping stays total; `y_for` then
    /// places every point on the vertical midpoint.
    pub fn from_values(values: impl IntoIterator<Item = f32>, pixel_span: f32) -> Option<Self> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut seen = false;
        for v in values {
            min = min.min(v);
            max = max.max(v);
            seen = true;
        }
        if !seen {
            return None;
        }
        let range = if max - min > 0.0 { max - min } else { 1.0 };
        Some(Self {
            min,
            max,
            range,
            pixel_per_unit: pixel_span / range,
        })
    }

    /// Map a value into `[padding, padding + height]`, inverted so larger
    /// values draw higher. Flat data maps to the vertical midpoint.
    pub fn y_for(&self, value: f32, padding: f32, height: f32) -> f32 {
        if self.max == self.min {
            return padding + height * 0.5;
        }
        padding + height - (value - self.min) * height / self.range
    }

    /// Inverse of `y_for` (undefined for flat data, which has no inverse).
    pub fn value_at(&self, y: f32, padding: f32, height: f32) -> f32 {
        self.min + (padding + height - y) * self.range / height
    }
}

/// Map a series onto pixel coordinates for a padded drawing rectangle.
///
/// `width` and `height` are the drawable extents (surface size minus twice
/// the padding). Point *i* of *n* lands at `padding + i * width / (n - 1)`;
/// a single point is centered horizontally. Output is positionally aligned
/// with the input; an empty series maps to an empty vector.
pub fn map_points(data: &[DataPoint], width: f32, height: f32, padding: f32) -> Vec<Point> {
    let Some(scale) = Scale::from_values(data.iter().map(|d| d.value), height) else {
        return Vec::new();
    };
    let n = data.len();
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let x = if n > 1 {
                padding + i as f32 * (width / (n - 1) as f32)
            } else {
                padding + width * 0.5
            };
            Point::new(x, scale.y_for(d.value, padding, height))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f32]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(format!("p{i}"), v))
            .collect()
    }

    #[test]
    fn mapped_y_stays_within_padded_bounds() {
        let data = series(&[12.0, 15.0, 18.0, 14.0, 22.0, 19.0, 25.0]);
        let pts = map_points(&data, 320.0, 160.0, 40.0);
        for p in &pts {
            assert!(p.y >= 40.0 - 1e-4 && p.y <= 200.0 + 1e-4);
        }
        // Extremes land exactly on the bounds.
        assert!((pts[6].y - 40.0).abs() < 1e-4);
        assert!((pts[0].y - 200.0).abs() < 1e-4);
    }

    #[test]
    fn y_mapping_round_trips_through_invert() {
        let scale = Scale::from_values([10.0, 20.0, 30.0], 100.0).unwrap();
        let y = scale.y_for(17.0, 40.0, 100.0);
        assert!((scale.value_at(y, 40.0, 100.0) - 17.0).abs() < 1e-4);
    }

    #[test]
    fn single_point_is_centered_horizontally() {
        let pts = map_points(&series(&[5.0]), 300.0, 100.0, 40.0);
        assert_eq!(pts.len(), 1);
        assert!((pts[0].x - (40.0 + 150.0)).abs() < 1e-5);
    }

    #[test]
    fn flat_series_maps_to_vertical_midpoint() {
        let pts = map_points(&series(&[7.0, 7.0, 7.0]), 300.0, 100.0, 40.0);
        for p in &pts {
            assert!((p.y - 90.0).abs() < 1e-5);
        }
    }

    #[test]
    fn empty_series_maps_to_nothing() {
        assert!(map_points(&[], 300.0, 100.0, 40.0).is_empty());
    }

    #[test]
    fn horizontal_spacing_is_even() {
        let pts = map_points(&series(&[1.0, 2.0, 3.0, 4.0]), 300.0, 100.0, 40.0);
        let step = pts[1].x - pts[0].x;
        assert!((pts[2].x - pts[1].x - step).abs() < 1e-4);
        assert!((pts[3].x - pts[2].x - step).abs() < 1e-4);
        assert!((pts[0].x - 40.0).abs() < 1e-5);
        assert!((pts[3].x - 340.0).abs() < 1e-4);
    }
}
