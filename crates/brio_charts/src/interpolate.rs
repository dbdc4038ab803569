//! Linear interpolation between data snapshots.

use crate::series::DataPoint;

/// Lerp with exact endpoints: `t <= 0` yields `a`, `t >= 1` yields `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

/// Interpolate each point's value from `from` toward `to`.
///
/// Sequences must be equal length and same order (the caller's contract;
/// `SeriesTransition` validates it). Labels are taken from `to`.
pub fn interpolate_series(from: &[DataPoint], to: &[DataPoint], t: f32) -> Vec<DataPoint> {
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| DataPoint::new(b.label.clone(), lerp(a.value, b.value, t)))
        .collect()
}
