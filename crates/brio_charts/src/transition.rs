//! Frame-driven animated transitions between data snapshots.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::interpolate::interpolate_series;
use crate::series::DataPoint;

/// Handle for aborting an in-flight transition.
///
/// Cancellation freezes the transition at its current value and makes it
/// report finished, so the driving loop drops it on the next frame instead
/// of having to track stale callbacks.
#[derive(Clone, Debug)]
pub struct TransitionHandle(Arc<AtomicBool>);

impl TransitionHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Timed linear interpolation between two equal-length series.
///
/// Owns its progress; concurrent transitions on different charts do not
/// interact. Advance with `step(dt)` from the host's per-frame callback.
pub struct SeriesTransition {
    from: Vec<DataPoint>,
    to: Vec<DataPoint>,
    duration: f32,
    elapsed: f32,
    cancelled: Arc<AtomicBool>,
}

impl SeriesTransition {
    pub fn new(
        from: Vec<DataPoint>,
        to: Vec<DataPoint>,
        duration_seconds: f32,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(!from.is_empty(), "transition requires a non-empty series");
        anyhow::ensure!(
            from.len() == to.len(),
            "transition requires equal-length series (from={}, to={})",
            from.len(),
            to.len()
        );
        Ok(Self {
            from,
            to,
            duration: duration_seconds.max(1e-6),
            elapsed: 0.0,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn handle(&self) -> TransitionHandle {
        TransitionHandle(self.cancelled.clone())
    }

    pub fn step(&mut self, dt_seconds: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed = (self.elapsed + dt_seconds.max(0.0)).min(self.duration);
    }

    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// The interpolated series at the current progress.
    ///
    /// At completion this is the exact target sequence, not a lerped copy.
    pub fn current(&self) -> Vec<DataPoint> {
        if self.elapsed >= self.duration && !self.cancelled.load(Ordering::Relaxed) {
            return self.to.clone();
        }
        interpolate_series(&self.from, &self.to, self.progress())
    }

    pub fn target(&self) -> &[DataPoint] {
        &self.to
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.elapsed >= self.duration
    }
}

fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

/// Eased integer counter for KPI cards (fast start, gentle settle).
#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
}

impl CounterAnimation {
    pub fn new(start: f32, end: f32, duration_seconds: f32) -> Self {
        Self {
            start,
            end,
            duration: duration_seconds.max(1e-6),
            elapsed: 0.0,
        }
    }

    pub fn step(&mut self, dt_seconds: f32) {
        self.elapsed = (self.elapsed + dt_seconds.max(0.0)).min(self.duration);
    }

    pub fn value(&self) -> f32 {
        if self.elapsed >= self.duration {
            return self.end;
        }
        let t = ease_out_quart(self.elapsed / self.duration);
        (self.start + (self.end - self.start) * t).floor()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
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
    fn transition_reaches_exact_target() {
        let mut tr = SeriesTransition::new(series(&[0.0, 10.0]), series(&[100.0, 0.0]), 1.0)
            .expect("valid transition");
        tr.step(0.4);
        let mid = tr.current();
        assert!(mid[0].value > 0.0 && mid[0].value < 100.0);
        tr.step(0.6);
        assert!(tr.is_finished());
        assert_eq!(tr.current(), series(&[100.0, 0.0]));
    }

    #[test]
    fn zero_progress_yields_source_exactly() {
        let tr = SeriesTransition::new(series(&[0.1, 0.2]), series(&[0.3, 0.4]), 1.0).unwrap();
        let start = tr.current();
        assert_eq!(start[0].value, 0.1);
        assert_eq!(start[1].value, 0.2);
    }

    #[test]
    fn rejects_empty_and_mismatched_series() {
        assert!(SeriesTransition::new(Vec::new(), Vec::new(), 1.0).is_err());
        assert!(SeriesTransition::new(series(&[1.0]), series(&[1.0, 2.0]), 1.0).is_err());
    }

    #[test]
    fn cancelled_transition_freezes_and_finishes() {
        let mut tr = SeriesTransition::new(series(&[0.0]), series(&[100.0]), 1.0).unwrap();
        tr.step(0.5);
        let frozen = tr.current()[0].value;
        tr.handle().cancel();
        assert!(tr.is_finished());
        tr.step(0.5);
        assert_eq!(tr.current()[0].value, frozen);
    }

    #[test]
    fn counter_settles_on_exact_end() {
        let mut c = CounterAnimation::new(0.0, 1234.0, 2.0);
        c.step(0.5);
        let early = c.value();
        assert!(early > 0.0 && early < 1234.0);
        c.step(2.0);
        assert!(c.is_finished());
        assert_eq!(c.value(), 1234.0);
    }

    #[test]
    fn counter_ease_front_loads_movement() {
        let mut c = CounterAnimation::new(0.0, 1000.0, 1.0);
        c.step(0.5);
        // Ease-out-quart covers ~94% of the distance by half time.
        assert!(c.value() > 900.0);
    }
}
