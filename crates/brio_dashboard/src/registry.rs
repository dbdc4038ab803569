//! Chart instances owned by the dashboard.
//!
//! Explicit replacement for an ambient chart-manager singleton: the host
//! constructs a registry, registers each chart with its spec and data, and
//! drives everything from its per-frame callback. Each chart draws into its
//! own recording surface; instances never share state.

use brio_charts::{render_chart, ChartSpec, DataPoint, SeriesTransition, TransitionHandle};
use brio_paint::{DrawSurface, PaintCommand, PaintContext};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::error::DashboardError;

new_key_type! {
    pub struct ChartKey;
}

struct ChartEntry {
    spec: ChartSpec,
    data: Vec<DataPoint>,
    transition: Option<SeriesTransition>,
    surface: PaintContext,
}

impl ChartEntry {
    /// The series currently on screen: mid-transition frames show the
    /// interpolated snapshot, otherwise the settled data.
    fn displayed(&self) -> Vec<DataPoint> {
        match &self.transition {
            Some(tr) => tr.current(),
            None => self.data.clone(),
        }
    }

    fn render(&mut self) {
        let frame = self.displayed();
        if let Err(err) = render_chart(&self.spec, &frame, &mut self.surface) {
            tracing::warn!(error = %err, "chart render skipped");
        }
    }
}

pub struct ChartRegistry {
    charts: SlotMap<ChartKey, ChartEntry>,
    by_name: FxHashMap<String, ChartKey>,
    pixel_scale: f32,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::with_pixel_scale(2.0)
    }

    /// `pixel_scale` is forwarded to every chart surface (hi-dpi rendering).
    pub fn with_pixel_scale(pixel_scale: f32) -> Self {
        Self {
            charts: SlotMap::with_key(),
            by_name: FxHashMap::default(),
            pixel_scale: pixel_scale.max(0.1),
        }
    }

    /// Register a chart and paint its first frame.
    pub fn insert(
        &mut self,
        name: &str,
        spec: ChartSpec,
        data: Vec<DataPoint>,
    ) -> Result<ChartKey, DashboardError> {
        if data.is_empty() {
            return Err(DashboardError::EmptySeries);
        }
        if self.by_name.contains_key(name) {
            return Err(DashboardError::DuplicateChart(name.to_string()));
        }
        let mut entry = ChartEntry {
            spec,
            data,
            transition: None,
            surface: PaintContext::new(),
        };
        entry.surface.set_pixel_scale(self.pixel_scale);
        entry.render();
        let key = self.charts.insert(entry);
        self.by_name.insert(name.to_string(), key);
        Ok(key)
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut ChartEntry> {
        match self.by_name.get(name) {
            Some(&key) => self.charts.get_mut(key),
            None => {
                tracing::debug!(chart = name, "chart surface not found, skipping");
                None
            }
        }
    }

    /// Start an animated transition to `new_data`.
    ///
    /// An in-flight transition is cancelled and the new one starts from its
    /// frozen frame, so the chart never jumps. An unknown chart name is a
    /// silent no-op (`Ok(None)`); bad input is an error.
    pub fn update_data(
        &mut self,
        name: &str,
        new_data: Vec<DataPoint>,
        duration_seconds: f32,
    ) -> Result<Option<TransitionHandle>, DashboardError> {
        if new_data.is_empty() {
            return Err(DashboardError::EmptySeries);
        }
        let Some(entry) = self.entry_mut(name) else {
            return Ok(None);
        };

        // The displayed series is as long as entry.data, which insert
        // guarantees non-empty; with empty updates ruled out above, the
        // only constructor failure left is a length mismatch.
        let current = entry.data.len();
        let update = new_data.len();
        let from = entry.displayed();
        let transition = SeriesTransition::new(from, new_data, duration_seconds)
            .map_err(|_| DashboardError::SeriesLengthMismatch { current, update })?;

        if let Some(stale) = entry.transition.take() {
            stale.handle().cancel();
        }
        let handle = transition.handle();
        entry.transition = Some(transition);
        Ok(Some(handle))
    }

    /// Per-frame advance: step transitions, repaint animating charts, and
    /// settle the finished ones on their exact target.
    pub fn tick(&mut self, dt_seconds: f32) {
        for (_, entry) in self.charts.iter_mut() {
            let Some(tr) = entry.transition.as_mut() else {
                continue;
            };
            tr.step(dt_seconds);
            if tr.is_finished() {
                let settled = entry
                    .transition
                    .take()
                    .map(|tr| {
                        if tr.handle().is_cancelled() {
                            tr.current()
                        } else {
                            tr.target().to_vec()
                        }
                    })
                    .unwrap_or_default();
                entry.data = settled;
            }
            entry.render();
        }
    }

    /// Synchronous full redraw after a viewport resize.
    ///
    /// `measure` maps a chart name to its new surface size; charts it
    /// cannot measure keep their size. Last-known data is redrawn as-is,
    /// no animation is replayed.
    pub fn resize_all(&mut self, mut measure: impl FnMut(&str) -> Option<(f32, f32)>) {
        for (name, &key) in &self.by_name {
            let Some(entry) = self.charts.get_mut(key) else {
                continue;
            };
            if let Some((w, h)) = measure(name) {
                entry.spec = entry.spec.clone().resized(w, h);
            }
            entry.render();
        }
    }

    /// Drain the recorded command stream for the host backend to execute.
    pub fn take_commands(&mut self, name: &str) -> Option<Vec<PaintCommand>> {
        self.entry_mut(name).map(|e| e.surface.take_commands())
    }

    pub fn data_of(&self, name: &str) -> Option<&[DataPoint]> {
        self.by_name
            .get(name)
            .and_then(|&key| self.charts.get(key))
            .map(|e| e.data.as_slice())
    }

    pub fn is_animating(&self, name: &str) -> bool {
        self.by_name
            .get(name)
            .and_then(|&key| self.charts.get(key))
            .is_some_and(|e| e.transition.is_some())
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::new()
    }
}
