//! Dashboard error taxonomy

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("chart requires a non-empty series")]
    EmptySeries,

    #[error("series length mismatch: current has {current} points, update has {update}")]
    SeriesLengthMismatch { current: usize, update: usize },

    #[error("chart name already registered: {0}")]
    DuplicateChart(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),
}
