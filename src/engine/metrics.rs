//! Engine run metrics.
//!
//! `Generator::run` is the normal path; `Generator::run_with_metrics` also
//! reports how long each stage took and how much it produced. Collection is
//! cheap (a few `Instant`s per run) so both paths share the same code.

use std::time::Duration;

use crate::api::Calendar;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Dating the definitions and filling the seasons. `produced` counts candidates.
    pub build: StageMetrics,
    /// Locale overlays. `produced` counts candidates after the overlays.
    pub overlay: StageMetrics,
    /// Transfer of impeded solemnities. `produced` counts transfers.
    pub transfer: StageMetrics,
    /// Per-day resolution. `produced` counts celebrations kept.
    pub resolve: StageMetrics,
}

/// Timing and output size of a single stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StageMetrics {
    pub duration: Duration,
    pub produced: usize,
}

/// Generator output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub calendar: Calendar,
    pub metrics: RunMetrics,
}
