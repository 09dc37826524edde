//! Error-versus-resolution sweep behind the "graph" mode.

use indicatif::ProgressBar;
use tracing::info;

use crate::config::SweepConfig;
use crate::quadrature::{abs_error, timed_integrate};

/// One sample of the sweep: the estimate at resolution `n` and how far it
/// lands from the reference value.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepPoint {
    pub n: i64,
    pub value: f64,
    pub error: f64,
    pub elapsed_s: f64,
}

/// Integrate at every resolution of `cfg`, in order.
pub fn run(cfg: &SweepConfig) -> Vec<SweepPoint> {
    run_with_progress(cfg, &ProgressBar::hidden())
}

/// Same as [`run`], advancing `pb` once per resolution.
pub fn run_with_progress(cfg: &SweepConfig, pb: &ProgressBar) -> Vec<SweepPoint> {
    let points: Vec<SweepPoint> = cfg
        .resolutions()
        .map(|n| {
            let t = timed_integrate(n);
            pb.inc(1);
            SweepPoint {
                n,
                value: t.value,
                error: abs_error(t.value, cfg.reference),
                elapsed_s: t.elapsed.as_secs_f64(),
            }
        })
        .collect();

    let total_s: f64 = points.iter().map(|p| p.elapsed_s).sum();
    info!(points = points.len(), total_s, "sweep finished");
    points
}
