/// Presumed true value of the integral of sin(x)·cos(y) over the unit square.
/// Used only when reporting the error of an estimate.
pub const REFERENCE_INTEGRAL: f64 = 0.3868223;

// --- graph sweep ---
pub const SWEEP_START: i64 = 500;
pub const SWEEP_END: i64 = 10_000; // exclusive
pub const SWEEP_STEP: i64 = 100;

/// Range of resolutions visited by the "graph" mode and the value errors are
/// measured against.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    pub start: i64,
    pub end: i64,
    pub step: i64,
    pub reference: f64,
}

impl SweepConfig {
    pub fn new(start: i64, end: i64, step: i64) -> Self {
        Self { start, end, step, reference: REFERENCE_INTEGRAL }
    }

    /// Resolutions `start, start + step, ...` strictly below `end`.
    /// A non-positive step yields nothing.
    pub fn resolutions(&self) -> impl Iterator<Item = i64> {
        let (start, end) = (self.start, self.end);
        let step = usize::try_from(self.step).unwrap_or(0);
        // step_by(0) panics
        (start..end).step_by(step.max(1)).take_while(move |_| step > 0)
    }

    pub fn len(&self) -> usize {
        self.resolutions().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(SWEEP_START, SWEEP_END, SWEEP_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_matches_graph_mode() {
        let cfg = SweepConfig::default();
        let ns: Vec<i64> = cfg.resolutions().collect();
        assert_eq!(ns.len(), 95);
        assert_eq!(ns.first(), Some(&500));
        assert_eq!(ns.last(), Some(&9900));
        assert!(ns.windows(2).all(|w| w[1] - w[0] == 100));
        assert_eq!(cfg.reference, REFERENCE_INTEGRAL);
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        assert!(SweepConfig::new(10, 10, 1).is_empty());
        assert!(SweepConfig::new(10, 5, 1).is_empty());
        assert!(SweepConfig::new(0, 10, 0).is_empty());
        assert!(SweepConfig::new(0, 10, -3).is_empty());
        assert_eq!(SweepConfig::new(2, 11, 3).len(), 3);
    }
}
