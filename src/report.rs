use std::fmt;

use crate::quadrature::{abs_error, Timed};

/// The three-line result of a single run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub integral: f64,
    pub seconds: f64,
    pub diff: f64,
}

impl Report {
    pub fn new(timed: Timed, reference: f64) -> Self {
        Self {
            integral: timed.value,
            seconds: timed.elapsed.as_secs_f64(),
            diff: abs_error(timed.value, reference),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Integral: {}", self.integral)?;
        writeln!(f, "Time: {} sec", self.seconds)?;
        write!(f, "Diff: {}", self.diff)
    }
}
