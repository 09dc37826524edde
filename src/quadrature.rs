//! Nested midpoint-rule quadrature of the integrand over the unit square.
//!
//! Each axis is sampled at `n` points `i / n`, giving `n - 1` intervals per
//! axis and `(n - 1)^2` cells. The running sum visits cells row-major (x
//! outer, y inner) so repeated runs produce bit-identical results.

use std::time::{Duration, Instant};

use itertools::Itertools;
use tracing::debug;

use crate::integrand;

/// `n` evenly spaced coordinates `i / n` for `i` in `[0, n)`.
/// Non-positive `n` gives an empty grid.
pub fn grid(n: i64) -> Vec<f64> {
    let len = usize::try_from(n).unwrap_or(0);
    (0..len).map(|i| i as f64 / n as f64).collect()
}

/// Midpoint estimate of the double integral at resolution `n`.
///
/// `n <= 1` has no intervals and returns `0.0`.
pub fn integrate(n: i64) -> f64 {
    let xs = grid(n);
    let ys = grid(n);

    let mut integral = 0.0;
    for (&x0, &x1) in xs.iter().tuple_windows() {
        let xm = (x0 + x1) / 2.0;
        let dx = x1 - x0;
        for (&y0, &y1) in ys.iter().tuple_windows() {
            integral += integrand::eval(xm, (y0 + y1) / 2.0) * dx * (y1 - y0);
        }
    }
    integral
}

/// An integral estimate together with the wall time spent computing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timed {
    pub value: f64,
    pub elapsed: Duration,
}

pub fn timed_integrate(n: i64) -> Timed {
    let t0 = Instant::now();
    let value = integrate(n);
    let elapsed = t0.elapsed();
    debug!(n, value, elapsed_s = elapsed.as_secs_f64(), "integrated");
    Timed { value, elapsed }
}

pub fn abs_error(value: f64, reference: f64) -> f64 {
    (reference - value).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn grid_spacing() {
        let g = grid(4);
        assert_eq!(g, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(grid(0).is_empty());
        assert!(grid(-7).is_empty());
        assert_eq!(grid(1), vec![0.0]);
    }

    #[test]
    fn degenerate_resolutions_are_zero() {
        for n in [-5, -1, 0, 1] {
            assert_eq!(integrate(n), 0.0, "n = {}", n);
        }
    }

    #[test]
    fn single_cell() {
        // one cell [0, 0.5]^2 evaluated at (0.25, 0.25)
        let expected = integrand::eval(0.25, 0.25) * 0.25;
        assert_relative_eq!(integrate(2), expected, epsilon = 1e-15);
    }

    #[test]
    fn reproducible() {
        assert_eq!(integrate(137).to_bits(), integrate(137).to_bits());
    }

    #[test]
    fn matches_closed_form_on_covered_square() {
        // the grid stops at (n - 1) / n, so compare against the exact
        // integral over that square
        let n = 100;
        let a = (n - 1) as f64 / n as f64;
        let exact = (1.0 - a.cos()) * a.sin();
        assert_abs_diff_eq!(integrate(n), exact, epsilon = 1e-5);
    }

    #[test]
    fn abs_error_is_symmetric() {
        assert_eq!(abs_error(0.5, 0.25), 0.25);
        assert_eq!(abs_error(0.25, 0.5), 0.25);
    }

    #[test]
    fn timed_value_matches_untimed() {
        let t = timed_integrate(50);
        assert_eq!(t.value, integrate(50));
    }
}
