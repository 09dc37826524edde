/// The integrand sin(x)·cos(y).
#[inline]
pub fn eval(x: f64, y: f64) -> f64 {
    x.sin() * y.cos()
}
