/// Computes the harmonic mean of two values
///
/// ```text
/// h = 2 x y / (x + y)
/// ```
///
/// Returns zero if any of the values is zero or if the values have opposite signs.
#[inline]
pub fn harmonic_mean(x: f64, y: f64) -> f64 {
    if x * y <= 0.0 {
        return 0.0;
    }
    2.0 * x * y / (x + y)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
