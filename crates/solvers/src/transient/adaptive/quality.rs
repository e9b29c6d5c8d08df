/// Compares a full step against two half steps.
///
/// Returns the largest `|full[i] - half[i]| / step` over all components, or
/// zero for an empty state. The value approximates the local truncation
/// error per unit time and is only meaningful relative to the solver's
/// tolerances, not as an error bound.
#[must_use]
pub fn quality(full: &[f64], half: &[f64], step: f64) -> f64 {
    full.iter()
        .zip(half)
        .map(|(f, h)| (f - h).abs() / step)
        .fold(0.0, f64::max)
}
