use crate::{DimensionMismatch, Equation};

/// A single-step integration scheme.
///
/// Given the current state, time, and step size, a method evaluates the
/// equations and returns the increment that advances the state by one step:
/// `next[i] = state[i] + increment[i]`. Methods never modify `state`.
///
/// Any function with the same shape is a method, so custom schemes can be
/// plugged into the solvers alongside the built-in ones.
pub trait Method {
    /// Computes the increment for one step of size `step` starting at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `equations` does not have exactly one
    /// entry per state component.
    fn increment(
        &self,
        state: &[f64],
        time: f64,
        step: f64,
        equations: &[&dyn Equation],
    ) -> Result<Vec<f64>, DimensionMismatch>;
}

impl<F> Method for F
where
    F: Fn(&[f64], f64, f64, &[&dyn Equation]) -> Result<Vec<f64>, DimensionMismatch>,
{
    fn increment(
        &self,
        state: &[f64],
        time: f64,
        step: f64,
        equations: &[&dyn Equation],
    ) -> Result<Vec<f64>, DimensionMismatch> {
        self(state, time, step, equations)
    }
}
