use odestep_core::{DimensionMismatch, Equation, Method};

/// Explicit midpoint method.
///
/// Takes a half Euler step to estimate the state at `t + h/2`, then uses the
/// derivative there for the full step:
///
/// ```text
/// mid[i]       = state[i] + h/2 * f_i(state, t)
/// increment[i] = h * f_i(mid, t + h/2)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Midpoint;

impl Method for Midpoint {
    fn increment(
        &self,
        state: &[f64],
        time: f64,
        step: f64,
        equations: &[&dyn Equation],
    ) -> Result<Vec<f64>, DimensionMismatch> {
        DimensionMismatch::check(state.len(), equations.len())?;

        let mid: Vec<f64> = state
            .iter()
            .zip(equations)
            .map(|(x, equation)| x + equation.derivative(state, time) * step / 2.0)
            .collect();

        let mid_time = time + step / 2.0;

        Ok(equations
            .iter()
            .map(|equation| step * equation.derivative(&mid, mid_time))
            .collect())
    }
}
