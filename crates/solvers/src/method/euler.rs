use odestep_core::{DimensionMismatch, Equation, Method};

/// Forward Euler, using the derivative at the start of the step.
///
/// ```text
/// increment[i] = h * f_i(state, t)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Method for Euler {
    fn increment(
        &self,
        state: &[f64],
        time: f64,
        step: f64,
        equations: &[&dyn Equation],
    ) -> Result<Vec<f64>, DimensionMismatch> {
        DimensionMismatch::check(state.len(), equations.len())?;

        Ok(equations
            .iter()
            .map(|equation| step * equation.derivative(state, time))
            .collect())
    }
}
