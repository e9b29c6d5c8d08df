use odestep_core::{DimensionMismatch, Equation, Method};

/// Classical fourth-order Runge–Kutta.
///
/// ```text
/// k0 = f(x0, t)
/// k1 = f(x0 + h/2 * k0, t + h/2)
/// k2 = f(x0 + h/2 * k1, t + h/2)
/// k3 = f(x0 + h * k2, t + h)
/// increment = h/6 * (k0 + 2*k1 + 2*k2 + k3)
/// ```
///
/// The trial state is a single buffer that each stage overwrites component
/// by component while evaluating. Within a stage, equation `i` therefore sees
/// components `0..i` already moved to the next trial point. Results depend on
/// this ordering, so it must not be changed to build each trial state in full
/// before evaluating it.
///
/// For a single equation this is exactly classical RK4. For coupled systems
/// the mixed trial states drop the method to first order; see
/// [`ClassicalRk4`](super::ClassicalRk4) for the textbook construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Method for Rk4 {
    fn increment(
        &self,
        state: &[f64],
        time: f64,
        step: f64,
        equations: &[&dyn Equation],
    ) -> Result<Vec<f64>, DimensionMismatch> {
        DimensionMismatch::check(state.len(), equations.len())?;

        let n = state.len();
        let half = step / 2.0;

        let mut k0 = vec![0.0; n];
        let mut k1 = vec![0.0; n];
        let mut k2 = vec![0.0; n];
        let mut k3 = vec![0.0; n];
        let mut trial = vec![0.0; n];

        for (i, equation) in equations.iter().enumerate() {
            k0[i] = equation.derivative(state, time);
            trial[i] = state[i] + half * k0[i];
        }

        for (i, equation) in equations.iter().enumerate() {
            k1[i] = equation.derivative(&trial, time + half);
            trial[i] = state[i] + half * k1[i];
        }

        for (i, equation) in equations.iter().enumerate() {
            k2[i] = equation.derivative(&trial, time + half);
            trial[i] = state[i] + step * k2[i];
        }

        for (i, equation) in equations.iter().enumerate() {
            k3[i] = equation.derivative(&trial, time + step);
        }

        Ok((0..n)
            .map(|i| step / 6.0 * (k0[i] + 2.0 * k1[i] + 2.0 * k2[i] + k3[i]))
            .collect())
    }
}
