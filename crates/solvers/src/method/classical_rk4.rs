use odestep_core::{DimensionMismatch, Equation, Method};

/// Fourth-order Runge–Kutta with every trial state built in full.
///
/// Same tableau as [`Rk4`](super::Rk4), but each stage is evaluated at a
/// trial state computed entirely from the previous stage. This keeps fourth
/// order accuracy for coupled systems, at the cost of not reproducing
/// [`Rk4`](super::Rk4) results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalRk4;

impl Method for ClassicalRk4 {
    fn increment(
        &self,
        state: &[f64],
        time: f64,
        step: f64,
        equations: &[&dyn Equation],
    ) -> Result<Vec<f64>, DimensionMismatch> {
        DimensionMismatch::check(state.len(), equations.len())?;

        let half = step / 2.0;
        let derivatives = |trial: &[f64], t: f64| -> Vec<f64> {
            equations.iter().map(|e| e.derivative(trial, t)).collect()
        };
        let advance = |k: &[f64], h: f64| -> Vec<f64> {
            state.iter().zip(k).map(|(x, k)| x + h * k).collect()
        };

        let k0 = derivatives(state, time);
        let k1 = derivatives(&advance(&k0, half), time + half);
        let k2 = derivatives(&advance(&k1, half), time + half);
        let k3 = derivatives(&advance(&k2, step), time + step);

        Ok((0..state.len())
            .map(|i| step / 6.0 * (k0[i] + 2.0 * k1[i] + 2.0 * k2[i] + k3[i]))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::method::Rk4;

    #[test]
    fn integrates_cubic_exactly() {
        // x' = t, y' = x from zero: y(1) = 1/6.
        let dxdt = |_: &[f64], t: f64| t;
        let dydt = |s: &[f64], _t: f64| s[0];
        let equations: [&dyn Equation; 2] = [&dxdt, &dydt];

        let increment = ClassicalRk4
            .increment(&[0.0, 0.0], 0.0, 1.0, &equations)
            .expect("dimensions match");

        assert_relative_eq!(increment[0], 0.5);
        assert_relative_eq!(increment[1], 1.0 / 6.0);
    }

    #[test]
    fn matches_rk4_for_a_single_equation() {
        let decay = |s: &[f64], _t: f64| -s[0];
        let equations: [&dyn Equation; 1] = [&decay];

        let classical = ClassicalRk4.increment(&[1.0], 0.0, 0.1, &equations);
        let sequential = Rk4.increment(&[1.0], 0.0, 0.1, &equations);

        assert_eq!(classical, sequential);
    }

    #[test]
    fn rejects_missing_equation() {
        let decay = |s: &[f64], _t: f64| -s[0];
        let equations: [&dyn Equation; 1] = [&decay];

        let err = ClassicalRk4
            .increment(&[1.0, 2.0], 0.0, 0.1, &equations)
            .unwrap_err();

        assert_eq!(
            err,
            DimensionMismatch {
                state: 2,
                equations: 1
            }
        );
    }
}
