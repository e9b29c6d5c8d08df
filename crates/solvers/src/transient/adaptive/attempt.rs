use odestep_core::{DimensionMismatch, Equation, Method};

use crate::transient::apply_increment;

use super::quality;

/// One full step and two half steps taken from the same state.
pub(super) struct Attempt {
    /// Increment of the full step.
    pub increment: Vec<f64>,

    /// Quality of the full step measured against the two half steps.
    pub quality: f64,
}

impl Attempt {
    /// Takes a full step of size `step` and two half steps from `state`.
    ///
    /// Both half steps are evaluated at `time`; the second continues from
    /// the state reached by the first.
    pub(super) fn take<M: Method + ?Sized>(
        method: &M,
        equations: &[&dyn Equation],
        state: &[f64],
        time: f64,
        step: f64,
    ) -> Result<Self, DimensionMismatch> {
        let increment = method.increment(state, time, step, equations)?;
        DimensionMismatch::check(state.len(), increment.len())?;

        let full: Vec<f64> = state.iter().zip(&increment).map(|(x, dx)| x + dx).collect();

        let mut half = state.to_vec();
        for _ in 0..2 {
            let half_increment = method.increment(&half, time, step / 2.0, equations)?;
            apply_increment(&mut half, &half_increment)?;
        }

        Ok(Self {
            quality: quality(&full, &half, step),
            increment,
        })
    }
}
