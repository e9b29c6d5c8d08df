use odestep_core::Observer;

use crate::traits::{CanStopEarly, HasStepSize};

/// Stops a solver when the step size leaves `[min, max]`.
///
/// The adaptive solver treats its minimum step as a soft floor and places no
/// ceiling on doubling by default. This observer turns either bound into a
/// hard stop. The triggering step is recorded before the solver halts, and
/// [`StepSizeGuard::tripped`] reports the offending step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSizeGuard {
    min: f64,
    max: f64,
    tripped: Option<f64>,
}

impl StepSizeGuard {
    /// Creates a guard for the closed band `[min, max]`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            tripped: None,
        }
    }

    /// Creates a guard with only a lower bound.
    #[must_use]
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Returns the step size that triggered the stop, if any.
    #[must_use]
    pub fn tripped(&self) -> Option<f64> {
        self.tripped
    }
}

impl<E: HasStepSize, A: CanStopEarly> Observer<E, A> for StepSizeGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        let h = event.step_size();
        if h < self.min || h > self.max {
            self.tripped = Some(h);
            return Some(A::stop_early());
        }
        None
    }
}
