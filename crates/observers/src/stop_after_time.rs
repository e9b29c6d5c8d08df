use odestep_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// Stops a solver at the first snapshot at or after a given time.
///
/// The snapshot that triggers the stop is kept in the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAfterTime {
    time: f64,
}

impl StopAfterTime {
    /// Creates an observer that stops once `time` is reached.
    #[must_use]
    pub fn new(time: f64) -> Self {
        Self { time }
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAfterTime {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.time).then(A::stop_early)
    }
}
