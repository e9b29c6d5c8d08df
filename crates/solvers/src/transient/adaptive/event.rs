use odestep_core::Snapshot;

use super::Decision;

/// Event emitted by the adaptive solver for each accepted step.
///
/// The snapshot holds the state at the start of the step, before the
/// step's increment is applied. Step 0 is the initial state.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number, matching the snapshot's index in the trajectory.
    pub step: usize,

    /// The recorded snapshot.
    pub snapshot: &'a Snapshot,

    /// Step size used to advance from this snapshot.
    pub step_size: f64,

    /// Quality of the accepted attempt.
    pub quality: f64,

    /// Number of attempts made, including the accepted one.
    pub attempts: usize,

    /// Decision taken on the accepted attempt.
    pub decision: Decision,
}
