use odestep_core::Snapshot;

/// Event emitted by the fixed step solver for each recorded snapshot.
///
/// The snapshot holds the state at the start of the step, before the
/// step's increment is applied. Step 0 is the initial state.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number, matching the snapshot's index in the trajectory.
    pub step: usize,

    /// The recorded snapshot.
    pub snapshot: &'a Snapshot,
}
