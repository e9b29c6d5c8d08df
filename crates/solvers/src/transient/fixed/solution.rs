use odestep_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the time span.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed step integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Snapshots taken at the start of every step.
    pub trajectory: Trajectory,

    /// Time matching the live state after the last applied step.
    ///
    /// The live state is always one step ahead of the last snapshot.
    pub end_time: f64,
}
