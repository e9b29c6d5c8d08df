/// The state of a system recorded at one point in time.
///
/// A snapshot owns its state. Solvers keep mutating the live state after a
/// snapshot is taken, so the recorded values never alias it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub time: f64,
    pub state: Vec<f64>,
}

/// An ordered sequence of snapshots, oldest first.
pub type Trajectory = Vec<Snapshot>;

impl Snapshot {
    /// Creates a snapshot from an owned state.
    #[must_use]
    pub fn new(time: f64, state: Vec<f64>) -> Self {
        Self { time, state }
    }

    /// Creates a snapshot by copying a borrowed state.
    #[must_use]
    pub fn capture(time: f64, state: &[f64]) -> Self {
        Self::new(time, state.to_vec())
    }
}
