/// Control actions supported by the fixed step solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the trajectory so far.
    StopEarly,
}
