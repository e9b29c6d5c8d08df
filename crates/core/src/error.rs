use thiserror::Error;

/// The state vector and the equation set (or an increment) disagree in length.
///
/// Equation `i` computes the derivative of `state[i]`, so every method and
/// solver requires one equation per state component.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dimension mismatch: state has {state} components but got {equations}")]
pub struct DimensionMismatch {
    /// Number of state components.
    pub state: usize,

    /// Number of equations (or increment components) supplied.
    pub equations: usize,
}

impl DimensionMismatch {
    /// Returns an error if `state_len` and `other_len` differ.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] when the lengths are not equal.
    pub fn check(state_len: usize, other_len: usize) -> Result<(), Self> {
        if state_len == other_len {
            Ok(())
        } else {
            Err(Self {
                state: state_len,
                equations: other_len,
            })
        }
    }
}
