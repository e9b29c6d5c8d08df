//! Solvers that march a system of ODEs forward in time.
//!
//! Both solvers mutate a caller-owned state slice in place and record an
//! owned [`Snapshot`](odestep_core::Snapshot) before each step is applied.
//!
//! # Solvers
//!
//! - [`fixed`] — constant step size, no error control
//! - [`adaptive`] — step doubling with local error control

pub mod adaptive;
pub mod fixed;

use odestep_core::DimensionMismatch;

/// Adds `increment` to `state` component by component.
fn apply_increment(state: &mut [f64], increment: &[f64]) -> Result<(), DimensionMismatch> {
    DimensionMismatch::check(state.len(), increment.len())?;

    for (x, dx) in state.iter_mut().zip(increment) {
        *x += dx;
    }

    Ok(())
}

/// Returns true if both ends of the time span are finite.
fn is_finite_span(start: f64, end: f64) -> bool {
    start.is_finite() && end.is_finite()
}
