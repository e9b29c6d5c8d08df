//! Core traits and types for odestep.
//!
//! This crate defines the shared abstractions that methods, solvers, and
//! observers build on:
//!
//! - [`Equation`] — the derivative of one state component
//! - [`Method`] — a single-step scheme that turns a state into an increment
//! - [`Snapshot`] and [`Trajectory`] — owned copies of the state over time
//! - [`Observer`] — receives solver events and optionally returns control actions

mod equation;
mod error;
mod method;
mod observer;
mod snapshot;

pub use equation::Equation;
pub use error::DimensionMismatch;
pub use method::Method;
pub use observer::Observer;
pub use snapshot::{Snapshot, Trajectory};
