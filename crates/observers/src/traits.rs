//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasTime`] — events recorded at a point in time
//! - [`HasStepSize`] — events that carry the step size used
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops once the state has been sampled `limit` times.
//! struct SampleLimit {
//!     limit: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for SampleLimit {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.seen += 1;
//!         (self.seen >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use odestep_solvers::transient::{adaptive, fixed};

/// An event recorded at a point in time.
pub trait HasTime {
    /// Returns the time of the snapshot this event reports.
    fn time(&self) -> f64;
}

/// An event that carries the step size used to advance from it.
pub trait HasStepSize {
    /// Returns the step size.
    fn step_size(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasTime impls ---

impl HasTime for fixed::Event<'_> {
    fn time(&self) -> f64 {
        self.snapshot.time
    }
}

impl HasTime for adaptive::Event<'_> {
    fn time(&self) -> f64 {
        self.snapshot.time
    }
}

// --- HasStepSize for adaptive::Event ---

impl HasStepSize for adaptive::Event<'_> {
    fn step_size(&self) -> f64 {
        self.step_size
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for fixed::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for adaptive::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
