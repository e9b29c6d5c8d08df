//! Explicit single-step methods.
//!
//! Each method implements [`Method`]: it evaluates the equations around the
//! current state and returns the increment for one step, leaving the state
//! untouched. The solvers in [`transient`](crate::transient) decide when and
//! with which step size a method is called.
//!
//! # Methods
//!
//! - [`Euler`] — first order, one derivative pass
//! - [`Midpoint`] — second order, two derivative passes
//! - [`Rk4`] — Runge–Kutta with trial states updated in place, four derivative passes
//! - [`ClassicalRk4`] — fourth order Runge–Kutta with each trial state built in full
//!
//! [`Method`]: odestep_core::Method

mod classical_rk4;
mod euler;
mod midpoint;
mod rk4;

pub use classical_rk4::ClassicalRk4;
pub use euler::Euler;
pub use midpoint::Midpoint;
pub use rk4::Rk4;
