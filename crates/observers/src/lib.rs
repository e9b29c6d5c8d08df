//! Reusable observers for odestep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the fixed and adaptive solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasStepSize`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopAfterTime`] — stops any solver once a time is reached
//! - [`StepSizeGuard`] — stops the adaptive solver when its step size leaves
//!   a band
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasStepSize`]: traits::HasStepSize
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod step_size_guard;
mod stop_after_time;

pub use step_size_guard::StepSizeGuard;
pub use stop_after_time::StopAfterTime;
