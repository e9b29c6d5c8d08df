//! Fixed step solver for systems of ODEs.
//!
//! Starting at `t0`, the solver records a snapshot and applies one method
//! increment for every time `t0, t0 + h, t0 + 2h, ...` that does not exceed
//! `tmax`. There is no error control.
//!
//! # Example
//!
//! ```
//! use odestep_core::Equation;
//! use odestep_solvers::{method::Euler, transient::fixed};
//!
//! let growth = |s: &[f64], _t: f64| s[0];
//! let equations: [&dyn Equation; 1] = [&growth];
//! let mut state = [1.0];
//!
//! let solution = fixed::solve_unobserved(&Euler, &equations, &mut state, 0.0, 1.0, 0.25)?;
//!
//! assert_eq!(solution.trajectory.len(), 5);
//! # Ok::<(), fixed::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::debug;
use odestep_core::{DimensionMismatch, Equation, Method, Observer, Snapshot};

use super::{apply_increment, is_finite_span};

/// Integrates a system with a constant step size.
///
/// # Algorithm
///
/// While `t <= tmax`:
///
/// 1. Compute the increment `method(state, t, h)`.
/// 2. Record a snapshot of the state at `t`.
/// 3. Add the increment to the state and advance `t += h`.
/// 4. Emit an [`Event`] to the observer.
///
/// Time is accumulated step by step, so for steps that are not exactly
/// representable the final sample may land slightly before `tmax`. A step
/// too small to change the current time is reported as
/// [`Error::StalledStep`] before that step's snapshot is recorded.
///
/// # Observer
///
/// The observer may return [`Action::StopEarly`] to end the integration after
/// any snapshot. The state has already been advanced past that snapshot.
///
/// # Errors
///
/// Returns an error if the step size is not finite and positive, if the span
/// is not finite, if adding the step no longer advances the time, or if the
/// equations (or an increment) do not match the state's length.
pub fn solve<M, Obs>(
    method: &M,
    equations: &[&dyn Equation],
    state: &mut [f64],
    t0: f64,
    tmax: f64,
    step: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Method + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStep(step));
    }
    if !is_finite_span(t0, tmax) {
        return Err(Error::InvalidSpan {
            start: t0,
            end: tmax,
        });
    }
    DimensionMismatch::check(state.len(), equations.len())?;

    debug!(
        "fixed step: {} equations over [{t0}, {tmax}] with h = {step}",
        equations.len()
    );

    let mut trajectory = Vec::new();
    let mut time = t0;

    while time <= tmax {
        let next_time = time + step;
        if next_time == time {
            return Err(Error::StalledStep { time, step });
        }

        let increment = method.increment(state, time, step, equations)?;

        trajectory.push(Snapshot::capture(time, state));

        apply_increment(state, &increment)?;
        time = next_time;

        let event = Event {
            step: trajectory.len() - 1,
            snapshot: &trajectory[trajectory.len() - 1],
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("fixed step: stopped by observer at t = {}", event.snapshot.time);
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                end_time: time,
            });
        }
    }

    debug!("fixed step: recorded {} snapshots", trajectory.len());

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        end_time: time,
    })
}

/// Integrates a system with a constant step size without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<M>(
    method: &M,
    equations: &[&dyn Equation],
    state: &mut [f64],
    t0: f64,
    tmax: f64,
    step: f64,
) -> Result<Solution, Error>
where
    M: Method + ?Sized,
{
    solve(method, equations, state, t0, tmax, step, ())
}
