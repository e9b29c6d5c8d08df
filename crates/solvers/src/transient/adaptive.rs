//! Adaptive step solver for systems of ODEs.
//!
//! # Algorithm
//!
//! Every step is taken twice: once as a full step of size `h` and once as two
//! successive half steps of size `h/2`. Their largest per-component
//! difference divided by `h` is the step's [`quality`]. The quality then
//! drives the step size:
//!
//! - above `upper_tol`, `h` is halved and the step is retried;
//! - below `lower_tol`, the step is accepted and `h` doubles for the next one;
//! - otherwise the step is accepted and `h` is kept.
//!
//! Retries stop once `h` drops below `min_step` or the attempt limit is hit.
//! In both cases the last attempt is accepted without error. The accepted
//! state always comes from the full step.
//!
//! # Limitations
//!
//! - **No step ceiling by default**: on a very smooth system `h` keeps
//!   doubling. Use [`Config::with_max_step`] to cap it.
//! - **Soft floor**: a step below `min_step` is accepted even when it is out
//!   of tolerance.
//! - **Stalls are errors**: an accepted step that leaves `t + h == t` (for
//!   example a small `h` at a large `t`) ends the solve with
//!   [`Error::StalledStep`] instead of looping forever.
//! - **Overshoot**: the last step is not shortened to land on `tmax`, so the
//!   live state ends past the last snapshot.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per accepted step after recording its
//! snapshot. Observers can return [`Action::StopEarly`] to halt.

mod action;
mod attempt;
mod config;
mod decision;
mod error;
mod event;
mod quality;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use decision::Decision;
pub use error::Error;
pub use event::Event;
pub use quality::quality;
pub use solution::{Solution, Status};

use log::{debug, trace};
use odestep_core::{DimensionMismatch, Equation, Method, Observer, Snapshot};

use attempt::Attempt;

use super::{apply_increment, is_finite_span};

/// Integrates a system with an adaptive step size.
///
/// See the [module docs](self) for the step size rules.
///
/// # Errors
///
/// Returns an error if the span is not finite, if an accepted step is too
/// small to advance the time, or if the equations (or an increment) do not
/// match the state's length.
pub fn solve<M, Obs>(
    method: &M,
    equations: &[&dyn Equation],
    state: &mut [f64],
    t0: f64,
    tmax: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Method + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !is_finite_span(t0, tmax) {
        return Err(Error::InvalidSpan {
            start: t0,
            end: tmax,
        });
    }
    DimensionMismatch::check(state.len(), equations.len())?;

    debug!(
        "adaptive step: {} equations over [{t0}, {tmax}] with h = {}, min {}",
        equations.len(),
        config.initial_step(),
        config.min_step(),
    );

    let mut trajectory = Vec::new();
    let mut time = t0;
    let mut step = config.initial_step();

    while time <= tmax {
        let mut attempts = 0;

        let (attempt, step_size, decision) = loop {
            attempts += 1;

            let attempt = Attempt::take(method, equations, state, time, step)?;
            let used = step;
            let decision = Decision::choose(used, attempt.quality, config);
            step = decision.next_step(used, config);

            trace!(
                "t = {time}: attempt {attempts} with h = {used}, quality {} -> {decision:?}",
                attempt.quality
            );

            if decision.retries() && attempts < config.max_attempts() {
                debug!("t = {time}: halving step to {step}");
                continue;
            }

            match decision {
                Decision::Halve => {
                    debug!("t = {time}: attempt limit reached, accepting h = {used}");
                }
                Decision::Underflow => {
                    debug!("t = {time}: h = {used} is below min step, accepting");
                }
                Decision::Double => {
                    debug!("t = {time}: doubling step to {step}");
                }
                Decision::Accept => {}
            }

            break (attempt, used, decision);
        };

        let next_time = time + step_size;
        if next_time == time {
            return Err(Error::StalledStep {
                time,
                step: step_size,
            });
        }

        trajectory.push(Snapshot::capture(time, state));

        time = next_time;
        apply_increment(state, &attempt.increment)?;

        let event = Event {
            step: trajectory.len() - 1,
            snapshot: &trajectory[trajectory.len() - 1],
            step_size,
            quality: attempt.quality,
            attempts,
            decision,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(
                "adaptive step: stopped by observer at t = {}",
                event.snapshot.time
            );
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                end_time: time,
                next_step: step,
            });
        }
    }

    debug!("adaptive step: recorded {} snapshots", trajectory.len());

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        end_time: time,
        next_step: step,
    })
}

/// Integrates a system with an adaptive step size without observation.
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
    config: &Config,
) -> Result<Solution, Error>
where
    M: Method + ?Sized,
{
    solve(method, equations, state, t0, tmax, config, ())
}
