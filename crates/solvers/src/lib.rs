//! Fixed and adaptive step solvers for systems of ODEs.
//!
//! # Modules
//!
//! - [`method`] — explicit single-step methods ([`Euler`], [`Midpoint`], [`Rk4`])
//! - [`transient`] — solvers that march a system forward in time
//!
//! For the common case, [`fixed_step`] and [`adaptive_step`] run a solver
//! without observation and return only the trajectory.
//!
//! # Example
//!
//! ```
//! use odestep_core::Equation;
//! use odestep_solvers::{adaptive_step, method::Rk4};
//!
//! // Damped harmonic oscillator: x' = v, v' = -x - 0.4v
//! let dxdt = |s: &[f64], _t: f64| s[1];
//! let dvdt = |s: &[f64], _t: f64| -s[0] - 0.4 * s[1];
//! let equations: [&dyn Equation; 2] = [&dxdt, &dvdt];
//! let mut state = [-0.5, 0.0];
//!
//! let trajectory = adaptive_step(&Rk4, &equations, &mut state, 0.0, 15.0, 0.01, 0.5)?;
//!
//! let last = trajectory.last().unwrap();
//! assert!(last.time <= 15.0);
//! assert!(last.state[0].abs() < 0.01);
//! # Ok::<(), odestep_solvers::transient::adaptive::Error>(())
//! ```
//!
//! [`Euler`]: method::Euler
//! [`Midpoint`]: method::Midpoint
//! [`Rk4`]: method::Rk4

pub mod method;
pub mod transient;

use odestep_core::{Equation, Method, Trajectory};

use transient::{adaptive, fixed};

/// Integrates with a constant step `h` from `t0` through `tmax`.
///
/// See [`fixed::solve`] for details.
///
/// # Errors
///
/// Returns an error if `h` is not finite and positive, if the span is not
/// finite, or if the equations do not match the state's length.
pub fn fixed_step<M: Method + ?Sized>(
    method: &M,
    equations: &[&dyn Equation],
    state: &mut [f64],
    t0: f64,
    tmax: f64,
    h: f64,
) -> Result<Trajectory, fixed::Error> {
    fixed::solve_unobserved(method, equations, state, t0, tmax, h)
        .map(|solution| solution.trajectory)
}

/// Integrates with an adaptive step starting at `h`, halving no further than
/// `hmin`, from `t0` through `tmax`.
///
/// Uses the default attempt limit and tolerances of [`adaptive::Config`].
/// See [`adaptive::solve`] for details.
///
/// # Errors
///
/// Returns an error if `hmin` or `h` is not finite and positive, if the span
/// is not finite, or if the equations do not match the state's length.
pub fn adaptive_step<M: Method + ?Sized>(
    method: &M,
    equations: &[&dyn Equation],
    state: &mut [f64],
    t0: f64,
    tmax: f64,
    hmin: f64,
    h: f64,
) -> Result<Trajectory, adaptive::Error> {
    let config = adaptive::Config::new(hmin, h)?;
    adaptive::solve_unobserved(method, equations, state, t0, tmax, &config)
        .map(|solution| solution.trajectory)
}
