//! Integrates a damped harmonic oscillator with adaptive RK4 and prints the
//! trajectory as a table.
//!
//! ```text
//! cargo run -p odestep-solvers --example damped_oscillator
//! ```

use odestep_core::Equation;
use odestep_solvers::{
    method::Rk4,
    transient::adaptive::{self, Config, Event},
};

const STIFFNESS: f64 = 1.0;
const MASS: f64 = 1.0;
const DAMPING: f64 = 0.4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dxdt = |s: &[f64], _t: f64| s[1];
    let dvdt = |s: &[f64], _t: f64| -STIFFNESS * s[0] / MASS - DAMPING * s[1] / MASS;
    let equations: [&dyn Equation; 2] = [&dxdt, &dvdt];

    let config = Config::new(0.01, 0.5)?;
    let mut state = [-0.5, 0.0];

    println!(
        "{:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "t", "x", "v", "x'", "v'", "h"
    );

    let print_row = |event: &Event<'_>| {
        let (t, s) = (event.snapshot.time, event.snapshot.state.as_slice());
        println!(
            "{:9.3} {:9.3} {:9.3} {:9.3} {:9.3} {:9.4}",
            t,
            s[0],
            s[1],
            dxdt(s, t),
            dvdt(s, t),
            event.step_size,
        );
        None
    };

    let solution = adaptive::solve(&Rk4, &equations, &mut state, 0.0, 15.0, &config, print_row)?;

    println!(
        "{} samples, live state at t = {:.3}: x = {:.4}, v = {:.4}",
        solution.trajectory.len(),
        solution.end_time,
        state[0],
        state[1],
    );

    Ok(())
}
