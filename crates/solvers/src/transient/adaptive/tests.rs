use approx::assert_relative_eq;

use odestep_core::{DimensionMismatch, Equation, Method};

use crate::method::{Euler, Midpoint, Rk4};

use super::{
    Action, Config, ConfigError, Decision, Error, Event, Status, solve, solve_unobserved,
};

fn constant(_: &[f64], _: f64) -> f64 {
    0.0
}

fn decay(s: &[f64], _: f64) -> f64 {
    -s[0]
}

fn position(s: &[f64], _: f64) -> f64 {
    s[1]
}

fn damped_velocity(s: &[f64], _: f64) -> f64 {
    -s[0] - 0.4 * s[1]
}

#[test]
fn constant_system_stays_put_and_doubles() {
    let equations: [&dyn Equation; 1] = [&constant];
    let methods: [&dyn Method; 3] = [&Euler, &Midpoint, &Rk4];
    let config = Config::new(0.01, 0.5).expect("valid config");

    for method in methods {
        let mut state = [3.0];
        let solution =
            solve_unobserved(method, &equations, &mut state, 0.0, 5.0, &config).expect("solves");

        let times: Vec<f64> = solution.trajectory.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.5, 3.5]);

        for snapshot in &solution.trajectory {
            assert_eq!(snapshot.state, vec![3.0]);
        }
        assert_eq!(state, [3.0]);
        assert_relative_eq!(solution.end_time, 7.5);
        assert_relative_eq!(solution.next_step, 8.0);
    }
}

#[test]
fn max_step_caps_doubling() {
    let equations: [&dyn Equation; 1] = [&constant];
    let config = Config::new(0.01, 0.5)
        .and_then(|c| c.with_max_step(1.0))
        .expect("valid config");
    let mut state = [2.0];

    let solution =
        solve_unobserved(&Rk4, &equations, &mut state, 0.0, 5.0, &config).expect("solves");

    let times: Vec<f64> = solution.trajectory.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![0.0, 0.5, 1.5, 2.5, 3.5, 4.5]);
    assert_relative_eq!(solution.next_step, 1.0);
}

#[test]
fn halves_until_attempts_run_out() {
    // Euler on x' = -x has quality x*h/4, so from h = 1 it takes four
    // halvings to get near tolerance and the fifth attempt is accepted as is.
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(1e-6, 1.0).expect("valid config");
    let mut state = [1.0];

    let mut events = Vec::new();
    let observer = |event: &Event<'_>| {
        events.push((
            event.step_size,
            event.quality,
            event.attempts,
            event.decision,
        ));
        None
    };

    let solution =
        solve(&Euler, &equations, &mut state, 0.0, 0.07, &config, observer).expect("solves");

    assert_eq!(
        events,
        vec![
            (0.0625, 0.015_625, 5, Decision::Halve),
            (0.015_625, 0.003_662_109_375, 2, Decision::Accept),
        ]
    );

    // The final halving carries over to the next step.
    assert_relative_eq!(solution.trajectory[1].time, 0.0625);
    assert_relative_eq!(solution.trajectory[1].state[0], 0.9375);
    assert_relative_eq!(solution.end_time, 0.078_125);
    assert_relative_eq!(state[0], 0.922_851_562_5);
}

#[test]
fn attempt_limit_is_configurable() {
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(1e-6, 1.0)
        .and_then(|c| c.with_max_attempts(1))
        .expect("valid config");
    let mut state = [1.0];

    let mut attempts = Vec::new();
    let observer = |event: &Event<'_>| {
        attempts.push(event.attempts);
        Some(Action::StopEarly)
    };

    let solution =
        solve(&Euler, &equations, &mut state, 0.0, 10.0, &config, observer).expect("solves");

    assert_eq!(attempts, vec![1]);
    assert_relative_eq!(solution.end_time, 1.0);
    assert_relative_eq!(solution.next_step, 0.5);
}

#[test]
fn accepts_steps_below_min_step() {
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(1.0, 0.5).expect("valid config");
    let mut state = [1.0];

    let mut decisions = Vec::new();
    let observer = |event: &Event<'_>| {
        decisions.push(event.decision);
        None
    };

    let solution =
        solve(&Euler, &equations, &mut state, 0.0, 2.0, &config, observer).expect("solves");

    assert_eq!(decisions, vec![Decision::Underflow; 5]);

    let states: Vec<f64> = solution.trajectory.iter().map(|s| s.state[0]).collect();
    assert_eq!(states, vec![1.0, 0.5, 0.25, 0.125, 0.0625]);
    assert_relative_eq!(solution.trajectory[4].time, 2.0);
}

#[test]
fn never_samples_past_tmax() {
    let equations: [&dyn Equation; 2] = [&position, &damped_velocity];
    let config = Config::new(0.01, 0.5).expect("valid config");
    let mut state = [-0.5, 0.0];

    let solution =
        solve_unobserved(&Midpoint, &equations, &mut state, 0.0, 15.0, &config).expect("solves");

    assert_eq!(solution.status, Status::Complete);
    assert!(solution.trajectory.iter().all(|s| s.time <= 15.0));
    assert!(
        solution
            .trajectory
            .windows(2)
            .all(|pair| pair[1].time > pair[0].time)
    );
    assert!(solution.end_time > 15.0);
}

#[test]
fn snapshots_do_not_alias_the_live_state() {
    let equations: [&dyn Equation; 2] = [&position, &damped_velocity];
    let config = Config::new(0.01, 0.5).expect("valid config");
    let mut state = vec![-0.5, 0.0];

    let solution =
        solve_unobserved(&Rk4, &equations, &mut state, 0.0, 1.0, &config).expect("solves");
    let recorded = solution.trajectory.clone();

    state[0] = 42.0;
    state[1] = -42.0;

    assert_eq!(solution.trajectory, recorded);
    assert_eq!(solution.trajectory[0].state, vec![-0.5, 0.0]);
}

#[test]
fn damped_oscillator_with_rk4() {
    let equations: [&dyn Equation; 2] = [&position, &damped_velocity];
    let config = Config::new(0.01, 0.5).expect("valid config");
    let mut state = [-0.5, 0.0];

    let solution =
        solve_unobserved(&Rk4, &equations, &mut state, 0.0, 15.0, &config).expect("solves");

    assert_eq!(solution.trajectory.len(), 49);

    // The first step is out of tolerance at h = 0.5 and is halved.
    assert_relative_eq!(solution.trajectory[1].time, 0.25);

    let last = solution.trajectory.last().expect("has samples");
    assert_relative_eq!(last.time, 14.875);
    assert_relative_eq!(last.state[0], -0.002_590_428_430_050_064, epsilon = 1e-12);
    assert_relative_eq!(last.state[1], 0.015_579_017_117_214_999, epsilon = 1e-12);
}

#[test]
fn half_steps_are_both_evaluated_at_the_start_time() {
    // With x' = t from t = 0, Euler half steps taken at t and t + h/2 would
    // give x = 0.25 and a quality of 0.25. Both are taken at t, so the
    // half steps agree with the full step.
    let clock = |_: &[f64], t: f64| t;
    let equations: [&dyn Equation; 1] = [&clock];
    let config = Config::new(0.01, 1.0).expect("valid config");
    let mut state = [0.0];

    let mut events = Vec::new();
    let observer = |event: &Event<'_>| {
        events.push((event.quality, event.decision));
        Some(Action::StopEarly)
    };

    solve(&Euler, &equations, &mut state, 0.0, 10.0, &config, observer).expect("solves");

    assert_eq!(events, vec![(0.0, Decision::Double)]);
}

#[test]
fn step_lost_in_rounding_is_an_error() {
    // Steps stay below min_step, so h = 1 is accepted but cannot move t.
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(2.0, 1.0).expect("valid config");
    let mut state = [1.0];

    let result = solve_unobserved(&Euler, &equations, &mut state, 1e17, 1e17 + 10.0, &config);

    assert_eq!(
        result,
        Err(Error::StalledStep {
            time: 1e17,
            step: 1.0
        })
    );
    assert_eq!(state, [1.0]);
}

#[test]
fn observer_sees_every_snapshot_in_order() {
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(0.001, 0.1).expect("valid config");
    let mut state = [1.0];

    let mut steps = Vec::new();
    let observer = |event: &Event<'_>| {
        steps.push(event.step);
        None
    };

    let solution =
        solve(&Rk4, &equations, &mut state, 0.0, 1.0, &config, observer).expect("solves");

    assert_eq!(steps, (0..solution.trajectory.len()).collect::<Vec<_>>());
}

#[test]
fn observer_can_stop_early() {
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(0.001, 0.1).expect("valid config");
    let mut state = [1.0];

    let observer = |event: &Event<'_>| {
        if event.step == 1 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution =
        solve(&Rk4, &equations, &mut state, 0.0, 100.0, &config, observer).expect("stops");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.trajectory.len(), 2);
}

#[test]
fn empty_span_records_nothing() {
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(0.01, 0.5).expect("valid config");
    let mut state = [1.0];

    let solution =
        solve_unobserved(&Euler, &equations, &mut state, 2.0, 1.0, &config).expect("solves");

    assert!(solution.trajectory.is_empty());
    assert_eq!(state, [1.0]);
}

#[test]
fn reports_dimension_mismatch() {
    let equations: [&dyn Equation; 2] = [&decay, &decay];
    let config = Config::new(0.01, 0.5).expect("valid config");
    let mut state = [1.0];

    let result = solve_unobserved(&Rk4, &equations, &mut state, 0.0, 1.0, &config);

    assert_eq!(
        result,
        Err(Error::DimensionMismatch(DimensionMismatch {
            state: 1,
            equations: 2
        }))
    );
}

#[test]
fn rejects_non_finite_span() {
    let equations: [&dyn Equation; 1] = [&decay];
    let config = Config::new(0.01, 0.5).expect("valid config");
    let mut state = [1.0];

    let result = solve_unobserved(&Rk4, &equations, &mut state, f64::NAN, 1.0, &config);

    assert!(matches!(result, Err(Error::InvalidSpan { .. })));
}

#[test]
fn config_errors_convert() {
    let err: Error = ConfigError::MinStep.into();
    assert_eq!(err.to_string(), "invalid config: min_step must be finite and positive");
}
