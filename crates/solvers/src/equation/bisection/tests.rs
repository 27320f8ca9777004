use approx::assert_relative_eq;

use rootlab_core::{CubicExp, Function};

use crate::equation::Status;

use super::{Action, Config, Error, Iteration, solve, solve_unobserved};

fn square_minus(target: f64) -> impl Fn(f64) -> f64 {
    move |x| x * x - target
}

#[test]
fn finds_square_root() {
    let f = square_minus(9.0);
    let config = Config::new(200, 1e-12).expect("valid config");

    let solution = solve_unobserved(&f, [0.0, 10.0], &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    assert!(solution.residual.abs() < 1e-12);
}

#[test]
fn normalizes_reversed_bracket() {
    let f = square_minus(36.0);

    let solution =
        solve_unobserved(&f, [10.0, 0.0], &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 6.0, epsilon = 1e-6);
}

#[test]
fn finds_target_root_in_lower_bracket() {
    let f = CubicExp;
    let config = Config::default();

    let solution = solve_unobserved(&f, [2.0, 4.0], &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!(f.evaluate(solution.x).abs() < config.residual_tol());
    assert!((2.0..=4.0).contains(&solution.x));
    assert_eq!(solution.iters, solution.history.len());
}

#[test]
fn errors_on_no_sign_change() {
    let f = square_minus(9.0);

    let result = solve_unobserved(&f, [5.0, 10.0], &Config::default());

    assert!(matches!(result, Err(Error::NoSignChange { .. })));
}

#[test]
fn no_sign_change_performs_no_iterations() {
    let mut calls = 0;
    let observer = |_: &Iteration| {
        calls += 1;
        None::<Action>
    };

    let result = solve(&CubicExp, [0.0, 1.0], &Config::default(), observer);

    assert!(matches!(result, Err(Error::NoSignChange { .. })));
    assert_eq!(calls, 0);
}

#[test]
fn first_iteration_records_initial_bracket() {
    let f = square_minus(2.0);

    let solution = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("should solve");
    let first = solution.history[0];

    assert_eq!(first.iter, 1);
    assert_relative_eq!(first.left, 0.0);
    assert_relative_eq!(first.right, 2.0);
    assert_relative_eq!(first.mid, 1.0);
    assert_relative_eq!(first.left_residual, -2.0);
    assert_relative_eq!(first.right_residual, 2.0);
    assert_relative_eq!(first.mid_residual, -1.0);
    assert_relative_eq!(first.error, 1.0);
}

#[test]
fn error_halves_every_step() {
    let solution =
        solve_unobserved(&CubicExp, [2.0, 4.0], &Config::default()).expect("should solve");

    for pair in solution.history.windows(2) {
        assert!(pair[1].error <= pair[0].error);
        assert_relative_eq!(pair[1].error, pair[0].error / 2.0, max_relative = 1e-6);
    }
}

#[test]
fn observer_can_stop_iteration() {
    let f = square_minus(9.0);

    let mut calls = 0usize;
    let observer = |event: &Iteration| {
        calls += 1;
        (event.iter >= 3).then_some(Action::StopEarly)
    };

    let solution =
        solve(&f, [0.0, 10.0], &Config::default(), observer).expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(calls, 3);
    assert_relative_eq!(solution.x, solution.history[2].mid);
}

#[test]
fn iteration_limit_returns_last_midpoint() {
    let f = square_minus(2.0);
    let config = Config::new(5, 1e-12).expect("valid config");

    let solution = solve_unobserved(&f, [0.0, 2.0], &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.root(), None);
    let last = solution.history.last().expect("five records");
    assert_relative_eq!(solution.x, last.mid);
    assert_relative_eq!(solution.residual, last.mid_residual);
}

#[test]
fn zero_iters_returns_initial_midpoint() {
    let f = square_minus(9.0);
    let config = Config::new(0, 1e-6).expect("valid config");

    let solution = solve_unobserved(&f, [2.0, 10.0], &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert!(solution.history.is_empty());
    assert_relative_eq!(solution.x, 6.0);
    assert_relative_eq!(solution.residual, 27.0);
}

#[test]
fn repeated_runs_are_identical() {
    let first = solve_unobserved(&CubicExp, [7.0, 8.0], &Config::default()).expect("solves");
    let second = solve_unobserved(&CubicExp, [7.0, 8.0], &Config::default()).expect("solves");

    assert_eq!(first, second);
}
