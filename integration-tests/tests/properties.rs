use approx::assert_relative_eq;

use integration_tests::{TOL, bisection_config, default_configs, newton_config, secant_config};
use rootlab_core::{CubicExp, Function};
use rootlab_solvers::equation::{Status, bisection, newton, secant};

#[test]
fn bisection_converges_on_lower_bracket() {
    let (config, _, _) = default_configs();

    let solution = bisection::solve_unobserved(&CubicExp, [2.0, 4.0], &config).expect("bracket");

    assert_eq!(solution.status, Status::Converged);
    assert!(CubicExp.evaluate(solution.x).abs() < TOL);
    assert!((2.0..=4.0).contains(&solution.x));
    assert_relative_eq!(solution.x, 3.208_22, epsilon = 1e-4);
}

#[test]
fn bisection_converges_on_upper_bracket() {
    let (config, _, _) = default_configs();

    let solution = bisection::solve_unobserved(&CubicExp, [7.0, 8.0], &config).expect("bracket");

    assert_eq!(solution.status, Status::Converged);
    assert!(CubicExp.evaluate(solution.x).abs() < TOL);
    assert!((7.0..=8.0).contains(&solution.x));
}

#[test]
fn bracket_without_sign_change_is_rejected_before_iterating() {
    let (config, _, _) = default_configs();
    let mut calls = 0;

    let result = bisection::solve(&CubicExp, [0.0, 1.0], &config, |_: &bisection::Iteration| {
        calls += 1;
        None
    });

    assert!(matches!(result, Err(bisection::Error::NoSignChange { .. })));
    assert_eq!(calls, 0);
}

#[test]
fn all_methods_agree() {
    let (bisection_config, newton_config, secant_config) = default_configs();

    let bisection = bisection::solve_unobserved(&CubicExp, [2.0, 4.0], &bisection_config)
        .expect("bracket");
    let newton = newton::solve_unobserved(&CubicExp, 3.0, &newton_config).expect("no failure");
    let secant =
        secant::solve_unobserved(&CubicExp, [3.0, 3.5], &secant_config).expect("no failure");

    for solution in [&newton.x, &secant.x] {
        assert!(CubicExp.evaluate(*solution).abs() < TOL);
        assert!((bisection.x - solution).abs() < 1e-4);
    }
    assert_eq!(newton.status, Status::Converged);
    assert_eq!(secant.status, Status::Converged);
}

#[test]
fn reruns_are_identical() {
    let (bisection_config, newton_config, secant_config) = default_configs();

    assert_eq!(
        bisection::solve_unobserved(&CubicExp, [2.0, 4.0], &bisection_config),
        bisection::solve_unobserved(&CubicExp, [2.0, 4.0], &bisection_config),
    );
    assert_eq!(
        newton::solve_unobserved(&CubicExp, 3.0, &newton_config),
        newton::solve_unobserved(&CubicExp, 3.0, &newton_config),
    );
    assert_eq!(
        secant::solve_unobserved(&CubicExp, [3.0, 3.5], &secant_config),
        secant::solve_unobserved(&CubicExp, [3.0, 3.5], &secant_config),
    );
}

#[test]
fn bisection_error_halves_each_step() {
    let (config, _, _) = default_configs();

    let solution = bisection::solve_unobserved(&CubicExp, [2.0, 4.0], &config).expect("bracket");

    assert_relative_eq!(solution.history[0].error, 1.0);
    for pair in solution.history.windows(2) {
        assert!(pair[1].error <= pair[0].error);
        assert_relative_eq!(pair[1].error, pair[0].error / 2.0, max_relative = 1e-9);
    }
}

#[test]
fn zero_iteration_cap_returns_initial_state() {
    let bisection =
        bisection::solve_unobserved(&CubicExp, [2.0, 4.0], &bisection_config(0)).expect("bracket");
    let newton = newton::solve_unobserved(&CubicExp, 3.0, &newton_config(0)).expect("no failure");
    let secant =
        secant::solve_unobserved(&CubicExp, [3.0, 3.5], &secant_config(0)).expect("no failure");

    assert_eq!(bisection.status, Status::MaxIters);
    assert_eq!(newton.status, Status::MaxIters);
    assert_eq!(secant.status, Status::MaxIters);

    assert!(bisection.history.is_empty() && newton.history.is_empty());
    assert!(secant.history.is_empty());

    assert_relative_eq!(bisection.x, 3.0);
    assert_relative_eq!(newton.x, 3.0);
    assert_relative_eq!(secant.x, 3.5);
    assert_relative_eq!(newton.residual, CubicExp.evaluate(3.0));
    assert_eq!(bisection.root(), None);
}
