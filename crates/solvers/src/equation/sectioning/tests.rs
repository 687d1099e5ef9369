use approx::assert_relative_eq;

use crate::Config;
use crate::equation::{BracketError, Status};

use super::{Action, Error, Event, solve, solve_unobserved};

/// Root of x³ + 4x² − 10.
const ROOT: f64 = 1.365_230_013_414_097;

fn cubic(x: f64) -> f64 {
    x.powi(3) + 4.0 * x.powi(2) - 10.0
}

/// Records the bracket width of every pass.
fn widths(divisions: usize, config: &Config) -> Vec<f64> {
    let mut widths = Vec::new();
    let observer = |event: &Event<'_>| {
        widths.push(event.width());
        None
    };
    solve(&cubic, [0.0, 5.0], divisions, config, observer).expect("solve should succeed");
    widths
}

#[test]
fn bisection_finds_root_of_cubic() {
    let solution = solve_unobserved(&cubic, [0.0, 5.0], 2, &Config::default()).expect("converges");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.fx.abs() <= 1e-9);
    assert_relative_eq!(solution.x, ROOT, epsilon = 1e-9);
}

#[test]
fn trisection_finds_root_of_cubic() {
    let solution = solve_unobserved(&cubic, [0.0, 5.0], 3, &Config::default()).expect("converges");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, ROOT, epsilon = 1e-9);
}

#[test]
fn more_divisions_take_fewer_passes() {
    let config = Config::default();
    let two = solve_unobserved(&cubic, [0.0, 5.0], 2, &config).expect("converges");
    let three = solve_unobserved(&cubic, [0.0, 5.0], 3, &config).expect("converges");
    let ten = solve_unobserved(&cubic, [0.0, 5.0], 10, &config).expect("converges");

    assert!(three.iters < two.iters);
    assert!(ten.iters < three.iters);
}

#[test]
fn width_shrinks_by_division_count() {
    for divisions in [2, 3, 7] {
        let widths = widths(divisions, &Config::default());
        assert_relative_eq!(widths[0], 5.0);

        #[allow(clippy::cast_precision_loss)]
        let n = divisions as f64;
        for pair in widths.windows(2) {
            assert!(pair[1] <= pair[0]);
            assert_relative_eq!(pair[1], pair[0] / n, max_relative = 1e-4);
        }
    }
}

#[test]
fn converged_or_out_of_passes() {
    for max_iters in [1, 2, 5, 20, 100] {
        let config = Config::new(max_iters, 1e-9).expect("valid config");
        let solution = solve_unobserved(&cubic, [0.0, 5.0], 2, &config).expect("solve succeeds");

        assert!(solution.fx.abs() <= 1e-9 || solution.iters == max_iters - 1);
        assert!(solution.iters < max_iters);
    }
}

#[test]
fn stops_at_iteration_cap_with_last_best_sample() {
    let config = Config::new(4, 1e-9).expect("valid config");
    let mut last_best = None;
    let observer = |event: &Event<'_>| {
        last_best = Some(event.best);
        None
    };

    let solution = solve(&cubic, [0.0, 5.0], 2, &config, observer).expect("runs to cap");
    let best = last_best.expect("three passes ran");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert_relative_eq!(solution.x, best.x);
    assert_relative_eq!(solution.fx, best.fx);
}

#[test]
fn single_iteration_returns_better_endpoint() {
    let config = Config::new(1, 1e-9).expect("valid config");
    let solution = solve_unobserved(&cubic, [0.0, 5.0], 2, &config).expect("no passes");

    // |f(0)| = 10 beats |f(5)| = 215.
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 0.0);
    assert_relative_eq!(solution.fx, -10.0);
}

#[test]
fn endpoint_root_returns_without_passes() {
    let mut events = 0;
    let observer = |_: &Event<'_>| {
        events += 1;
        None
    };

    let solution = solve(&|x: f64| x - 2.0, [2.0, 7.0], 3, &Config::default(), observer)
        .expect("endpoint root");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.x, 2.0);
    assert_eq!(events, 0);
}

#[test]
fn reversed_bracket_gives_same_result() {
    let config = Config::default();
    let forward = solve_unobserved(&cubic, [0.0, 5.0], 2, &config).expect("converges");
    let reversed = solve_unobserved(&cubic, [5.0, 0.0], 2, &config).expect("converges");

    assert_eq!(forward, reversed);
}

#[test]
fn no_sign_change_is_rejected_before_any_pass() {
    let mut events = 0;
    let observer = |_: &Event<'_>| {
        events += 1;
        None
    };

    let result = solve(&|x: f64| x * x + 1.0, [0.0, 1.0], 2, &Config::default(), observer);

    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange))
    ));
    assert_eq!(events, 0);
}

#[test]
fn several_sign_changes_are_an_error() {
    // Trisecting [0, 3.5] samples signs -, +, -, + around the roots 1, 2, 3.
    let f = |x: f64| (x - 1.0) * (x - 2.0) * (x - 3.0);
    let result = solve_unobserved(&f, [0.0, 3.5], 3, &Config::default());

    let Err(Error::MultipleOrNoRoot { bracket, crossings }) = result else {
        panic!("expected MultipleOrNoRoot, got {result:?}");
    };
    assert_eq!(crossings, 3);
    assert_relative_eq!(bracket[0], 0.0);
    assert_relative_eq!(bracket[1], 3.5);
}

#[test]
fn too_few_divisions_is_an_error() {
    for divisions in [0, 1] {
        let result = solve_unobserved(&cubic, [0.0, 5.0], divisions, &Config::default());
        assert!(matches!(result, Err(Error::TooFewDivisions { .. })));
    }
}

#[test]
fn invalid_bounds_are_rejected() {
    let result = solve_unobserved(&cubic, [1.0, 1.0], 2, &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::ZeroWidth))
    ));

    let result = solve_unobserved(&cubic, [f64::NAN, 1.0], 2, &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite))
    ));
}

#[test]
fn huge_finite_bracket_does_not_overflow() {
    // f is -50 at 1e308 and +20 at 1.7e308; the endpoint sum overflows.
    let f = |x: f64| x / 1e306 - 150.0;
    let solution = solve_unobserved(&f, [1.0e308, 1.7e308], 2, &Config::default())
        .expect("samples stay finite");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.fx.abs() <= 1e-9);
    assert_relative_eq!(solution.x, 1.5e308, max_relative = 1e-9);
}

#[test]
fn non_finite_sample_is_an_error() {
    // 1/x is finite at both endpoints but not at the midpoint 0.
    let result = solve_unobserved(&|x: f64| 1.0 / x, [-1.0, 1.0], 2, &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteValue { .. })));
}

#[test]
fn observer_sees_every_sample() {
    let mut counts = Vec::new();
    let observer = |event: &Event<'_>| {
        counts.push(event.samples.len());
        let first = event.samples[0];
        let last = event.samples[event.samples.len() - 1];
        assert_relative_eq!(first.x, event.bracket[0]);
        assert_relative_eq!(last.x, event.bracket[1]);
        None
    };

    solve(&cubic, [0.0, 5.0], 4, &Config::default(), observer).expect("converges");

    assert!(counts.iter().all(|&count| count == 5));
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_>| (event.iter == 3).then_some(Action::StopEarly);

    let solution = solve(&cubic, [0.0, 5.0], 2, &Config::default(), observer).expect("stops");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
}

#[test]
fn repeated_solves_are_identical() {
    let config = Config::default();
    let first = solve_unobserved(&cubic, [0.0, 5.0], 3, &config).expect("converges");
    let second = solve_unobserved(&cubic, [0.0, 5.0], 3, &config).expect("converges");

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first, second);
}
