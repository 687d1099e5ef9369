//! Plots the error decay of every solver on x³ + 4x² − 10 = 0.
//!
//! Each method's log₁₀ error is drawn as a solid line. The theoretical bounds
//! for bisection, trisection and fixed-point iteration are drawn dashed.
//!
//! ```text
//! cargo run --example convergence --features plot
//! ```

use std::error::Error;

use radix_core::Observer;
use radix_observers::{
    ErrorTrace,
    bounds::Bound,
    plot::{Figure, ShowConfig, Style},
};
use radix_solvers::{
    Config,
    equation::{bisection, fixed_point, newton, regula_falsi, secant, steffensen, trisection},
};

/// Positive real root of x³ + 4x² − 10.
const TRUE_ROOT: f64 = 1.365_230_013_414_096_8;

const BRACKET: [f64; 2] = [0.0, 5.0];

fn cubic(x: f64) -> f64 {
    x.powi(3) + 4.0 * x.powi(2) - 10.0
}

fn cubic_slope(x: f64) -> f64 {
    3.0 * x.powi(2) + 8.0 * x
}

/// Fixed-point form of the cubic: x = √(10 / (x + 4)).
fn map(x: f64) -> f64 {
    (10.0 / (x + 4.0)).sqrt()
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    let mut figure = Figure::new();
    let width = BRACKET[1] - BRACKET[0];

    let mut trace = ErrorTrace::new(TRUE_ROOT);
    let solution = bisection::solve(&cubic, BRACKET, &config, &mut trace)?;
    figure.trace("bisection", trace.points());
    figure.styled(
        "bisection bound",
        Style::Dashed,
        Bound::Sectioning { divisions: 2, width }.series(solution.iters),
    );

    let mut trace = ErrorTrace::new(TRUE_ROOT);
    let solution = trisection::solve(&cubic, BRACKET, &config, &mut trace)?;
    figure.trace("trisection", trace.points());
    figure.styled(
        "trisection bound",
        Style::Dashed,
        Bound::Sectioning { divisions: 3, width }.series(solution.iters),
    );

    let mut trace = ErrorTrace::new(TRUE_ROOT);
    let mut first_step = None;
    let solution = fixed_point::solve(&map, 0.0, &config, |event: &fixed_point::Event<f64>| {
        first_step.get_or_insert((event.iterate - event.previous).abs());
        Observer::<_, fixed_point::Action>::observe(&mut trace, event)
    })?;
    figure.trace("fixed point", trace.points());
    if let Some(first_step) = first_step {
        // |m′(x)| = √10 / (2·(x + 4)^{3/2}) is largest at the seed x = 0.
        let constant = 10.0_f64.sqrt() / 16.0;
        figure.styled(
            "fixed point bound",
            Style::Dashed,
            Bound::Contraction {
                constant,
                first_step,
            }
            .series(solution.iters),
        );
    }

    let mut trace = ErrorTrace::new(TRUE_ROOT);
    newton::solve(&cubic, &cubic_slope, 5.0, &config, &mut trace)?;
    figure.trace("newton", trace.points());

    let mut trace = ErrorTrace::new(TRUE_ROOT);
    secant::solve(&cubic, BRACKET, &config, &mut trace)?;
    figure.trace("secant", trace.points());

    let mut trace = ErrorTrace::new(TRUE_ROOT);
    regula_falsi::solve(&cubic, BRACKET, &config, &mut trace)?;
    figure.trace("regula falsi", trace.points());

    let mut trace = ErrorTrace::new(TRUE_ROOT);
    steffensen::solve(&map, 0.0, &config, &mut trace)?;
    figure.trace("steffensen", trace.points());

    figure.show(
        ShowConfig::new()
            .title("Convergence on x³ + 4x² − 10 = 0")
            .legend()
            .log_y(),
    )?;

    Ok(())
}
