//! Compares every solver on x³ + 4x² − 10 = 0.
//!
//! Prints the final estimate, its error, the status and the pass count of each
//! method. Pass `--verbose` to also log every pass through `tracing`.
//!
//! ```text
//! cargo run --example compare
//! cargo run --example compare -- --verbose
//! ```

use std::error::Error;

use radix_observers::Tracing;
use radix_solvers::{
    Config,
    equation::{
        Status, bisection, fixed_point, newton, regula_falsi, secant, steffensen, trisection,
    },
};
use tracing::{Level, info};

/// Positive real root of x³ + 4x² − 10.
const TRUE_ROOT: f64 = 1.365_230_013_414_096_8;

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
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let config = Config::default();
    info!(
        max_iters = config.max_iters(),
        tolerance = config.tolerance(),
        "solving x³ + 4x² − 10 = 0"
    );

    let rows: [(&str, f64, Status, usize); 7] = [
        {
            let s = bisection::solve(&cubic, [0.0, 5.0], &config, Tracing::new("bisection"))?;
            ("bisection", s.x, s.status, s.iters)
        },
        {
            let s = trisection::solve(&cubic, [0.0, 5.0], &config, Tracing::new("trisection"))?;
            ("trisection", s.x, s.status, s.iters)
        },
        {
            let s = fixed_point::solve(&map, 0.0, &config, Tracing::new("fixed point"))?;
            ("fixed point", s.x, s.status, s.iters)
        },
        {
            let s = newton::solve(&cubic, &cubic_slope, 5.0, &config, Tracing::new("newton"))?;
            ("newton", s.x, s.status, s.iters)
        },
        {
            let s = secant::solve(&cubic, [0.0, 5.0], &config, Tracing::new("secant"))?;
            ("secant", s.x, s.status, s.iters)
        },
        {
            let s = regula_falsi::solve(&cubic, [0.0, 5.0], &config, Tracing::new("regula falsi"))?;
            ("regula falsi", s.x, s.status, s.iters)
        },
        {
            let s = steffensen::solve(&map, 0.0, &config, Tracing::new("steffensen"))?;
            ("steffensen", s.x, s.status, s.iters)
        },
    ];

    println!(
        "{:<14} {:>20} {:>10} {:>16} {:>6}",
        "method", "estimate", "error", "status", "iters"
    );
    for (name, x, status, iters) in rows {
        let error = (x - TRUE_ROOT).abs();
        println!(
            "{name:<14} {x:>20.16} {error:>10.2e} {:>16} {iters:>6}",
            format!("{status:?}")
        );
    }

    Ok(())
}
