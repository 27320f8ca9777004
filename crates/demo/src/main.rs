//! Finds the roots of f(x) = x³ − e^(0.8x) − 20 three ways and compares them.
//!
//! # Usage
//!
//! ```text
//! cargo run -p rootlab-demo --features plot
//! cargo run -p rootlab-demo --features plot -- report
//! cargo run -p rootlab-demo --features plot -- plot
//! cargo run -p rootlab-demo --features plot -- convergence
//! ```
//!
//! # Modes
//!
//! - **report** — Scan for a sign change, run bisection, Newton-Raphson, and
//!   secant, print each iteration table and a comparison summary.
//!
//! - **plot** — Bisect the two charted brackets, list the roots, and chart f
//!   with the roots marked.
//!
//! - **convergence** — Plot |f(x)| per iteration of each method on a log scale.
//!
//! With no mode, the report runs first and the chart follows. Windows need the
//! `plot` feature; without it the chart step only lists the roots.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`).

mod report;
mod settings;

use std::error::Error;

use rootlab_core::{CubicExp, RootSet};
use rootlab_observers::{Chart, TraceObserver};
use rootlab_solvers::equation::{
    bisection, newton,
    scan::{self, Grid},
    secant,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use report::{
    Banner, BisectionTable, NewtonTable, Outcome, RootListing, ScanTable, SecantTable, Summary,
    SummaryRow,
};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let mode = std::env::args().nth(1);
    match mode.as_deref() {
        None => {
            run_report()?;
            show_chart()
        }
        Some("report") => run_report(),
        Some("plot") => show_chart(),
        Some("convergence") => show_convergence(),
        Some(other) => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: rootlab [report|plot|convergence]");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct Configs {
    bisection: bisection::Config,
    newton: newton::Config,
    secant: secant::Config,
}

impl Configs {
    fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            bisection: bisection::Config::new(settings::MAX_ITERS, settings::TOL)?,
            newton: newton::Config::new(
                settings::MAX_ITERS,
                settings::TOL,
                newton::DEFAULT_DERIVATIVE_TOL,
            )?,
            secant: secant::Config::new(
                settings::MAX_ITERS,
                settings::TOL,
                secant::DEFAULT_DIFFERENCE_TOL,
            )?,
        })
    }
}

// --- Report ------------------------------------------------------------------

fn run_report() -> Result<(), Box<dyn Error>> {
    let configs = Configs::new()?;

    println!("{}", Banner("Roots by bisection, Newton-Raphson, and secant"));
    println!("Function: {}", CubicExp::EXPRESSION);
    println!();

    let grid = Grid::new(settings::SCAN_START, settings::SCAN_END, settings::SCAN_STEP)?;
    let scan = scan::scan(&CubicExp, &grid);
    println!("{}", ScanTable(&scan));

    let mut rows = Vec::new();

    println!();
    println!("{}", Banner("Bisection"));
    match scan.bracket {
        Some(bracket) => {
            println!("Bracket: [{}, {}]", bracket[0], bracket[1]);
            println!("Tolerance: {}", settings::TOL);
            println!();
            let result = bisection::solve(
                &CubicExp,
                bracket,
                &configs.bisection,
                TraceObserver::new("bisection"),
            );
            println!("{}", BisectionTable(report::history(&result)));
            println!();
            println!("{}", Outcome(&result));
            rows.push(SummaryRow::new("Bisection", &result));
        }
        None => {
            println!("Skipped: the scan found no bracket");
            rows.push(SummaryRow::failed("Bisection", 0, "no bracket"));
        }
    }

    println!();
    println!("{}", Banner("Newton-Raphson"));
    println!("Derivative: {}", CubicExp::DERIVATIVE_EXPRESSION);
    println!("Initial guess: x0 = {}", settings::NEWTON_X0);
    println!("Tolerance: {}", settings::TOL);
    println!();
    let result = newton::solve(
        &CubicExp,
        settings::NEWTON_X0,
        &configs.newton,
        TraceObserver::new("newton"),
    );
    println!("{}", NewtonTable(report::history(&result)));
    println!();
    println!("{}", Outcome(&result));
    rows.push(SummaryRow::new("Newton-Raphson", &result));

    println!();
    println!("{}", Banner("Secant"));
    let [x0, x1] = settings::SECANT_GUESSES;
    println!("Initial guesses: x0 = {x0}, x1 = {x1}");
    println!("Tolerance: {}", settings::TOL);
    println!();
    let result = secant::solve(
        &CubicExp,
        settings::SECANT_GUESSES,
        &configs.secant,
        TraceObserver::new("secant"),
    );
    println!("{}", SecantTable(report::history(&result)));
    println!();
    println!("{}", Outcome(&result));
    rows.push(SummaryRow::new("Secant", &result));

    println!();
    println!("{}", Banner("Comparison"));
    println!("{}", Summary(&rows));

    info!(methods = rows.len(), "report complete");
    Ok(())
}

// --- Chart -------------------------------------------------------------------

fn charted_roots() -> Result<RootSet, Box<dyn Error>> {
    let config = bisection::Config::new(settings::MAX_ITERS, settings::TOL)?;

    let mut roots = RootSet::new();
    for bracket in settings::CHART_BRACKETS {
        match bisection::solve_unobserved(&CubicExp, bracket, &config) {
            Ok(solution) => roots.extend(solution.root()),
            Err(err) => tracing::warn!(%err, ?bracket, "skipping charted bracket"),
        }
    }
    Ok(roots)
}

fn show_chart() -> Result<(), Box<dyn Error>> {
    let roots = charted_roots()?;

    println!();
    println!("{}", Banner("Roots found"));
    println!("{}", RootListing(&roots, &CubicExp));

    let chart = Chart::new(&CubicExp, settings::DOMAIN, settings::SAMPLES)
        .title(format!("Graph of {}", CubicExp::EXPRESSION))
        .curve_name(CubicExp::EXPRESSION)
        .range(settings::RANGE)
        .roots(&roots);

    open_chart(chart)
}

#[cfg(feature = "plot")]
fn open_chart(chart: Chart) -> Result<(), Box<dyn Error>> {
    chart.show()?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn open_chart(chart: Chart) -> Result<(), Box<dyn Error>> {
    tracing::warn!(
        markers = chart.markers().len(),
        "built without the `plot` feature; not opening the chart window"
    );
    Ok(())
}

// --- Convergence -------------------------------------------------------------

#[cfg(feature = "plot")]
fn show_convergence() -> Result<(), Box<dyn Error>> {
    use rootlab_observers::{PlotObserver, ShowConfig};

    let configs = Configs::new()?;
    let grid = Grid::new(settings::SCAN_START, settings::SCAN_END, settings::SCAN_STEP)?;
    let mut obs = PlotObserver::<3>::new(["Bisection", "Newton-Raphson", "Secant"]);

    if let Some(bracket) = scan::scan(&CubicExp, &grid).bracket {
        bisection::solve(
            &CubicExp,
            bracket,
            &configs.bisection,
            |it: &bisection::Iteration| {
                obs.record(it.iter as f64, [Some(it.mid_residual.abs()), None, None]);
                None
            },
        )?;
    }
    // A failed run still plots the iterations it completed.
    let _ = newton::solve(
        &CubicExp,
        settings::NEWTON_X0,
        &configs.newton,
        |it: &newton::Iteration| {
            obs.record(it.iter as f64, [None, Some(it.residual.abs()), None]);
            None
        },
    )
    .inspect_err(|err| tracing::warn!(%err, "newton failed"));
    let _ = secant::solve(
        &CubicExp,
        settings::SECANT_GUESSES,
        &configs.secant,
        |it: &secant::Iteration| {
            obs.record(it.iter as f64, [None, None, Some(it.residual.abs())]);
            None
        },
    )
    .inspect_err(|err| tracing::warn!(%err, "secant failed"));

    obs.show(
        ShowConfig::new()
            .title("Convergence of |f(x)|")
            .legend()
            .log_y(),
    )?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn show_convergence() -> Result<(), Box<dyn Error>> {
    Err("the convergence mode needs the `plot` feature".into())
}
