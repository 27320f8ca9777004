//! Console tables for scan results, solver histories, and the comparison.
//!
//! Each table is a [`Display`] wrapper over data the solvers already
//! returned; nothing here runs a solver.

use std::fmt::{self, Display};

use rootlab_core::{Function, RootSet};
use rootlab_solvers::equation::{Solution, Status, bisection, newton, scan::Scan, secant};

const RULE_WIDTH: usize = 80;

/// A titled section banner.
pub struct Banner<'a>(pub &'a str);

impl Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.0)?;
        write!(f, "{rule}")
    }
}

/// Iterations a failed run completed before it stopped.
pub trait PartialHistory<T> {
    fn partial_history(&self) -> &[T];
}

impl PartialHistory<bisection::Iteration> for bisection::Error {
    fn partial_history(&self) -> &[bisection::Iteration] {
        &[]
    }
}

impl PartialHistory<newton::Iteration> for newton::Error {
    fn partial_history(&self) -> &[newton::Iteration] {
        self.history()
    }
}

impl PartialHistory<secant::Iteration> for secant::Error {
    fn partial_history(&self) -> &[secant::Iteration] {
        self.history()
    }
}

/// Returns the iterations recorded by a run, whether or not it failed.
pub fn history<T, E>(result: &Result<Solution<T>, E>) -> &[T]
where
    E: PartialHistory<T>,
{
    match result {
        Ok(solution) => &solution.history,
        Err(err) => err.partial_history(),
    }
}

/// Lists every examined pair of scan candidates.
pub struct ScanTable<'a>(pub &'a Scan);

impl Display for ScanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Searching for a sign change")?;
        writeln!(f, "{}", "-".repeat(50))?;
        for probe in &self.0.probes {
            let mark = if probe.sign_change {
                "sign change"
            } else {
                "same sign"
            };
            writeln!(
                f,
                "[{:>3}, {:>3}]: f({:>3}) = {:>8.3}, f({:>3}) = {:>8.3}  {mark}",
                probe.left,
                probe.right,
                probe.left,
                probe.left_value,
                probe.right,
                probe.right_value,
            )?;
        }
        match self.0.bracket {
            Some([a, b]) => write!(f, "Using bracket [{a}, {b}]"),
            None => write!(f, "No sign change found"),
        }
    }
}

/// One row per bisection iteration.
pub struct BisectionTable<'a>(pub &'a [bisection::Iteration]);

impl Display for BisectionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<4} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12} {:<12}",
            "Iter", "a", "b", "m", "f(a)", "f(b)", "f(m)", "Error"
        )?;
        write!(f, "{}", "-".repeat(100))?;
        for it in self.0 {
            write!(
                f,
                "\n{:<4} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6} {:<12.6}",
                it.iter,
                it.left,
                it.right,
                it.mid,
                it.left_residual,
                it.right_residual,
                it.mid_residual,
                it.error
            )?;
        }
        Ok(())
    }
}

/// One row per Newton-Raphson iteration.
pub struct NewtonTable<'a>(pub &'a [newton::Iteration]);

impl Display for NewtonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<4} {:<12} {:<12} {:<12} {:<12}",
            "Iter", "x", "f(x)", "f'(x)", "Error"
        )?;
        write!(f, "{}", "-".repeat(60))?;
        for it in self.0 {
            write!(
                f,
                "\n{:<4} {:<12.6} {:<12.6} {:<12.6} {:<12.6}",
                it.iter, it.x, it.residual, it.derivative, it.error
            )?;
        }
        Ok(())
    }
}

/// One row per secant iteration.
pub struct SecantTable<'a>(pub &'a [secant::Iteration]);

impl Display for SecantTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<4} {:<12} {:<12} {:<12}", "Iter", "x", "f(x)", "Error")?;
        write!(f, "{}", "-".repeat(50))?;
        for it in self.0 {
            write!(
                f,
                "\n{:<4} {:<12.6} {:<12.6} {:<12.6}",
                it.iter, it.x, it.residual, it.error
            )?;
        }
        Ok(())
    }
}

/// The closing line of a solver section.
pub struct Outcome<'a, T, E>(pub &'a Result<Solution<T>, E>);

impl<T, E: Display> Display for Outcome<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = match self.0 {
            Ok(solution) => solution,
            Err(err) => return write!(f, "Failed: {err}"),
        };
        let (x, residual) = (solution.x, solution.residual);
        match solution.status {
            Status::Converged => write!(f, "Converged: x ≈ {x:.8}, f(x) = {residual:.10}"),
            Status::MaxIters => write!(
                f,
                "Iteration limit reached ({}): x ≈ {x:.8}, f(x) = {residual:.10}",
                solution.iters
            ),
            Status::StoppedByObserver => {
                write!(f, "Stopped early: x ≈ {x:.8}, f(x) = {residual:.10}")
            }
        }
    }
}

/// A row of the comparison summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub method: &'static str,
    pub root: Option<f64>,
    pub iters: usize,
    pub residual: Option<f64>,
    pub status: String,
}

impl SummaryRow {
    /// Summarizes a finished run.
    pub fn new<T, E>(method: &'static str, result: &Result<Solution<T>, E>) -> Self
    where
        E: PartialHistory<T> + Display,
    {
        match result {
            Ok(solution) => {
                let root = solution.root();
                Self {
                    method,
                    root,
                    iters: solution.iters,
                    residual: root.map(|_| solution.residual),
                    status: status_label(solution.status).to_owned(),
                }
            }
            Err(err) => Self::failed(method, err.partial_history().len(), err),
        }
    }

    /// Summarizes a run that produced no solution.
    pub fn failed(method: &'static str, iters: usize, reason: impl Display) -> Self {
        Self {
            method,
            root: None,
            iters,
            residual: None,
            status: reason.to_string(),
        }
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Converged => "converged",
        Status::MaxIters => "iteration limit",
        Status::StoppedByObserver => "stopped early",
    }
}

/// The comparison of all methods.
pub struct Summary<'a>(pub &'a [SummaryRow]);

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<15} {:<17} {:<12} {:<15} Status",
            "Method", "Root", "Iterations", "f(root)"
        )?;
        write!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for row in self.0 {
            let root = row
                .root
                .map_or_else(|| String::from("did not converge"), |x| format!("{x:.8}"));
            let residual = row
                .residual
                .map_or_else(|| String::from("n/a"), |r| format!("{r:.2e}"));
            write!(
                f,
                "\n{:<15} {:<17} {:<12} {:<15} {}",
                row.method, root, row.iters, residual, row.status
            )?;
        }
        Ok(())
    }
}

/// Labelled roots with their residuals.
pub struct RootListing<'a, F: ?Sized>(pub &'a RootSet, pub &'a F);

impl<F: Function + ?Sized> Display for RootListing<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No roots found");
        }
        let mut first = true;
        for (label, x) in self.0.labeled() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(
                f,
                "Root {label}: x ≈ {x:.6}, f(x) = {:.2e}",
                self.1.evaluate(x)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootlab_core::CubicExp;
    use rootlab_solvers::equation::scan::{Grid, scan};

    #[test]
    fn scan_table_marks_each_pair() {
        let grid = Grid::new(2.0, 4.0, 0.5).expect("valid grid");
        let table = ScanTable(&scan(&CubicExp, &grid)).to_string();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 3 + 1);
        assert!(lines[2].starts_with("[  2, 2.5]"));
        assert!(lines[2].ends_with("same sign"));
        assert!(lines[4].ends_with("sign change"));
        assert_eq!(lines[5], "Using bracket [3, 3.5]");
    }

    #[test]
    fn bisection_table_has_row_per_iteration() {
        let solution =
            bisection::solve_unobserved(&CubicExp, [3.0, 3.5], &bisection::Config::default())
                .expect("converges");

        let table = BisectionTable(&solution.history).to_string();

        assert_eq!(table.lines().count(), 2 + solution.iters);
        assert!(table.lines().nth(2).is_some_and(|row| row.starts_with("1    3.000000")));
    }

    #[test]
    fn failed_newton_keeps_partial_history() {
        let f = rootlab_core::WithDerivative::new(|x: f64| x * x + 1.0, |x: f64| 2.0 * x);
        let result = newton::solve_unobserved(&f, 0.0, &newton::Config::default());

        assert!(history(&result).is_empty());
        let row = SummaryRow::new("Newton-Raphson", &result);
        assert_eq!(row.root, None);
        assert_eq!(row.iters, 0);
        assert!(row.status.starts_with("derivative near zero"));
        assert!(Outcome(&result).to_string().starts_with("Failed: "));
    }

    #[test]
    fn summary_renders_missing_roots() {
        let secant = secant::solve_unobserved(&CubicExp, [3.0, 3.5], &secant::Config::default());
        let rows = [
            SummaryRow::new("Secant", &secant),
            SummaryRow::failed("Bisection", 0, "no bracket"),
        ];

        let table = Summary(&rows).to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Secant          3.20821"));
        assert!(lines[2].ends_with("converged"));
        assert!(lines[3].contains("did not converge"));
        assert!(lines[3].contains("n/a"));
        assert!(lines[3].ends_with("no bracket"));
    }

    #[test]
    fn iteration_limit_is_not_a_root() {
        let config = secant::Config::new(1, 1e-6, 1e-12).expect("valid config");
        let result = secant::solve_unobserved(&CubicExp, [3.0, 3.5], &config);

        let row = SummaryRow::new("Secant", &result);

        assert_eq!(row.root, None);
        assert_eq!(row.iters, 1);
        assert_eq!(row.status, "iteration limit");
        assert!(Outcome(&result).to_string().starts_with("Iteration limit reached (1)"));
    }

    #[test]
    fn root_listing_labels_in_order() {
        let roots: RootSet = [3.208_219_8, 7.489_838_7].into_iter().collect();

        let listing = RootListing(&roots, &CubicExp).to_string();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Root A: x ≈ 3.208220, f(x) = "));
        assert!(lines[1].starts_with("Root B: x ≈ 7.489839, f(x) = "));
        assert_eq!(RootListing(&RootSet::new(), &CubicExp).to_string(), "No roots found");
    }
}
