//! Plotting observer for visualizing solver convergence.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use rootlab_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Convergence").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// Non-positive values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver iteration record.
///
/// Every record implementing [`HasEstimate`] and [`HasResidual`] is
/// `Plottable<1>`: the x value is the iteration counter and the single trace
/// is |f(x)|.
///
/// Return `None` from [`x`][Plottable::x] to skip the record entirely, or
/// `None` in a trace slot to skip only that trace.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this record, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl<T: HasEstimate + HasResidual> Plottable<1> for T {
    fn x(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        Some(self.iter() as f64)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.residual().abs())]
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Direct path** — pass `&mut PlotObserver` as the solver observer; the
///   iteration record must be [`Plottable<N>`][Plottable].
/// - **Closure path** — wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record], which lets several solvers share
///   one window.
///
/// # Example — closure path
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["newton", "secant"]);
///
/// newton::solve(&CubicExp, 3.0, &newton::Config::default(), |it: &newton::Iteration| {
///     obs.record(it.iter as f64, [Some(it.residual.abs()), None]);
///     None
/// })?;
///
/// obs.show(ShowConfig::new().title("Convergence").legend().log_y())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the points collected for `trace`.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    #[must_use]
    pub fn points(&self, trace: usize) -> &[[f64; 2]] {
        &self.data[trace]
    }

    /// Returns the named traces ready to draw.
    ///
    /// On a log scale each y becomes log₁₀ y and non-positive values are
    /// dropped, so a residual that hits exactly zero leaves a gap.
    #[must_use]
    pub fn series(&self, log_y: bool) -> Vec<(String, Vec<[f64; 2]>)> {
        self.names
            .iter()
            .zip(&self.data)
            .map(|(name, points)| {
                let points = if log_y {
                    points
                        .iter()
                        .filter(|[_, y]| *y > 0.0)
                        .map(|&[x, y]| [x, y.log10()])
                        .collect()
                } else {
                    points.clone()
                };
                (name.clone(), points)
            })
            .collect()
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let app = PlotApp {
            traces: self.series(config.log_y),
            legend: config.legend,
            y_label: if config.log_y { "log₁₀ |f(x)|" } else { "|f(x)|" },
        };
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    y_label: &'static str,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("convergence")
                .x_axis_label("iteration")
                .y_axis_label(self.y_label);
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}
