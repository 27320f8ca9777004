//! A chart of a function over a domain with its roots marked.
//!
//! [`Chart`] holds everything needed to draw the picture: the sampled curve,
//! the visible range, and one labelled [`Marker`] per root. Rendering through
//! egui is available with the `plot` feature via `Chart::show`.

use rootlab_core::{Function, RootSet};

/// Horizontal offset of a marker's text label from its root.
pub const LABEL_OFFSET_X: f64 = 0.5;

/// Height at which marker text labels are placed.
pub const LABEL_Y: f64 = 5.0;

/// A labelled root on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Label such as `"A"`.
    pub label: String,

    /// Abscissa of the root; the marker sits at `(x, 0)`.
    pub x: f64,
}

impl Marker {
    /// Legend entry, for example `"Root A ≈ 3.2082"`.
    #[must_use]
    pub fn legend(&self) -> String {
        format!("Root {} ≈ {:.4}", self.label, self.x)
    }

    /// Position of the text label.
    #[must_use]
    pub fn label_position(&self) -> [f64; 2] {
        [self.x + LABEL_OFFSET_X, LABEL_Y]
    }

    /// Arrow from the text label down to the root, as `[tail, tip]`.
    #[must_use]
    pub fn arrow(&self) -> [[f64; 2]; 2] {
        [self.label_position(), [self.x, 0.0]]
    }
}

/// A sampled function with marked roots.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    title: String,
    curve_name: String,
    curve: Vec<[f64; 2]>,
    domain: [f64; 2],
    range: Option<[f64; 2]>,
    markers: Vec<Marker>,
}

impl Chart {
    /// Samples `f` at `samples` evenly spaced points spanning `domain`,
    /// endpoints included.
    ///
    /// At least two samples are always taken.
    pub fn new<F>(f: &F, domain: [f64; 2], samples: usize) -> Self
    where
        F: Function + ?Sized,
    {
        let [start, end] = domain;
        let samples = samples.max(2);

        #[allow(clippy::cast_precision_loss)]
        let curve = (0..samples)
            .map(|i| {
                let t = i as f64 / (samples - 1) as f64;
                let x = start + t * (end - start);
                [x, f.evaluate(x)]
            })
            .collect();

        Self {
            title: String::new(),
            curve_name: String::from("f(x)"),
            curve,
            domain,
            range: None,
            markers: Vec::new(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the legend entry for the curve.
    #[must_use]
    pub fn curve_name(mut self, name: impl Into<String>) -> Self {
        self.curve_name = name.into();
        self
    }

    /// Clips the visible y-axis to `range`.
    ///
    /// Samples outside the range are kept; only the view is limited.
    #[must_use]
    pub fn range(mut self, range: [f64; 2]) -> Self {
        self.range = Some(range);
        self
    }

    /// Adds one marker per root, labelled in insertion order.
    #[must_use]
    pub fn roots(mut self, roots: &RootSet) -> Self {
        self.markers
            .extend(roots.labeled().map(|(label, x)| Marker { label, x }));
        self
    }

    /// Returns the sampled `(x, f(x))` points.
    #[must_use]
    pub fn curve(&self) -> &[[f64; 2]] {
        &self.curve
    }

    /// Returns the root markers.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns the sampled domain.
    #[must_use]
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Returns the visible y range.
    ///
    /// Without an explicit range, this spans the sampled values.
    #[must_use]
    pub fn visible_range(&self) -> [f64; 2] {
        self.range.unwrap_or_else(|| {
            self.curve
                .iter()
                .map(|p| p[1])
                .filter(|y| y.is_finite())
                .fold([f64::INFINITY, f64::NEG_INFINITY], |[lo, hi], y| {
                    [lo.min(y), hi.max(y)]
                })
        })
    }
}

#[cfg(feature = "plot")]
mod render {
    use eframe::egui::{self, Color32, RichText};
    use egui_plot::{
        Arrows, HLine, Legend, Line, MarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints,
        Points, Text, VLine,
    };

    use super::{Chart, Marker};

    const CURVE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
    const MARKER_COLORS: [Color32; 4] = [
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(255, 127, 14),
    ];

    impl Chart {
        /// Opens a blocking egui window displaying the chart.
        ///
        /// # Errors
        ///
        /// Returns an error if the native window cannot be created.
        pub fn show(self) -> Result<(), eframe::Error> {
            let options = eframe::NativeOptions::default();
            let title = self.title.clone();

            eframe::run_native(
                &title,
                options,
                Box::new(move |_cc| Ok(Box::new(ChartApp { chart: self }))),
            )
        }
    }

    struct ChartApp {
        chart: Chart,
    }

    impl eframe::App for ChartApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            let chart = &self.chart;
            let [x_min, x_max] = chart.domain();
            let [y_min, y_max] = chart.visible_range();

            egui::CentralPanel::default().show(ctx, |ui| {
                Plot::new("chart")
                    .legend(Legend::default())
                    .x_axis_label("x")
                    .y_axis_label("f(x)")
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                            [x_min, y_min],
                            [x_max, y_max],
                        ));
                        plot_ui.hline(HLine::new(0.0).color(Color32::GRAY));
                        plot_ui.vline(VLine::new(0.0).color(Color32::GRAY));

                        let curve: PlotPoints = chart.curve().iter().copied().collect();
                        plot_ui.line(Line::new(curve).color(CURVE_COLOR).name(&chart.curve_name));

                        for (i, marker) in chart.markers().iter().enumerate() {
                            draw_marker(plot_ui, marker, MARKER_COLORS[i % MARKER_COLORS.len()]);
                        }
                    });
            });
        }
    }

    fn draw_marker(plot_ui: &mut egui_plot::PlotUi, marker: &Marker, color: Color32) {
        plot_ui.points(
            Points::new(vec![[marker.x, 0.0]])
                .shape(MarkerShape::Circle)
                .radius(6.0)
                .color(color)
                .name(marker.legend()),
        );

        let [tail, tip] = marker.arrow();
        plot_ui.arrows(Arrows::new(vec![tail], vec![tip]).color(color));

        let [x, y] = marker.label_position();
        plot_ui.text(Text::new(
            PlotPoint::new(x, y),
            RichText::new(format!("Root {}", marker.label))
                .strong()
                .color(color),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use rootlab_core::CubicExp;

    #[test]
    fn samples_span_domain_inclusive() {
        let chart = Chart::new(&CubicExp, [-10.0, 10.0], 1000);

        let curve = chart.curve();
        assert_eq!(curve.len(), 1000);
        assert_relative_eq!(curve[0][0], -10.0);
        assert_relative_eq!(curve[999][0], 10.0);
        assert_relative_eq!(curve[999][1], CubicExp.evaluate(10.0));
    }

    #[test]
    fn takes_at_least_two_samples() {
        let f = |x: f64| 2.0 * x;

        let chart = Chart::new(&f, [0.0, 1.0], 0);

        assert_eq!(chart.curve(), [[0.0, 0.0], [1.0, 2.0]]);
    }

    #[test]
    fn explicit_range_clips_view_only() {
        let chart = Chart::new(&CubicExp, [-10.0, 10.0], 100).range([-30.0, 30.0]);

        assert_eq!(chart.visible_range(), [-30.0, 30.0]);
        assert_eq!(chart.curve().len(), 100);
    }

    #[test]
    fn default_range_spans_samples() {
        let f = |x: f64| x * x;

        let chart = Chart::new(&f, [-2.0, 1.0], 4);

        assert_eq!(chart.visible_range(), [0.0, 4.0]);
    }

    #[test]
    fn markers_follow_root_labels() {
        let roots: RootSet = [3.208_219_8, 7.489_838_7].into_iter().collect();

        let chart = Chart::new(&CubicExp, [-10.0, 10.0], 10).roots(&roots);

        let markers = chart.markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].label, "A");
        assert_eq!(markers[1].label, "B");
        assert_eq!(markers[0].legend(), "Root A ≈ 3.2082");
        assert_relative_eq!(markers[1].label_position()[0], 7.989_838_7);
        assert_relative_eq!(markers[1].label_position()[1], LABEL_Y);
    }

    #[test]
    fn arrow_points_from_label_to_root() {
        let marker = Marker {
            label: String::from("A"),
            x: 3.0,
        };

        let [tail, tip] = marker.arrow();

        assert_eq!(tail, [3.5, 5.0]);
        assert_eq!(tip, [3.0, 0.0]);
    }
}
