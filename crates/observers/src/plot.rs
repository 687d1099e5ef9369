//! Convergence plots rendered with egui.
//!
//! Collect traces (for example [`ErrorTrace::points`](crate::ErrorTrace::points)
//! and [`Bound::series`](crate::bounds::Bound::series)) into a [`Figure`], then
//! call [`Figure::show`].

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Configuration for rendering a [`Figure`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// figure.show(ShowConfig::new().title("Bisection").legend().log_y())?;
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

    /// Plots log₁₀ of every y value; non-positive values are skipped.
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

/// Style of a trace in a [`Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Solid line, for measured data.
    #[default]
    Solid,

    /// Dashed line, for reference curves such as error bounds.
    Dashed,
}

/// A set of named `[x, y]` traces shown together in one plot window.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    traces: Vec<Trace>,
}

#[derive(Debug, Clone)]
struct Trace {
    name: String,
    style: Style,
    points: Vec<[f64; 2]>,
}

impl Figure {
    /// Creates an empty figure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a solid trace.
    pub fn trace(&mut self, name: impl Into<String>, points: impl IntoIterator<Item = [f64; 2]>) {
        self.styled(name, Style::Solid, points);
    }

    /// Adds a trace with the given style.
    pub fn styled(
        &mut self,
        name: impl Into<String>,
        style: Style,
        points: impl IntoIterator<Item = [f64; 2]>,
    ) {
        self.traces.push(Trace {
            name: name.into(),
            style,
            points: points.into_iter().collect(),
        });
    }

    /// Returns the number of traces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Returns true if the figure has no traces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Opens a blocking egui window displaying every trace.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces = self
            .traces
            .into_iter()
            .map(|trace| Trace {
                points: scale(&trace.points, config.log_y),
                ..trace
            })
            .collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(FigureApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                }))
            }),
        )
    }
}

/// Applies the y-axis scale, dropping points log₁₀ cannot represent.
fn scale(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if log_y {
        points
            .iter()
            .filter(|p| p[1] > 0.0)
            .map(|p| [p[0], p[1].log10()])
            .collect()
    } else {
        points.to_vec()
    }
}

/// The egui [`eframe::App`] that renders a figure.
struct FigureApp {
    traces: Vec<Trace>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("radix_figure").x_axis_label("iteration");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀ error");
            }
            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let points: PlotPoints = trace.points.iter().copied().collect();
                    let mut line = Line::new(points).name(&trace.name);
                    if trace.style == Style::Dashed {
                        line = line.style(egui_plot::LineStyle::dashed_loose());
                    }
                    plot_ui.line(line);
                }
            });
        });
    }
}
