use plotly::common::{Marker, Mode, Title};
use plotly::layout::{Axis, AxisType};
use plotly::{Layout, Plot, Scatter};

use crate::sweep::SweepPoint;

/// Scatter of |reference - estimate| against N, one marker per sweep point.
pub fn error_plot(points: &[SweepPoint]) -> Plot {
    let xs: Vec<i64> = points.iter().map(|p| p.n).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.error).collect();

    let mut plot = Plot::new();
    let trace = Scatter::new(xs, ys)
        .name("|reference - integral|")
        .mode(Mode::Markers)
        .marker(Marker::new().size(6));
    plot.add_trace(trace);

    let layout = Layout::new()
        .title(Title::new("Midpoint rule error vs N"))
        .x_axis(Axis::new().title(Title::new("N")))
        .y_axis(Axis::new().title(Title::new("absolute error")).type_(AxisType::Log));
    plot.set_layout(layout);
    plot
}
