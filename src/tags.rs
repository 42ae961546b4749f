//! Template-facing adapters.
//!
//! Thin snake_case wrappers mirroring the template-tag surface: each
//! builds a `Rect(0, 0, width, height)`, constructs the renderer and
//! delegates, plus [`chart_svg`] which wraps a fragment in a complete
//! standalone `<svg>` document carrying the chart kind as its class.

use crate::chart::{LineChart, PieChart, StackedBarChart, StackedLineChart};
use crate::data::DataSet;
use crate::errors::ChartError;
use crate::geometry::Rect;
use crate::matrix::MatrixView;
use crate::options::RenderOptions;
use crate::svg::{Element, fmt_num};

fn full_rect(width: f64, height: f64) -> Rect {
    Rect::new(0.0, 0.0, width, height)
}

pub fn pie_chart(
    data: &DataSet,
    width: f64,
    height: f64,
    padding: f64,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    Ok(PieChart::new(full_rect(width, height), padding)?.render(data, options))
}

pub fn line_chart(
    view: MatrixView<'_>,
    width: f64,
    height: f64,
    padding: f64,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    Ok(LineChart::new(full_rect(width, height), padding)?.render(view, options))
}

pub fn stacked_bar_chart(
    view: MatrixView<'_>,
    width: f64,
    height: f64,
    padding: f64,
    normalized: bool,
    separation: f64,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    Ok(StackedBarChart::new(full_rect(width, height), padding)?
        .with_normalized(normalized)
        .with_separation(separation)?
        .render(view, options))
}

pub fn stacked_line_chart(
    view: MatrixView<'_>,
    width: f64,
    height: f64,
    padding: f64,
    normalized: bool,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    Ok(StackedLineChart::new(full_rect(width, height), padding)?
        .with_normalized(normalized)
        .render(view, options))
}

/// Wrap a rendered fragment in a complete standalone SVG document.
///
/// `chart_class` is the snake_case chart kind (`pie_chart`, `line_chart`,
/// `stacked_bar_chart`, `stacked_line_chart`); the `xlink` namespace is
/// always declared so link-wrapped fragments stay valid.
pub fn chart_svg(chart_class: &str, width: f64, height: f64, fragment: &str) -> String {
    Element::new("svg")
        .attr("class", chart_class)
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .attr("width", width)
        .attr("height", height)
        .attr("viewBox", format!("0 0 {} {}", fmt_num(width), fmt_num(height)))
        .child(fragment)
        .render()
}

/// [`pie_chart`] wrapped as a standalone document.
pub fn pie_chart_svg(
    data: &DataSet,
    width: f64,
    height: f64,
    padding: f64,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    let fragment = pie_chart(data, width, height, padding, options)?;
    Ok(chart_svg("pie_chart", width, height, &fragment))
}

/// [`line_chart`] wrapped as a standalone document.
pub fn line_chart_svg(
    view: MatrixView<'_>,
    width: f64,
    height: f64,
    padding: f64,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    let fragment = line_chart(view, width, height, padding, options)?;
    Ok(chart_svg("line_chart", width, height, &fragment))
}

/// [`stacked_bar_chart`] wrapped as a standalone document.
pub fn stacked_bar_chart_svg(
    view: MatrixView<'_>,
    width: f64,
    height: f64,
    padding: f64,
    normalized: bool,
    separation: f64,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    let fragment = stacked_bar_chart(view, width, height, padding, normalized, separation, options)?;
    Ok(chart_svg("stacked_bar_chart", width, height, &fragment))
}

/// [`stacked_line_chart`] wrapped as a standalone document.
pub fn stacked_line_chart_svg(
    view: MatrixView<'_>,
    width: f64,
    height: f64,
    padding: f64,
    normalized: bool,
    options: &RenderOptions,
) -> Result<String, ChartError> {
    let fragment = stacked_line_chart(view, width, height, padding, normalized, options)?;
    Ok(chart_svg("stacked_line_chart", width, height, &fragment))
}
