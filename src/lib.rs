//! Procedural SVG chart rendering.
//!
//! Renders pie, line, stacked-bar and stacked-line charts from generic
//! two-dimensional numeric data, as SVG fragments or complete standalone
//! documents. Data arrives pre-aggregated from upstream collaborators;
//! this crate does no I/O and holds no state between renders.
//!
//! Module map, leaf-first:
//!
//! - [`errors`] — the validation error taxonomy
//! - [`geometry`] — [`Point`], [`Rect`], the relative→absolute mapping
//! - [`svg`] — escaping, number formatting, element and path builders
//! - [`data`] — [`Metadata`], [`DataPoint`], [`DataSet`]
//! - [`matrix`] — [`DataMatrix`] and its zero-copy [`MatrixView`]s
//! - [`options`] — [`RenderOptions`], attribute precedence
//! - [`chart`] — the four renderers
//! - [`tags`] — snake_case adapters and the standalone-document wrapper
//!
//! ```
//! use svgchart::{DataPoint, DataSet, Metadata, PieChart, Rect, RenderOptions};
//!
//! # fn main() -> Result<(), svgchart::ChartError> {
//! let mut lines = DataSet::new(Metadata::new("Lines per character", "lines"));
//! lines.push(DataPoint::try_new(30.0, Metadata::new("Alice", "alice"))?);
//! lines.push(DataPoint::try_new(10.0, Metadata::new("Bob", "bob"))?);
//!
//! let chart = PieChart::new(Rect::new(0.0, 0.0, 100.0, 100.0), 5.0)?;
//! let svg = chart.render(&lines, &RenderOptions::new().with_class_prefix("char_"));
//! assert!(svg.contains("class='char_alice'"));
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod data;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod matrix;
pub mod options;
pub mod svg;
pub mod tags;

pub use chart::{LineChart, PieChart, StackedBarChart, StackedLineChart};
pub use data::{DataPoint, DataSet, Metadata};
pub use errors::ChartError;
pub use geometry::{Point, Rect};
pub use matrix::{DataMatrix, MatrixView, ScaledData};
pub use options::{Overrides, RenderOptions};
pub use svg::{AttrValue, Element, PathData};
pub use tags::{
    chart_svg, line_chart, line_chart_svg, pie_chart, pie_chart_svg, stacked_bar_chart,
    stacked_bar_chart_svg, stacked_line_chart, stacked_line_chart_svg,
};
