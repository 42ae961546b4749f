//! Error types for chart input validation.
//!
//! Every error here is raised before any SVG is emitted: data values are
//! checked when points and matrices are constructed, geometry when a chart
//! is constructed. Once inputs exist, rendering is total.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while constructing chart data or chart geometry.
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    /// A value that cannot be charted: negative, NaN or infinite.
    #[error("invalid data value: {value}")]
    #[diagnostic(code(svgchart::data::invalid_value))]
    InvalidValue { value: f64 },

    /// A chart rect or padding with non-finite or negative dimensions.
    #[error("invalid chart geometry: {detail}")]
    #[diagnostic(code(svgchart::chart::invalid_geometry))]
    InvalidGeometry { detail: String },

    /// A value grid whose shape does not match its row/column metadata.
    #[error("matrix shape mismatch: {detail}")]
    #[diagnostic(code(svgchart::matrix::lookup_mismatch))]
    LookupMismatch { detail: String },
}
