//! Render all four chart types as standalone SVG documents.
//!
//! ```sh
//! cargo run --example charts
//! ```
//!
//! Writes `pie.svg`, `line.svg`, `stacked_bar.svg` and `stacked_line.svg`
//! to the current directory.

use std::fs;

use miette::IntoDiagnostic;
use svgchart::{
    DataMatrix, DataPoint, DataSet, Metadata, RenderOptions, line_chart_svg, pie_chart_svg,
    stacked_bar_chart_svg, stacked_line_chart_svg,
};

fn main() -> miette::Result<()> {
    // Dialogue lines per character across three episodes
    let matrix = DataMatrix::try_new(
        vec![
            Metadata::new("Episode 1", "ep1").with_link("/episode/1"),
            Metadata::new("Episode 2", "ep2").with_link("/episode/2"),
            Metadata::new("Episode 3", "ep3").with_link("/episode/3"),
        ],
        vec![
            Metadata::new("Alice", "alice").with_link("/character/alice"),
            Metadata::new("Bob", "bob").with_link("/character/bob"),
            Metadata::new("Carol", "carol").with_link("/character/carol"),
        ],
        vec![
            vec![34.0, 21.0, 8.0],
            vec![18.0, 27.0, 14.0],
            vec![25.0, 9.0, 30.0],
        ],
    )?;

    let options = RenderOptions::new()
        .with_class_prefix("chart_")
        .with_attr("stroke-width", 2.0);

    // Pie: episode 1's share of lines per character
    let mut totals = DataSet::new(Metadata::new("Lines per character", "lines"));
    for (index, column) in matrix.columns().iter().enumerate() {
        let total: f64 = matrix.values().iter().map(|row| row[index]).sum();
        totals.push(DataPoint::try_new(total, column.clone())?);
    }
    let pie = pie_chart_svg(&totals, 400.0, 400.0, 10.0, &options)?;
    fs::write("pie.svg", pie).into_diagnostic()?;

    // Line: one trace per character across episodes
    let line = line_chart_svg(matrix.view(), 600.0, 300.0, 10.0, &options)?;
    fs::write("line.svg", line).into_diagnostic()?;

    // Stacked bars: one bar per episode, segments per character
    let bars = stacked_bar_chart_svg(matrix.view(), 600.0, 300.0, 10.0, false, 0.5, &options)?;
    fs::write("stacked_bar.svg", bars).into_diagnostic()?;

    // Stacked bands, normalized: each episode as 100%
    let bands = stacked_line_chart_svg(matrix.view(), 600.0, 300.0, 10.0, true, &options)?;
    fs::write("stacked_line.svg", bands).into_diagnostic()?;

    println!("wrote pie.svg, line.svg, stacked_bar.svg, stacked_line.svg");
    Ok(())
}
