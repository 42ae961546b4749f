//! The four chart renderers: pie, line, stacked-bar, stacked-line.
//!
//! Each renderer is constructed with a target rect and padding (validated
//! once, `Result`), and `render` is then a pure function from data and
//! options to an SVG fragment: no state survives between calls and
//! nothing is mutated at render time, so independent renders can run in
//! parallel. All vertical positioning routes through
//! [`Rect::relative_to_absolute`], the single Y-flip.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use crate::data::{DataPoint, DataSet};
use crate::errors::ChartError;
use crate::geometry::{Point, Rect};
use crate::log::{debug, warn};
use crate::matrix::MatrixView;
use crate::options::{Overrides, RenderOptions};
use crate::svg::{Element, PathData, fmt_num, fmt_num_precision};

/// Validate a chart rect and padding, returning the padded inner rect.
///
/// Non-finite or negative inputs are errors; padding that swallows the
/// whole extent is not, it clamps to a zero-sized rect and the chart
/// degrades to an empty fragment.
fn padded_rect(rect: Rect, padding: f64) -> Result<Rect, ChartError> {
    if !rect.is_finite() || !padding.is_finite() {
        return Err(ChartError::InvalidGeometry {
            detail: format!("non-finite rect {rect:?} or padding {padding}"),
        });
    }
    if rect.width < 0.0 || rect.height < 0.0 || padding < 0.0 {
        return Err(ChartError::InvalidGeometry {
            detail: format!(
                "negative extent: {} x {} with padding {}",
                rect.width, rect.height, padding
            ),
        });
    }
    let inner = rect.shrunk(padding);
    if inner.width == 0.0 || inner.height == 0.0 {
        warn!(
            width = rect.width,
            height = rect.height,
            padding,
            "padding consumed the chart rect, rendering will be empty"
        );
    }
    Ok(inner)
}

/// Tooltip text for a point: `"label (value)"`, or
/// `"label (value, pct%)"` with the percentage against `scale` at two
/// significant digits when the chart is normalized.
fn format_title(point: &DataPoint, scale: f64, normalized: bool) -> String {
    if normalized {
        format!(
            "{} ({}, {}%)",
            point.meta().label,
            fmt_num(point.value()),
            fmt_num_precision(point.percent(scale) * 100.0, 2)
        )
    } else {
        format!("{} ({})", point.meta().label, fmt_num(point.value()))
    }
}

/// Absolute position for a value: X spreads `count` records evenly across
/// the rect (a lone record sits at the left edge), Y is the normalized
/// value through the flip.
fn value_point(rect: &Rect, normalized_y: f64, index: usize, count: usize) -> Point {
    let x = if count < 2 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    };
    rect.relative_to_absolute(Point::new(x, normalized_y))
}

/// One full-height stroke per record index, as a single `<path>`.
fn render_grid(rect: &Rect, records: usize, class: &str) -> String {
    let mut d = PathData::new();
    for index in 0..records {
        d = d
            .move_to(value_point(rect, 0.0, index, records))
            .line_to(value_point(rect, 1.0, index, records));
    }
    let mut out = Element::new("path").attr("class", class).attr("d", d).render();
    out.push('\n');
    out
}

/// A `<circle>` marker for a point, titled against the chart's scale.
/// Markers carry no `r`; CSS sizes them.
fn render_marker(
    pos: Point,
    point: &DataPoint,
    scale: f64,
    normalized: bool,
    options: &RenderOptions,
) -> String {
    let title = format_title(point, scale, normalized);
    options.render_element(
        "circle",
        point.meta(),
        Some(point.value()),
        Some(title),
        &Overrides::new().set("cx", pos.x).set("cy", pos.y),
    )
}

/// Division that follows the percent convention: 0 when the scale is 0.
fn frac(value: f64, scale: f64) -> f64 {
    if scale == 0.0 { 0.0 } else { value / scale }
}

/// Pie chart: one `<path>` slice per point, angles proportional to the
/// point's share of the set total. Always normalized.
#[derive(Clone, Debug)]
pub struct PieChart {
    rect: Rect,
    radius: f64,
    start_angle: f64,
}

impl PieChart {
    pub fn new(rect: Rect, padding: f64) -> Result<PieChart, ChartError> {
        let rect = padded_rect(rect, padding)?;
        Ok(PieChart {
            rect,
            radius: rect.width.min(rect.height) / 2.0,
            start_angle: 0.0,
        })
    }

    /// Override the radius (defaults to half the smaller padded extent).
    /// Non-finite or negative radii are rejected before any SVG exists.
    pub fn with_radius(mut self, radius: f64) -> Result<PieChart, ChartError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ChartError::InvalidGeometry {
                detail: format!("invalid pie radius {radius}"),
            });
        }
        self.radius = radius;
        Ok(self)
    }

    /// Angle of the first slice's leading edge, in radians.
    pub fn with_start_angle(mut self, angle: f64) -> Result<PieChart, ChartError> {
        if !angle.is_finite() {
            return Err(ChartError::InvalidGeometry {
                detail: format!("non-finite start angle {angle}"),
            });
        }
        self.start_angle = angle;
        Ok(self)
    }

    fn circle_point(&self, angle: f64) -> Point {
        Point::from(self.rect.center().to_vec2() + self.radius * DVec2::from_angle(angle))
    }

    /// Render slices in input order, clockwise from the start angle.
    ///
    /// A zero total gives every slice a zero angle: no visible output,
    /// no error.
    pub fn render(&self, data: &DataSet, options: &RenderOptions) -> String {
        let total = data.total();
        debug!(points = data.len(), total, "rendering pie chart");

        let mut out = String::new();
        let mut angle = self.start_angle;
        for point in data {
            let delta = TAU * point.percent(total);
            let d = PathData::new()
                .move_to(self.rect.center())
                .line_to(self.circle_point(angle))
                .arc_to(
                    Point::new(self.radius, self.radius),
                    delta > PI,
                    true,
                    self.circle_point(angle + delta),
                )
                .close();
            let title = format_title(point, total, true);
            out.push_str(&options.render_element(
                "path",
                point.meta(),
                Some(point.value()),
                Some(title),
                &Overrides::new().set("d", d),
            ));
            angle += delta;
        }
        out
    }
}

/// Line chart: one polyline plus point markers per item, drawn over a
/// full-height grid stroke per record. Y scales against the view maximum
/// (or an explicit display maximum), not per series.
#[derive(Clone, Debug)]
pub struct LineChart {
    rect: Rect,
    grid_class: String,
}

impl LineChart {
    pub fn new(rect: Rect, padding: f64) -> Result<LineChart, ChartError> {
        Ok(LineChart {
            rect: padded_rect(rect, padding)?,
            grid_class: "grid".to_string(),
        })
    }

    pub fn with_grid_class(mut self, class: impl Into<String>) -> LineChart {
        self.grid_class = class.into();
        self
    }

    pub fn render(&self, view: MatrixView<'_>, options: &RenderOptions) -> String {
        self.render_scaled(view, view.max_value(), options)
    }

    /// Render a single series; the set's points become the records.
    pub fn render_dataset(&self, data: &DataSet, options: &RenderOptions) -> String {
        self.render(MatrixView::SingleItem(data), options)
    }

    /// Render with a caller-supplied display maximum, e.g. a shared
    /// Y scale across several charts ([`crate::matrix::ScaledData`]).
    pub fn render_scaled(
        &self,
        view: MatrixView<'_>,
        display_max: f64,
        options: &RenderOptions,
    ) -> String {
        debug!(
            records = view.record_count(),
            items = view.item_count(),
            display_max,
            "rendering line chart"
        );
        let mut out = render_grid(&self.rect, view.record_count(), &self.grid_class);
        // Reversed, so the first item is drawn last and ends up on top
        for data_set in view.item_datasets().iter().rev() {
            out.push_str(&self.render_trace(data_set, display_max, options));
        }
        out
    }

    /// One item's group: the polyline, then its markers.
    fn render_trace(&self, data_set: &DataSet, max: f64, options: &RenderOptions) -> String {
        let mut markers = String::new();
        for (index, point) in data_set.iter().enumerate() {
            let pos = value_point(&self.rect, point.normalized(max), index, data_set.len());
            markers.push_str(&render_marker(pos, point, max, false, options));
        }
        let mut out = Element::new("g")
            .attrs(options.attributes(data_set.meta(), None, &Overrides::new().unset("r")))
            .child(self.render_line(data_set, max, options))
            .child(markers)
            .render();
        out.push('\n');
        out
    }

    fn render_line(&self, data_set: &DataSet, max: f64, options: &RenderOptions) -> String {
        let mut d = PathData::new();
        for (index, point) in data_set.iter().enumerate() {
            let pos = value_point(&self.rect, point.normalized(max), index, data_set.len());
            d = match index {
                0 => d.move_to(pos),
                1 => d.line_to(pos),
                _ => d.point(pos),
            };
        }
        options.render_element(
            "path",
            data_set.meta(),
            None,
            None,
            &Overrides::new().set("d", d).unset("r"),
        )
    }
}

/// Stacked bar chart: one vertical bar per record, one `<rect>` per item
/// stacked bottom-up in input order.
#[derive(Clone, Debug)]
pub struct StackedBarChart {
    rect: Rect,
    normalized: bool,
    separation: f64,
}

impl StackedBarChart {
    pub fn new(rect: Rect, padding: f64) -> Result<StackedBarChart, ChartError> {
        Ok(StackedBarChart {
            rect: padded_rect(rect, padding)?,
            normalized: false,
            separation: 1.0,
        })
    }

    /// Scale every bar to its own total (each bar fills the height)
    /// instead of the global maximum record total.
    pub fn with_normalized(mut self, normalized: bool) -> StackedBarChart {
        self.normalized = normalized;
        self
    }

    /// Gap width as a ratio of bar width (default 1: gaps as wide as
    /// bars). Non-finite or negative ratios are rejected before any SVG
    /// exists.
    pub fn with_separation(mut self, separation: f64) -> Result<StackedBarChart, ChartError> {
        if !separation.is_finite() || separation < 0.0 {
            return Err(ChartError::InvalidGeometry {
                detail: format!("invalid bar separation {separation}"),
            });
        }
        self.separation = separation;
        Ok(self)
    }

    /// Relative horizontal slot for bar `index` of `count`, sized so the
    /// bars and their gaps exactly fill the rect.
    fn sub_rect(&self, index: usize, count: usize) -> Rect {
        let n = count as f64;
        let width = 1.0 / (n + n * self.separation);
        let gap = width * self.separation;
        Rect::new(gap / 2.0 + (gap + width) * index as f64, 0.0, width, 1.0)
    }

    pub fn render(&self, view: MatrixView<'_>, options: &RenderOptions) -> String {
        let records = view.record_datasets();
        let global_max = records.iter().map(DataSet::total).fold(0.0_f64, f64::max);
        debug!(
            records = records.len(),
            global_max,
            normalized = self.normalized,
            "rendering stacked bar chart"
        );

        let mut out = String::new();
        for (index, data_set) in records.iter().enumerate() {
            let sub = self.sub_rect(index, records.len());
            let scale = if self.normalized { data_set.total() } else { global_max };
            out.push_str(&self.render_bar(data_set, scale, sub, options));
        }
        out
    }

    /// One bar: segments stacked bottom-up inside `sub`, wrapped in `<g>`.
    fn render_bar(
        &self,
        data_set: &DataSet,
        scale: f64,
        sub: Rect,
        options: &RenderOptions,
    ) -> String {
        let mut segments = String::new();
        let mut y = sub.y;
        for point in data_set {
            let rel = Rect::new(sub.x, y, sub.width, point.percent(scale) * sub.height);
            let abs = self.rect.relative_to_absolute_rect(rel);
            let title = format_title(point, scale, self.normalized);
            segments.push_str(&options.render_element(
                "rect",
                point.meta(),
                Some(point.value()),
                Some(title),
                &Overrides::new()
                    .set("x", abs.x)
                    .set("y", abs.y)
                    .set("width", abs.width)
                    .set("height", abs.height),
            ));
            y += rel.height;
        }
        let mut out = Element::new("g").child(segments).render();
        out.push('\n');
        out
    }
}

/// Stacked line chart: one closed band per item, threading through the
/// cumulative sums above and below the item at every record. Markers are
/// emitted only for non-zero values.
#[derive(Clone, Debug)]
pub struct StackedLineChart {
    rect: Rect,
    normalized: bool,
    grid_class: String,
}

impl StackedLineChart {
    pub fn new(rect: Rect, padding: f64) -> Result<StackedLineChart, ChartError> {
        Ok(StackedLineChart {
            rect: padded_rect(rect, padding)?,
            normalized: false,
            grid_class: "grid".to_string(),
        })
    }

    /// Scale every record to its own total instead of the global maximum
    /// record total.
    pub fn with_normalized(mut self, normalized: bool) -> StackedLineChart {
        self.normalized = normalized;
        self
    }

    pub fn with_grid_class(mut self, class: impl Into<String>) -> StackedLineChart {
        self.grid_class = class.into();
        self
    }

    /// Output order: all band paths (items reversed, so the first item's
    /// band is on top), then the grid, then the marker groups.
    pub fn render(&self, view: MatrixView<'_>, options: &RenderOptions) -> String {
        let records = view.record_count();
        let items = view.item_count();
        debug!(records, items, normalized = self.normalized, "rendering stacked line chart");
        if records == 0 || items == 0 {
            return render_grid(&self.rect, records, &self.grid_class);
        }

        // accumulate[r][i] = sum of the values of items before i at
        // record r; totals drive the per-record or global scale
        let mut accumulate = vec![vec![0.0; items]; records];
        let mut totals = vec![0.0; records];
        for (r, row) in accumulate.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (i, slot) in row.iter_mut().enumerate() {
                *slot = sum;
                sum += view.value_at(r, i);
            }
            totals[r] = sum;
        }
        let global_max = totals.iter().copied().fold(0.0_f64, f64::max);
        let max_for = |r: usize| if self.normalized { totals[r] } else { global_max };

        let mut paths = String::new();
        let mut markers = String::new();
        for i in (0..items).rev() {
            let item_meta = view.item_meta(i);
            let mut d = PathData::new().move_to(value_point(
                &self.rect,
                frac(accumulate[0][i], max_for(0)),
                0,
                records,
            ));
            let mut circles = String::new();
            // Forward along the top edge of the band
            for r in 0..records {
                let value = view.value_at(r, i);
                let pos_y = frac(value + accumulate[r][i], max_for(r));
                let pos = value_point(&self.rect, pos_y, r, records);
                d = if r == 0 { d.line_to(pos) } else { d.point(pos) };
                if value != 0.0 {
                    let point = DataPoint::new(value, item_meta.clone());
                    circles.push_str(&render_marker(
                        pos,
                        &point,
                        max_for(r),
                        self.normalized,
                        options,
                    ));
                }
            }
            // Back along the bottom edge to close the band visually
            for r in (0..records).rev() {
                let pos_y = frac(accumulate[r][i], max_for(r));
                d = d.point(value_point(&self.rect, pos_y, r, records));
            }

            if !circles.is_empty() {
                markers.push_str(
                    &Element::new("g")
                        .attr("data-item", item_meta.id.as_str())
                        .child(circles)
                        .render(),
                );
                markers.push('\n');
            }
            paths.push_str(&options.render_element(
                "path",
                item_meta,
                None,
                None,
                &Overrides::new().set("d", d).unset("r"),
            ));
        }

        paths + &render_grid(&self.rect, records, &self.grid_class) + &markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Metadata;
    use crate::matrix::DataMatrix;

    const EPSILON: f64 = 1e-10;

    fn meta(id: &str) -> Metadata {
        Metadata::new(id, id)
    }

    fn set(id: &str, values: &[f64]) -> DataSet {
        DataSet::from_points(
            meta(id),
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| DataPoint::try_new(v, meta(&format!("p{i}"))).unwrap()),
        )
    }

    fn square() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn padded_rect_rejects_bad_geometry() {
        assert!(padded_rect(Rect::new(0.0, 0.0, f64::NAN, 10.0), 0.0).is_err());
        assert!(padded_rect(square(), f64::INFINITY).is_err());
        assert!(padded_rect(Rect::new(0.0, 0.0, -1.0, 10.0), 0.0).is_err());
        assert!(padded_rect(square(), -1.0).is_err());
    }

    #[test]
    fn padded_rect_clamps_overflowing_padding() {
        let inner = padded_rect(square(), 60.0).unwrap();
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
    }

    #[test]
    fn setters_reject_invalid_parameters() {
        let pie = PieChart::new(square(), 0.0).unwrap();
        assert!(pie.clone().with_radius(f64::NAN).is_err());
        assert!(pie.clone().with_radius(-1.0).is_err());
        assert!(pie.with_start_angle(f64::INFINITY).is_err());

        let bars = StackedBarChart::new(square(), 0.0).unwrap();
        assert!(bars.clone().with_separation(-1.0).is_err());
        assert!(bars.with_separation(f64::NAN).is_err());
    }

    #[test]
    fn format_title_forms() {
        let point = DataPoint::try_new(5.0, Metadata::new("Alice", "alice")).unwrap();
        assert_eq!(format_title(&point, 20.0, true), "Alice (5, 25%)");
        assert_eq!(format_title(&point, 20.0, false), "Alice (5)");
        // Two significant digits on the percentage
        assert_eq!(format_title(&point, 15.0, true), "Alice (5, 33%)");
        // Zero total follows the percent convention
        assert_eq!(format_title(&point, 0.0, true), "Alice (5, 0%)");
    }

    #[test]
    fn value_point_spreads_records() {
        let rect = square();
        assert_eq!(value_point(&rect, 0.0, 0, 3), Point::new(0.0, 100.0));
        assert_eq!(value_point(&rect, 0.5, 1, 3), Point::new(50.0, 50.0));
        assert_eq!(value_point(&rect, 1.0, 2, 3), Point::new(100.0, 0.0));
        // A lone record sits at the left edge
        assert_eq!(value_point(&rect, 1.0, 0, 1), Point::new(0.0, 0.0));
    }

    #[test]
    fn pie_slice_angles() {
        let chart = PieChart::new(square(), 0.0).unwrap();
        let data = set("s", &[1.0, 1.0, 2.0]);

        // Deltas pi/2, pi/2, pi; the edge points land on the circle's
        // cardinal points
        let svg = chart.render(&data, &RenderOptions::new());
        let paths: Vec<&str> = svg.lines().collect();
        assert_eq!(paths.len(), 3);
        assert!(paths[0].contains("d='M 50,50 L 100,50 A 50,50 0 0 1 50,100 Z'"));
        assert!(paths[1].contains("d='M 50,50 L 50,100 A 50,50 0 0 1 0,50 Z'"));
        assert!(paths[2].contains("d='M 50,50 L 0,50 A 50,50 0 0 1 100,50 Z'"));
        // Only the half-circle slice has a deltas sum wrapping back to the
        // start: the last arc ends where the first began
        assert!(paths[2].contains("100,50 Z"));
    }

    #[test]
    fn pie_large_arc_flag() {
        let chart = PieChart::new(square(), 0.0).unwrap();
        let data = set("s", &[3.0, 1.0]);

        let svg = chart.render(&data, &RenderOptions::new());
        let paths: Vec<&str> = svg.lines().collect();
        // 3/4 of the circle: large-arc flag set
        assert!(paths[0].contains("A 50,50 0 1 1"));
        assert!(paths[1].contains("A 50,50 0 0 1"));
    }

    #[test]
    fn pie_titles_carry_percentages() {
        let chart = PieChart::new(square(), 0.0).unwrap();
        let data = set("s", &[1.0, 1.0, 2.0]);

        let svg = chart.render(&data, &RenderOptions::new());
        assert!(svg.contains("<title>p0 (1, 25%)</title>"));
        assert!(svg.contains("<title>p2 (2, 50%)</title>"));
    }

    #[test]
    fn pie_zero_total_renders_zero_angles() {
        let chart = PieChart::new(square(), 0.0).unwrap();
        let data = set("s", &[0.0, 0.0]);

        let svg = chart.render(&data, &RenderOptions::new());
        // Both slices collapse onto the start angle
        assert_eq!(svg.matches("L 100,50 A 50,50 0 0 1 100,50 Z").count(), 2);
    }

    #[test]
    fn pie_empty_dataset_renders_nothing() {
        let chart = PieChart::new(square(), 0.0).unwrap();
        assert_eq!(chart.render(&set("s", &[]), &RenderOptions::new()), "");
    }

    #[test]
    fn line_chart_positions_and_flip() {
        let chart = LineChart::new(square(), 0.0).unwrap();
        let svg = chart.render_dataset(&set("s", &[0.0, 5.0, 10.0]), &RenderOptions::new());

        assert!(svg.contains("d='M 0,100 L 50,50 100,0 '"));
        assert!(svg.contains("cx='0' cy='100'"));
        assert!(svg.contains("cx='50' cy='50'"));
        assert!(svg.contains("cx='100' cy='0'"));
        assert!(svg.contains("<title>p1 (5)</title>"));
    }

    #[test]
    fn line_chart_grid_spans_height() {
        let chart = LineChart::new(square(), 0.0).unwrap();
        let svg = chart.render_dataset(&set("s", &[0.0, 5.0, 10.0]), &RenderOptions::new());

        assert!(svg.starts_with(
            "<path class='grid' d='M 0,100 L 0,0 M 50,100 L 50,0 M 100,100 L 100,0 '/>\n"
        ));
    }

    #[test]
    fn line_chart_draws_first_item_last() {
        let matrix = DataMatrix::try_new(
            vec![meta("r0"), meta("r1")],
            vec![meta("a"), meta("b")],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .unwrap();
        let chart = LineChart::new(square(), 0.0).unwrap();
        let options = RenderOptions::new().with_class_prefix("line_");

        let svg = chart.render(matrix.view(), &options);
        let a = svg.find("class='line_a'").unwrap();
        let b = svg.find("class='line_b'").unwrap();
        assert!(b < a);
    }

    #[test]
    fn line_chart_scaled_uses_display_max() {
        let chart = LineChart::new(square(), 0.0).unwrap();
        let data = set("s", &[5.0]);
        let svg = chart.render_scaled(MatrixView::SingleItem(&data), 10.0, &RenderOptions::new());
        // 5 of 10 puts the lone marker at mid height
        assert!(svg.contains("cx='0' cy='50'"));
    }

    #[test]
    fn stacked_bar_slot_math() {
        let chart = StackedBarChart::new(square(), 0.0).unwrap();
        let sub = chart.sub_rect(0, 2);
        assert!((sub.width - 0.25).abs() < EPSILON);
        assert!((sub.x - 0.125).abs() < EPSILON);
        let second = chart.sub_rect(1, 2);
        assert!((second.x - 0.625).abs() < EPSILON);

        let tight = StackedBarChart::new(square(), 0.0).unwrap().with_separation(0.0).unwrap();
        assert!((tight.sub_rect(0, 2).width - 0.5).abs() < EPSILON);
        assert!((tight.sub_rect(1, 2).x - 0.5).abs() < EPSILON);
    }

    #[test]
    fn stacked_bar_global_scale() {
        let matrix = DataMatrix::try_new(
            vec![meta("r0"), meta("r1")],
            vec![meta("a"), meta("b")],
            vec![vec![4.0, 6.0], vec![5.0, 0.0]],
        )
        .unwrap();
        let chart = StackedBarChart::new(square(), 0.0).unwrap().with_separation(0.0).unwrap();

        // Global maximum record total is 10: record 1's lone segment is
        // half height
        let svg = chart.render(matrix.view(), &RenderOptions::new());
        assert!(svg.contains("x='0' y='60' width='50' height='40'"));
        assert!(svg.contains("x='0' y='0' width='50' height='60'"));
        assert!(svg.contains("x='50' y='50' width='50' height='50'"));
    }

    #[test]
    fn stacked_bar_normalized_scale() {
        let matrix = DataMatrix::try_new(
            vec![meta("r0"), meta("r1")],
            vec![meta("a"), meta("b")],
            vec![vec![4.0, 6.0], vec![5.0, 0.0]],
        )
        .unwrap();
        let chart = StackedBarChart::new(square(), 0.0)
            .unwrap()
            .with_separation(0.0)
            .unwrap()
            .with_normalized(true);

        // Each record scales to its own total: record 1 fills the height
        let svg = chart.render(matrix.view(), &RenderOptions::new());
        assert!(svg.contains("x='50' y='0' width='50' height='100'"));
        assert!(svg.contains("<title>a (5, 100%)</title>"));
    }

    #[test]
    fn stacked_bar_zero_records() {
        let matrix = DataMatrix::try_new(vec![], vec![meta("a")], vec![]).unwrap();
        let chart = StackedBarChart::new(square(), 0.0).unwrap();
        assert_eq!(chart.render(matrix.view(), &RenderOptions::new()), "");
    }

    #[test]
    fn stacked_line_bands_thread_cumulative_sums() {
        let matrix = DataMatrix::try_new(
            vec![meta("r0"), meta("r1")],
            vec![meta("a"), meta("b")],
            vec![vec![1.0, 1.0], vec![2.0, 2.0]],
        )
        .unwrap();
        let chart = StackedLineChart::new(square(), 0.0).unwrap();

        let svg = chart.render(matrix.view(), &RenderOptions::new());
        // Item b (drawn first): forward through 2/4 and 4/4, back through
        // 1/4 and 2/4
        assert!(svg.contains("d='M 0,75 L 0,50 100,0 100,50 0,75 '"));
        // Item a: forward through 1/4 and 2/4, back along the baseline
        assert!(svg.contains("d='M 0,100 L 0,75 100,50 100,100 0,100 '"));
    }

    #[test]
    fn stacked_line_output_order() {
        let matrix = DataMatrix::try_new(
            vec![meta("r0"), meta("r1")],
            vec![meta("a"), meta("b")],
            vec![vec![1.0, 1.0], vec![2.0, 2.0]],
        )
        .unwrap();
        let chart = StackedLineChart::new(square(), 0.0).unwrap();

        let svg = chart.render(matrix.view(), &RenderOptions::new());
        let grid = svg.find("class='grid'").unwrap();
        let band = svg.find("d='M 0,75").unwrap();
        let marker_group = svg.find("data-item='a'").unwrap();
        assert!(band < grid);
        assert!(grid < marker_group);
    }

    #[test]
    fn stacked_line_skips_zero_value_markers() {
        let matrix = DataMatrix::try_new(
            vec![meta("r0"), meta("r1")],
            vec![meta("a")],
            vec![vec![0.0], vec![2.0]],
        )
        .unwrap();
        let chart = StackedLineChart::new(square(), 0.0).unwrap();

        let svg = chart.render(matrix.view(), &RenderOptions::new());
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains("data-value='2'"));
    }

    #[test]
    fn stacked_line_normalized_scales_per_record() {
        let matrix = DataMatrix::try_new(
            vec![meta("r0"), meta("r1")],
            vec![meta("a")],
            vec![vec![1.0], vec![4.0]],
        )
        .unwrap();
        let chart = StackedLineChart::new(square(), 0.0).unwrap().with_normalized(true);

        let svg = chart.render(matrix.view(), &RenderOptions::new());
        // Each record's lone item is its whole total: the band rides the
        // top edge at both records
        assert!(svg.contains("d='M 0,100 L 0,0 100,0 100,100 0,100 '"));
    }

    #[test]
    fn stacked_line_empty_view_degrades_to_grid() {
        let matrix = DataMatrix::try_new(vec![], vec![], vec![]).unwrap();
        let chart = StackedLineChart::new(square(), 0.0).unwrap();
        assert_eq!(
            chart.render(matrix.view(), &RenderOptions::new()),
            "<path class='grid' d=''/>\n"
        );
    }

    #[test]
    fn zero_sized_chart_renders_degenerate_fragment() {
        let chart = PieChart::new(square(), 60.0).unwrap();
        let svg = chart.render(&set("s", &[1.0]), &RenderOptions::new());
        // Radius 0: the slice collapses onto the center point
        assert!(svg.contains("A 0,0"));
    }
}
