//! Labeled numeric data: [`Metadata`], [`DataPoint`], [`DataSet`].
//!
//! Values are validated once, at construction: a [`DataPoint`] only ever
//! holds a finite, non-negative value, so renderers never re-check.
//! Aggregate context (a series total or maximum) is passed to
//! [`DataPoint::percent`] / [`DataPoint::normalized`] explicitly; points do
//! not point back at the set that owns them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ChartError;
use crate::svg::escape;

/// Label, id and link information attached to points, sets and matrix axes.
///
/// `id` ends up verbatim in CSS classes, element ids and `data-item`
/// attributes, so it must already be a valid XML name fragment; the caller
/// sanitizes it. `link` and labels are escaped on output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl Metadata {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Metadata {
        Metadata {
            label: label.into(),
            id: id.into(),
            link: None,
            extra: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Metadata {
        self.link = Some(link.into());
        self
    }

    pub fn with_extra(mut self, extra: serde_json::Value) -> Metadata {
        self.extra = Some(extra);
        self
    }

    /// Wrap an SVG fragment in `<a xlink:href='…'>` when a link is set,
    /// escaping the URL; return the fragment unchanged otherwise.
    pub fn wrap_link(&self, fragment: &str) -> String {
        self.wrap_link_ns(fragment, "xlink")
    }

    /// [`Metadata::wrap_link`] with an explicit namespace prefix; a colon
    /// is appended when missing, an empty prefix produces a plain `href`.
    pub fn wrap_link_ns(&self, fragment: &str, ns: &str) -> String {
        let link = match &self.link {
            Some(link) if !link.is_empty() => link,
            _ => return fragment.to_string(),
        };
        let mut prefix = ns.to_string();
        if !prefix.is_empty() && !prefix.ends_with(':') {
            prefix.push(':');
        }
        format!("<a {}href='{}'>{}</a>", prefix, escape(link), fragment)
    }
}

/// A single labeled observation.
///
/// Read-only after construction; [`DataPoint::try_new`] is the validation
/// boundary for chart values.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    meta: Metadata,
    value: f64,
}

impl DataPoint {
    /// Validate and build a point. Negative, NaN and infinite values make
    /// chart geometry undefined and are rejected here, never deeper.
    pub fn try_new(value: f64, meta: Metadata) -> Result<DataPoint, ChartError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidValue { value });
        }
        Ok(DataPoint { meta, value })
    }

    /// Build a point from a value that has already been validated
    /// (matrix grids check every cell at construction).
    pub(crate) fn new(value: f64, meta: Metadata) -> DataPoint {
        DataPoint { meta, value }
    }

    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Fraction of a series total, used for pie slices and stacked
    /// scaling. 0 when the total is 0, so no NaN ever reaches SVG output.
    pub fn percent(&self, total: f64) -> f64 {
        if total == 0.0 { 0.0 } else { self.value / total }
    }

    /// Fraction of a series maximum, used for line-chart Y scaling.
    /// 1 when the maximum is 0.
    pub fn normalized(&self, max: f64) -> f64 {
        if max == 0.0 { 1.0 } else { self.value / max }
    }
}

impl Serialize for DataPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Raw<'a> {
            #[serde(flatten)]
            meta: &'a Metadata,
            value: f64,
        }
        Raw { meta: &self.meta, value: self.value }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DataPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DataPoint, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(flatten)]
            meta: Metadata,
            value: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        DataPoint::try_new(raw.value, raw.meta).map_err(serde::de::Error::custom)
    }
}

/// An ordered series of points with incrementally maintained aggregates.
///
/// `total` and `max` are updated on every [`DataSet::push`] and exposed
/// read-only; a shared cross-series scale is a renderer parameter
/// ([`crate::matrix::ScaledData`]), never a field written after the fact.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DataSet {
    meta: Metadata,
    points: Vec<DataPoint>,
    total: f64,
    max: f64,
}

impl DataSet {
    pub fn new(meta: Metadata) -> DataSet {
        DataSet {
            meta,
            points: Vec::new(),
            total: 0.0,
            max: 0.0,
        }
    }

    pub fn from_points(meta: Metadata, points: impl IntoIterator<Item = DataPoint>) -> DataSet {
        let mut set = DataSet::new(meta);
        for point in points {
            set.push(point);
        }
        set
    }

    /// Append a point, updating `total` and `max` in O(1).
    pub fn push(&mut self, point: DataPoint) {
        self.total += point.value;
        self.max = self.max.max(point.value);
        self.points.push(point);
    }

    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    /// Sum of all point values (0 for an empty set).
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Largest point value (0 for an empty set).
    pub fn max_value(&self) -> f64 {
        self.max
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for DataSet {
    type Output = DataPoint;

    fn index(&self, index: usize) -> &DataPoint {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Serialize for DataSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Raw<'a> {
            #[serde(flatten)]
            meta: &'a Metadata,
            points: &'a [DataPoint],
        }
        Raw { meta: &self.meta, points: &self.points }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DataSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DataSet, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(flatten)]
            meta: Metadata,
            #[serde(default)]
            points: Vec<DataPoint>,
        }
        // Aggregates are recomputed through from_points, never trusted
        // from the input.
        let raw = Raw::deserialize(deserializer)?;
        Ok(DataSet::from_points(raw.meta, raw.points))
    }
}
