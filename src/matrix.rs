//! Two-dimensional data: [`DataMatrix`] and its zero-copy [`MatrixView`]s.
//!
//! A matrix is validated once at construction (shape and values) and
//! read-only afterward. Views adapt it — or a single [`DataSet`] — to the
//! uniform records × items surface the chart renderers iterate, without
//! copying any data until a dataset is explicitly materialized.

use serde::{Deserialize, Deserializer, Serialize};

use crate::data::{DataPoint, DataSet, Metadata};
use crate::errors::ChartError;

/// A rectangular table of values cross-indexed by row and column metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataMatrix {
    rows: Vec<Metadata>,
    columns: Vec<Metadata>,
    values: Vec<Vec<f64>>,
}

impl DataMatrix {
    /// Validate shape and values, failing fast instead of truncating:
    /// the value grid must have one row per row metadata and one entry per
    /// column metadata in every row, and every cell must be a valid chart
    /// value (finite, non-negative).
    pub fn try_new(
        rows: Vec<Metadata>,
        columns: Vec<Metadata>,
        values: Vec<Vec<f64>>,
    ) -> Result<DataMatrix, ChartError> {
        if values.len() != rows.len() {
            return Err(ChartError::LookupMismatch {
                detail: format!("{} rows but {} value rows", rows.len(), values.len()),
            });
        }
        for (index, row) in values.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ChartError::LookupMismatch {
                    detail: format!(
                        "value row {index} has {} entries, expected {}",
                        row.len(),
                        columns.len()
                    ),
                });
            }
            for &value in row {
                if !value.is_finite() || value < 0.0 {
                    return Err(ChartError::InvalidValue { value });
                }
            }
        }
        Ok(DataMatrix { rows, columns, values })
    }

    pub fn rows(&self) -> &[Metadata] {
        &self.rows
    }

    pub fn columns(&self) -> &[Metadata] {
        &self.columns
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.values[row][column]
    }

    /// Row-major view: records are rows, items are columns.
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView::Rows(self)
    }

    /// Column-major view: records are columns, items are rows.
    pub fn transposed_view(&self) -> MatrixView<'_> {
        MatrixView::Columns(self)
    }

    /// Materialize one dataset per row. With `global_max`, the result
    /// carries the largest per-set maximum as a shared display scale, so
    /// several series can render against one Y axis; totals are untouched.
    pub fn data_by_row(&self, global_max: bool) -> ScaledData {
        ScaledData::new(self.view().record_datasets(), global_max)
    }

    /// Transposed counterpart of [`DataMatrix::data_by_row`].
    pub fn data_by_column(&self, global_max: bool) -> ScaledData {
        ScaledData::new(self.transposed_view().record_datasets(), global_max)
    }
}

impl<'de> Deserialize<'de> for DataMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DataMatrix, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            rows: Vec<Metadata>,
            #[serde(default)]
            columns: Vec<Metadata>,
            #[serde(default)]
            values: Vec<Vec<f64>>,
        }
        let raw = Raw::deserialize(deserializer)?;
        DataMatrix::try_new(raw.rows, raw.columns, raw.values).map_err(serde::de::Error::custom)
    }
}

/// Datasets materialized from a matrix, with an optional shared display
/// maximum replacing each set's own when charts need one Y scale across
/// all series.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledData {
    pub sets: Vec<DataSet>,
    pub display_max: Option<f64>,
}

impl ScaledData {
    fn new(sets: Vec<DataSet>, global_max: bool) -> ScaledData {
        let display_max = global_max.then(|| {
            sets.iter()
                .map(DataSet::max_value)
                .fold(0.0_f64, f64::max)
        });
        ScaledData { sets, display_max }
    }

    /// The display maximum for one of the contained sets: the shared
    /// scale when present, the set's own otherwise.
    pub fn max_for(&self, set: &DataSet) -> f64 {
        self.display_max.unwrap_or_else(|| set.max_value())
    }
}

/// A zero-copy records × items adapter over a matrix or a single dataset.
///
/// The four variants are two transposition pairs: `Rows ↔ Columns` over a
/// matrix, `SingleRecord ↔ SingleItem` over a dataset. Which physical axis
/// is "records" is the only thing that changes; every accessor dispatches
/// by plain `match`.
#[derive(Clone, Copy, Debug)]
pub enum MatrixView<'a> {
    /// Records are matrix rows, items are columns.
    Rows(&'a DataMatrix),
    /// Records are matrix columns, items are rows.
    Columns(&'a DataMatrix),
    /// One dataset as the only record; its points are the items.
    SingleRecord(&'a DataSet),
    /// One dataset as the only item; its points are the records.
    SingleItem(&'a DataSet),
}

impl<'a> MatrixView<'a> {
    pub fn record_count(&self) -> usize {
        match self {
            MatrixView::Rows(m) => m.rows.len(),
            MatrixView::Columns(m) => m.columns.len(),
            MatrixView::SingleRecord(_) => 1,
            MatrixView::SingleItem(ds) => ds.len(),
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            MatrixView::Rows(m) => m.columns.len(),
            MatrixView::Columns(m) => m.rows.len(),
            MatrixView::SingleRecord(ds) => ds.len(),
            MatrixView::SingleItem(_) => 1,
        }
    }

    pub fn record_meta(&self, index: usize) -> &'a Metadata {
        match self {
            MatrixView::Rows(m) => &m.rows[index],
            MatrixView::Columns(m) => &m.columns[index],
            MatrixView::SingleRecord(ds) => ds.meta(),
            MatrixView::SingleItem(ds) => ds[index].meta(),
        }
    }

    pub fn item_meta(&self, index: usize) -> &'a Metadata {
        match self {
            MatrixView::Rows(m) => &m.columns[index],
            MatrixView::Columns(m) => &m.rows[index],
            MatrixView::SingleRecord(ds) => ds[index].meta(),
            MatrixView::SingleItem(ds) => ds.meta(),
        }
    }

    /// Raw value at (record, item) in this view's orientation.
    pub fn value_at(&self, record: usize, item: usize) -> f64 {
        match self {
            MatrixView::Rows(m) => m.values[record][item],
            MatrixView::Columns(m) => m.values[item][record],
            MatrixView::SingleRecord(ds) => ds[item].value(),
            MatrixView::SingleItem(ds) => ds[record].value(),
        }
    }

    /// Largest value in the view: a full-grid scan for matrix-backed
    /// views, the set's own maximum for single-set views.
    pub fn max_value(&self) -> f64 {
        match self {
            MatrixView::Rows(m) | MatrixView::Columns(m) => m
                .values
                .iter()
                .flatten()
                .copied()
                .fold(0.0_f64, f64::max),
            MatrixView::SingleRecord(ds) | MatrixView::SingleItem(ds) => ds.max_value(),
        }
    }

    /// Materialize the dataset for one record, tagging each point with the
    /// item metadata. `SingleRecord` hands back a clone of its whole set.
    pub fn record_dataset(&self, index: usize) -> DataSet {
        if let MatrixView::SingleRecord(ds) = self {
            return (*ds).clone();
        }
        let points = (0..self.item_count())
            .map(|item| DataPoint::new(self.value_at(index, item), self.item_meta(item).clone()));
        DataSet::from_points(self.record_meta(index).clone(), points)
    }

    /// Materialize the dataset for one item; the dual of
    /// [`MatrixView::record_dataset`].
    pub fn item_dataset(&self, index: usize) -> DataSet {
        self.transposed().record_dataset(index)
    }

    pub fn record_datasets(&self) -> Vec<DataSet> {
        (0..self.record_count()).map(|i| self.record_dataset(i)).collect()
    }

    pub fn item_datasets(&self) -> Vec<DataSet> {
        (0..self.item_count()).map(|i| self.item_dataset(i)).collect()
    }

    /// The dual view over the same data: `Rows ↔ Columns`,
    /// `SingleRecord ↔ SingleItem`. A pure variant swap; transposing twice
    /// yields an observationally identical view.
    pub fn transposed(&self) -> MatrixView<'a> {
        match self {
            MatrixView::Rows(m) => MatrixView::Columns(m),
            MatrixView::Columns(m) => MatrixView::Rows(m),
            MatrixView::SingleRecord(ds) => MatrixView::SingleItem(ds),
            MatrixView::SingleItem(ds) => MatrixView::SingleRecord(ds),
        }
    }
}
