//! Parsed datasets
//!
//! [`LabeledTable`] is the intermediate result of reading a `.data` file:
//! feature columns plus a trailing `label` column, keyed by 1-based row ids.
//! [`Dataset`] drops the row bookkeeping and keeps the schema, the feature
//! matrix `x` and the label vector `y`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use std::path::Path;

use crate::config::ParseOptions;
use crate::error::C45Result;
use crate::feature::FeatureValue;
use crate::locate::{DirectoryLocator, FileLocator};
use crate::parser;
use crate::schema::Schema;

/// Feature columns plus a trailing class label column
#[derive(Debug, Clone)]
pub struct LabeledTable {
    /// 1-based row ids, in file order
    index: Vec<usize>,
    /// Feature names followed by [`LabeledTable::LABEL_COLUMN`]
    columns: Vec<String>,
    values: Array2<f64>,
    labels: Array1<i64>,
}

impl LabeledTable {
    /// Name of the trailing class label column
    pub const LABEL_COLUMN: &'static str = "label";

    pub(crate) fn new(schema: &Schema, values: Array2<f64>, labels: Array1<i64>) -> Self {
        let mut columns: Vec<String> = schema.names().into_iter().map(String::from).collect();
        columns.push(Self::LABEL_COLUMN.to_string());

        Self {
            index: (1..=labels.len()).collect(),
            columns,
            values,
            labels,
        }
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature values (rows × features)
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn labels(&self) -> ArrayView1<'_, i64> {
        self.labels.view()
    }

    /// A column by name; the label column is returned as floats
    pub fn column(&self, name: &str) -> Option<Array1<f64>> {
        if name == Self::LABEL_COLUMN {
            return Some(self.labels.mapv(|l| l as f64));
        }
        let j = self.columns[..self.columns.len() - 1]
            .iter()
            .position(|c| c == name)?;
        Some(self.values.column(j).to_owned())
    }

    /// Feature values of the row with the given 1-based id
    pub fn row(&self, id: usize) -> Option<ArrayView1<'_, f64>> {
        let i = self.index.iter().position(|&r| r == id)?;
        Some(self.values.row(i))
    }

    /// Split off the label column, discarding row ids
    pub fn pop_label(self) -> (Array2<f64>, Array1<i64>) {
        (self.values, self.labels)
    }
}

/// A parsed C4.5 dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    pub schema: Schema,
    /// Feature matrix: rows are examples, columns follow the schema
    pub x: Array2<f64>,
    /// Binary class labels, row-aligned with `x`
    pub y: Array1<i64>,
}

impl Dataset {
    pub fn into_parts(self) -> (Schema, Array2<f64>, Array1<i64>) {
        (self.schema, self.x, self.y)
    }

    pub fn n_examples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Number of missing (NaN) cells
    pub fn missing_count(&self) -> usize {
        self.x.iter().filter(|v| v.is_nan()).count()
    }

    /// Missing cells per feature, in schema order
    pub fn missing_per_feature(&self) -> Vec<usize> {
        self.x
            .axis_iter(Axis(1))
            .map(|col| col.iter().filter(|v| v.is_nan()).count())
            .collect()
    }

    /// Number of examples labelled `1`
    pub fn positive_count(&self) -> usize {
        self.y.iter().filter(|&&l| l == 1).count()
    }

    /// Native value of a cell, `None` when missing or out of bounds
    pub fn value(&self, row: usize, col: usize) -> Option<FeatureValue> {
        let cell = *self.x.get((row, col))?;
        if cell.is_nan() {
            return None;
        }
        self.schema.get(col)?.from_float(cell).ok()
    }
}

/// Parse `<name>.names` and `<name>.data` found under `directory`
pub fn parse_c45(name: &str, directory: impl AsRef<Path>) -> C45Result<Dataset> {
    parse_c45_with(
        name,
        &DirectoryLocator::new(directory.as_ref()),
        &ParseOptions::default(),
    )
}

/// Parse a C4.5 dataset using a custom locator and options
///
/// Nothing is returned unless both files locate and parse cleanly.
pub fn parse_c45_with<L>(name: &str, locator: &L, options: &ParseOptions) -> C45Result<Dataset>
where
    L: FileLocator + ?Sized,
{
    options.validate()?;

    let names_path = locator.locate(&format!("{}.names", name))?;
    let data_path = locator.locate(&format!("{}.data", name))?;

    let schema = parser::parse_schema_with(&names_path, options)?;
    let table = parser::parse_and_preprocess_with(&schema, &data_path, options)?;
    let (x, y) = table.pop_label();

    let dataset = Dataset { schema, x, y };
    tracing::info!(
        "Loaded {}: {} examples, {} features, {} missing values",
        name,
        dataset.n_examples(),
        dataset.n_features(),
        dataset.missing_count()
    );
    Ok(dataset)
}
