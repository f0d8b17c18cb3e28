//! Loading and rescaling datasets.
//!
//! The clustering engine takes already-parsed vectors. This module covers the
//! two steps that usually come before it: reading comma-separated text into
//! points, and min–max scaling each feature to `[0, 1]` so that metrics
//! computed on different datasets are comparable.
//!
//! ```rust
//! use densityscore::data::{parse_dataset, FeatureRange};
//!
//! let data = parse_dataset("1,10\n3,10\n2,10\n").unwrap();
//! let range = FeatureRange::from_data(&data).unwrap();
//! assert_eq!(range.normalize_point(&data[2]).unwrap(), vec![0.5, 0.5]);
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cluster::util;
use crate::error::{Error, Result};

/// Parse a dataset: one point per line, features separated by commas.
///
/// Whitespace around lines and fields is ignored. Reading stops at the first
/// blank line, so trailing notes after the data are allowed. Every row must
/// have the same number of features.
pub fn parse_dataset(text: &str) -> Result<Vec<Vec<f32>>> {
    let mut data = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let point = line
            .split(',')
            .map(|field| {
                let field = field.trim();
                field.parse::<f32>().map_err(|e| Error::Parse {
                    line: line_no + 1,
                    message: format!("invalid number {field:?}: {e}"),
                })
            })
            .collect::<Result<Vec<f32>>>()?;
        data.push(point);
    }
    util::common_dim(&data)?;
    Ok(data)
}

/// Read and parse a dataset file. See [`parse_dataset`] for the format.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Vec<f32>>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let data = parse_dataset(&text)?;
    debug!(
        path = %path.display(),
        n_points = data.len(),
        dim = data.first().map_or(0, Vec::len),
        "dataset loaded"
    );
    Ok(data)
}

/// Human-readable dataset name: the file name without directory or extension.
pub fn dataset_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Per-feature minimum and maximum over a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRange {
    min: Vec<f32>,
    max: Vec<f32>,
}

impl FeatureRange {
    /// Compute the range of every feature in `data`.
    pub fn from_data(data: &[Vec<f32>]) -> Result<Self> {
        let dim = util::common_dim(data)?.ok_or(Error::EmptyInput)?;
        let mut min = vec![f32::INFINITY; dim];
        let mut max = vec![f32::NEG_INFINITY; dim];
        for point in data {
            for (i, &x) in point.iter().enumerate() {
                min[i] = min[i].min(x);
                max[i] = max[i].max(x);
            }
        }
        Ok(Self { min, max })
    }

    /// Per-feature minimums.
    pub fn min(&self) -> &[f32] {
        &self.min
    }

    /// Per-feature maximums.
    pub fn max(&self) -> &[f32] {
        &self.max
    }

    /// Number of features covered.
    pub fn dim(&self) -> usize {
        self.min.len()
    }

    /// Rescale one point to `[0, 1]` per feature.
    ///
    /// A feature that is constant over the dataset maps to `0.5`.
    pub fn normalize_point(&self, point: &[f32]) -> Result<Vec<f32>> {
        if point.len() != self.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                found: point.len(),
            });
        }
        Ok(point
            .iter()
            .zip(self.min.iter().zip(&self.max))
            .map(|(&x, (&lo, &hi))| if lo == hi { 0.5 } else { (x - lo) / (hi - lo) })
            .collect())
    }
}

/// Rescale every point of `data` with `range`.
pub fn normalize(data: &[Vec<f32>], range: &FeatureRange) -> Result<Vec<Vec<f32>>> {
    data.iter().map(|p| range.normalize_point(p)).collect()
}

/// Rescale every point of every cluster with `range`.
///
/// Use a range computed over the whole dataset, not per cluster, so that all
/// clusters share one coordinate system.
pub fn normalize_clusters(
    clusters: &[Vec<Vec<f32>>],
    range: &FeatureRange,
) -> Result<Vec<Vec<Vec<f32>>>> {
    clusters.iter().map(|c| normalize(c, range)).collect()
}
