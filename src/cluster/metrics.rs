//! Distance-based cluster quality metrics.
//!
//! All three metrics work on clusters given as lists of points, so they apply
//! equally to raw or normalized coordinates. Noise points are not part of any
//! cluster and never enter a metric.
//!
//! | metric | better | what it measures |
//! |---|---|---|
//! | [`intra_cluster_distance`] | lower | mean squared distance within clusters |
//! | [`inter_cluster_distance`] | higher | mean squared distance between clusters |
//! | [`sse`] | lower | squared distance of every point to its centroid |
//!
//! Sums are accumulated in `f64` and returned as `f32`.

use super::util::{self, squared_euclidean_unchecked};
use crate::error::{Error, Result};

/// Reject empty cluster lists, empty clusters and mixed dimensionality.
fn validate(clusters: &[Vec<Vec<f32>>]) -> Result<()> {
    if clusters.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(index) = clusters.iter().position(Vec::is_empty) {
        return Err(Error::EmptyCluster { index });
    }
    util::common_dim(clusters.iter().flatten())?;
    Ok(())
}

/// Average intra-cluster distance.
///
/// For each cluster `C`, the squared distances over all ordered pairs of
/// distinct members are summed and divided by `|C|²`; the result is the mean
/// of these values over clusters. A single-point cluster contributes 0.
///
/// ```text
/// intra = (1/k) Σ_C (1/|C|²) Σ_{i≠j ∈ C} ||x_i - x_j||²
/// ```
pub fn intra_cluster_distance(clusters: &[Vec<Vec<f32>>]) -> Result<f32> {
    validate(clusters)?;

    let total: f64 = clusters
        .iter()
        .map(|cluster| {
            let mut sum = 0.0f64;
            for (i, x) in cluster.iter().enumerate() {
                for (j, y) in cluster.iter().enumerate() {
                    if i != j {
                        sum += f64::from(squared_euclidean_unchecked(x, y));
                    }
                }
            }
            let size = cluster.len() as f64;
            sum / (size * size)
        })
        .sum();

    Ok((total / clusters.len() as f64) as f32)
}

/// Average inter-cluster distance.
///
/// For every ordered pair of distinct clusters, the mean squared distance
/// between their members is computed; these values are summed and divided
/// by `k²`, where `k` is the number of clusters. The divisor counts the
/// `k` diagonal pairs even though they are skipped, so the value is
/// `(k - 1) / k` times the plain mean over distinct pairs.
///
/// Needs at least two clusters.
pub fn inter_cluster_distance(clusters: &[Vec<Vec<f32>>]) -> Result<f32> {
    validate(clusters)?;
    let k = clusters.len();
    if k < 2 {
        return Err(Error::TooFewClusters {
            required: 2,
            found: k,
        });
    }

    let mut total = 0.0f64;
    for (a, c1) in clusters.iter().enumerate() {
        for (b, c2) in clusters.iter().enumerate() {
            if a == b {
                continue;
            }
            let sum: f64 = c1
                .iter()
                .flat_map(|x| c2.iter().map(move |y| f64::from(squared_euclidean_unchecked(x, y))))
                .sum();
            total += sum / (c1.len() * c2.len()) as f64;
        }
    }

    Ok((total / (k * k) as f64) as f32)
}

/// Per-feature mean of a non-empty cluster.
fn centroid(cluster: &[Vec<f32>]) -> Vec<f32> {
    let dim = cluster[0].len();
    let mut sums = vec![0.0f64; dim];
    for point in cluster {
        for (s, &x) in sums.iter_mut().zip(point) {
            *s += f64::from(x);
        }
    }
    let n = cluster.len() as f64;
    sums.into_iter().map(|s| (s / n) as f32).collect()
}

/// Sum of squared errors.
///
/// For each cluster, the squared distance of every member to the cluster
/// centroid, summed over all clusters:
///
/// ```text
/// SSE = Σ_C Σ_{x ∈ C} ||x - μ_C||²
/// ```
pub fn sse(clusters: &[Vec<Vec<f32>>]) -> Result<f32> {
    validate(clusters)?;

    let total: f64 = clusters
        .iter()
        .map(|cluster| {
            let mean = centroid(cluster);
            cluster
                .iter()
                .map(|x| f64::from(squared_euclidean_unchecked(x, &mean)))
                .sum::<f64>()
        })
        .sum();

    Ok(total as f32)
}
