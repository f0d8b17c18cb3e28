//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points based on neighborhood density. It:
//!
//! - Discovers clusters of arbitrary shape
//! - Determines the number of clusters itself
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//!   The neighborhood is a closed ball: a point exactly ε away is a neighbor.
//! - **MinPts**: Minimum neighborhood size for a point to be "core". The
//!   neighborhood includes the point itself.
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P, in dataset order:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, mark as noise (may become a border point later)
//!    - Else P is core: start a new cluster, expand from its neighbors
//!
//! 2. Expansion drains a FIFO work-list. Each popped point joins the cluster
//!    if it has none yet; if it is core, its own neighbors are queued.
//!
//! Distances are compared squared against ε², so no square root is taken.
//!
//! ## Complexity
//!
//! - **Time**: O(n²·d), one brute-force region query per point.
//! - **Space**: O(n) for point states and the work-list.
//!
//! ## Determinism
//!
//! Iteration order and neighbor order both follow dataset order, so cluster ids
//! and membership are a pure function of the input. A border point within ε of
//! two clusters goes to whichever cluster's expansion reaches it first.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::partition::Partition;
use super::traits::Clustering;
use super::util::{self, squared_euclidean_unchecked};
use crate::error::{Error, Result};

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f32,
    /// Minimum neighborhood size (self included) for core point classification.
    min_pts: usize,
}

/// Per-point state while a fit is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointState {
    Unvisited,
    /// Visited, but not density-reachable from any core point so far.
    Noise,
    Cluster(usize),
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of points (self included) to form a dense region.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often determined by k-distance plot (k = min_pts - 1).
    /// - `min_pts`: 2 * dimension is a common heuristic.
    pub fn new(epsilon: f32, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Minimum neighborhood size for a core point.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    fn validate(&self, data: &[Vec<f32>]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }

        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        util::common_dim(data)?;
        Ok(())
    }

    /// Find all points within epsilon of `data[point_idx]`, the point itself included.
    ///
    /// Indices come back in dataset order.
    fn region_query(&self, data: &[Vec<f32>], point_idx: usize) -> Vec<usize> {
        let point = &data[point_idx];
        let eps_sq = self.epsilon * self.epsilon;
        data.iter()
            .enumerate()
            .filter(|(_, other)| squared_euclidean_unchecked(point, other) <= eps_sq)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Grow cluster `cluster_id` outward from the core point `point_idx`.
    ///
    /// Returns the number of points assigned to the cluster.
    fn expand_cluster(
        &self,
        data: &[Vec<f32>],
        point_idx: usize,
        neighbors: Vec<usize>,
        states: &mut [PointState],
        queued: &mut [bool],
        cluster_id: usize,
    ) -> usize {
        states[point_idx] = PointState::Cluster(cluster_id);
        let mut size = 1;

        let mut to_process: VecDeque<usize> = VecDeque::with_capacity(neighbors.len());
        for idx in neighbors {
            if idx != point_idx && !queued[idx] {
                queued[idx] = true;
                to_process.push_back(idx);
            }
        }

        while let Some(idx) = to_process.pop_front() {
            match states[idx] {
                PointState::Cluster(_) => continue,
                PointState::Noise => {
                    // Already known not to be core: it can only be a border point.
                    trace!(point = idx, cluster = cluster_id, "noise point promoted to border");
                }
                PointState::Unvisited => {
                    let idx_neighbors = self.region_query(data, idx);
                    if idx_neighbors.len() >= self.min_pts {
                        for nn in idx_neighbors {
                            if !queued[nn] && !matches!(states[nn], PointState::Cluster(_)) {
                                queued[nn] = true;
                                to_process.push_back(nn);
                            }
                        }
                    }
                }
            }
            states[idx] = PointState::Cluster(cluster_id);
            size += 1;
        }

        size
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl Clustering for Dbscan {
    fn fit(&self, data: &[Vec<f32>]) -> Result<Partition> {
        self.validate(data)?;

        let n = data.len();
        let mut states = vec![PointState::Unvisited; n];
        // A point is queued at most once per run: once queued it always ends
        // up in the cluster being expanded.
        let mut queued = vec![false; n];
        let mut n_clusters = 0;

        for point_idx in 0..n {
            if states[point_idx] != PointState::Unvisited {
                continue;
            }

            let neighbors = self.region_query(data, point_idx);
            if neighbors.len() < self.min_pts {
                states[point_idx] = PointState::Noise;
                continue;
            }

            let size = self.expand_cluster(
                data,
                point_idx,
                neighbors,
                &mut states,
                &mut queued,
                n_clusters,
            );
            debug!(cluster = n_clusters, seed = point_idx, size, "cluster formed");
            n_clusters += 1;
        }

        let labels: Vec<Option<usize>> = states
            .into_iter()
            .map(|s| match s {
                PointState::Cluster(id) => Some(id),
                PointState::Noise | PointState::Unvisited => None,
            })
            .collect();

        let partition = Partition::new(labels, n_clusters);
        debug!(
            n_points = n,
            n_clusters,
            n_noise = partition.n_noise(),
            epsilon = self.epsilon,
            min_pts = self.min_pts,
            "dbscan finished"
        );
        Ok(partition)
    }
}

/// Cluster `data` and return the clusters as lists of points.
///
/// Clusters come back in creation order and noise points are dropped.
///
/// ```rust
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 0.0],
///     vec![10.0, 10.0],
///     vec![10.0, 11.0],
/// ];
/// let clusters = densityscore::cluster(&data, 2, 1.5).unwrap();
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters[1], vec![vec![10.0, 10.0], vec![10.0, 11.0]]);
/// ```
pub fn cluster(data: &[Vec<f32>], min_pts: usize, eps: f32) -> Result<Vec<Vec<Vec<f32>>>> {
    let partition = Dbscan::new(eps, min_pts).fit(data)?;
    Ok(partition.cluster_points(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn five_points() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![10.0, 10.0],
            vec![10.0, 11.0],
        ]
    }

    #[test]
    fn test_dbscan_two_clusters() {
        // Two well-separated clusters
        let data = vec![
            // Cluster 1: around (0, 0)
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            vec![0.05, 0.05],
            // Cluster 2: around (5, 5)
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
            vec![5.1, 5.1],
            vec![5.05, 5.05],
        ];

        let labels = Dbscan::new(0.3, 3).fit_predict(&data).unwrap();
        assert_eq!(labels.len(), 10);
        assert!(labels[..5].iter().all(|l| *l == Some(0)));
        assert!(labels[5..].iter().all(|l| *l == Some(1)));
    }

    #[test]
    fn test_dbscan_with_noise() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            // Outlier
            vec![100.0, 100.0],
            vec![5.0, 5.0],
            vec![5.1, 5.0],
            vec![5.0, 5.1],
            vec![5.1, 5.1],
        ];

        let partition = Dbscan::new(0.3, 3).fit(&data).unwrap();
        assert_eq!(partition.n_clusters(), 2);
        assert_eq!(partition.noise(), vec![4]);
        for (i, label) in partition.labels().iter().enumerate() {
            assert_eq!(label.is_none(), i == 4);
        }
    }

    #[test]
    fn test_dbscan_all_noise() {
        let data = vec![
            vec![0.0, 0.0],
            vec![10.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
        ];

        let labels = Dbscan::new(0.5, 3).fit_predict(&data).unwrap();
        assert!(labels.iter().all(Option::is_none));
    }

    #[test]
    fn test_dbscan_all_one_cluster() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
        ];

        let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
        assert!(labels.iter().all(|l| *l == Some(0)));
    }

    #[test]
    fn test_dbscan_chain() {
        // Chain of points: every link is within epsilon.
        let data: Vec<Vec<f32>> = (0..10).map(|i| vec![i as f32 * 0.3, 0.0]).collect();

        let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
        assert!(labels.iter().all(|l| *l == Some(0)));
    }

    #[test]
    fn test_dbscan_empty() {
        let data: Vec<Vec<f32>> = vec![];
        let err = Dbscan::new(0.5, 3).fit(&data).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_dbscan_invalid_params() {
        let data = vec![vec![0.0, 0.0]];

        for eps in [-1.0, -f32::MIN_POSITIVE, f32::NAN] {
            let err = Dbscan::new(eps, 3).fit(&data).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "epsilon", .. }));
        }

        let err = Dbscan::new(0.5, 0).fit(&data).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "min_pts", .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_dbscan_dimension_mismatch() {
        let data = vec![vec![0.0, 0.0], vec![0.0, 0.0, 0.0]];
        let err = Dbscan::new(1.0, 1).fit(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn closed_ball_includes_points_at_exactly_epsilon() {
        let data = five_points();
        let clusters = cluster(&data, 2, 1.5).unwrap();
        assert_eq!(
            clusters,
            vec![
                vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]],
                vec![vec![10.0, 10.0], vec![10.0, 11.0]],
            ]
        );

        // Unit spacing with eps = 1 still links neighbors.
        let labels = Dbscan::new(1.0, 2).fit_predict(&data).unwrap();
        assert_eq!(
            labels,
            vec![Some(0), Some(0), Some(0), Some(1), Some(1)]
        );
    }

    #[test]
    fn small_radius_leaves_everything_as_noise() {
        let data = five_points();
        let partition = Dbscan::new(0.5, 2).fit(&data).unwrap();
        assert_eq!(partition.n_clusters(), 0);
        assert_eq!(partition.n_noise(), 5);
        assert!(cluster(&data, 2, 0.5).unwrap().is_empty());
    }

    #[test]
    fn zero_epsilon_groups_coincident_points() {
        let data = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![1.0, 1.0]];
        let labels = Dbscan::new(0.0, 2).fit_predict(&data).unwrap();
        assert_eq!(labels, vec![Some(0), None, Some(0)]);
    }

    #[test]
    fn noise_point_is_promoted_to_border() {
        // Point 0 is visited first and has too few neighbors, but lies
        // within epsilon of the core point 1.
        let data = vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0]];
        let labels = Dbscan::new(1.0, 3).fit_predict(&data).unwrap();
        assert_eq!(labels, vec![Some(0), Some(0), Some(0), None]);
    }

    #[test]
    fn shared_border_goes_to_first_expansion() {
        let left = vec![vec![-1.0], vec![-1.5], vec![-1.6]];
        let right = vec![vec![1.0], vec![1.5], vec![1.6]];
        let border = vec![0.0];

        let mut data = left.clone();
        data.push(border.clone());
        data.extend(right.iter().cloned());
        let labels = Dbscan::new(1.0, 4).fit_predict(&data).unwrap();
        assert_eq!(labels[3], Some(0));
        assert!(labels[4..].iter().all(|l| *l == Some(1)));

        let mut data = right;
        data.push(border);
        data.extend(left);
        let labels = Dbscan::new(1.0, 4).fit_predict(&data).unwrap();
        assert_eq!(labels[3], Some(0));
        assert!(labels[..3].iter().all(|l| *l == Some(0)));
        assert!(labels[4..].iter().all(|l| *l == Some(1)));
    }

    #[test]
    fn min_pts_one_makes_every_point_core() {
        let data = vec![vec![0.0], vec![0.4], vec![5.0], vec![0.8], vec![9.0]];
        let labels = Dbscan::new(0.5, 1).fit_predict(&data).unwrap();
        assert_eq!(labels, vec![Some(0), Some(0), Some(1), Some(0), Some(2)]);
    }

    #[test]
    fn refitting_is_deterministic() {
        let data: Vec<Vec<f32>> = (0..40)
            .map(|i| vec![(i % 7) as f32 * 0.4, (i / 7) as f32 * 0.9])
            .collect();
        let model = Dbscan::new(0.5, 3);
        let first = model.fit(&data).unwrap();
        for _ in 0..3 {
            assert_eq!(model.fit(&data).unwrap(), first);
        }
    }

    #[test]
    fn builder_setters_override_defaults() {
        let model = Dbscan::default().with_epsilon(2.6).with_min_pts(30);
        assert_eq!(model.epsilon(), 2.6);
        assert_eq!(model.min_pts(), 30);
    }
}
