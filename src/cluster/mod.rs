//! Density-based clustering and cluster quality metrics.
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers non-convex clusters and identifies
//! outliers (noise points). DBSCAN does not need the number of clusters in
//! advance: it is an output, not an input.
//!
//! Two parameters drive it:
//!
//! - `epsilon`: neighborhood radius (closed ball, Euclidean)
//! - `min_pts`: how many points, the center included, make a neighborhood dense
//!
//! Neighbor search is brute force, which suits datasets of hundreds to a few
//! thousand points.
//!
//! ## Quality metrics
//!
//! Once points are grouped, three scores describe the grouping:
//!
//! ```text
//! intra = mean over clusters of  Σ_{i≠j} ||x_i - x_j||² / |C|²     (lower is better)
//! inter = Σ_{A≠B} mean_{x∈A, y∈B} ||x - y||² / k²                 (higher is better)
//! SSE   = Σ_C Σ_{x∈C} ||x - μ_C||²                                 (lower is better)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use densityscore::cluster::{sse, Clustering, Dbscan};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! let partition = Dbscan::new(0.5, 2).fit(&data).unwrap();
//! assert_eq!(partition.n_clusters(), 2);
//! assert_eq!(partition.noise(), vec![4]);
//!
//! let clusters = partition.cluster_points(&data);
//! assert!(sse(&clusters).unwrap() > 0.0);
//! ```

mod dbscan;
mod metrics;
mod partition;
mod traits;
pub(crate) mod util;

pub use dbscan::{cluster, Dbscan};
pub use metrics::{inter_cluster_distance, intra_cluster_distance, sse};
pub use partition::Partition;
pub use traits::Clustering;
pub use util::squared_euclidean;
