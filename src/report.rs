//! Summary of a clustering run.

use std::fmt;

use crate::cluster::{inter_cluster_distance, intra_cluster_distance, sse};
use crate::error::Result;

/// Cluster count, noise count and the three quality metrics for one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterReport {
    /// Number of clusters scored.
    pub n_clusters: usize,
    /// Number of points left out as noise.
    pub n_noise: usize,
    /// See [`intra_cluster_distance`].
    pub intra: f32,
    /// See [`inter_cluster_distance`]; `None` when there is a single cluster.
    pub inter: Option<f32>,
    /// See [`sse`].
    pub sse: f32,
}

impl ClusterReport {
    /// Score `clusters`.
    ///
    /// Fails like the individual metrics, except that a lone cluster yields
    /// `inter: None` instead of an error.
    pub fn evaluate(clusters: &[Vec<Vec<f32>>], n_noise: usize) -> Result<Self> {
        let intra = intra_cluster_distance(clusters)?;
        let sse = sse(clusters)?;
        let inter = if clusters.len() >= 2 {
            Some(inter_cluster_distance(clusters)?)
        } else {
            None
        };
        Ok(Self {
            n_clusters: clusters.len(),
            n_noise,
            intra,
            inter,
            sse,
        })
    }
}

impl fmt::Display for ClusterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Number of clusters = {}", self.n_clusters)?;
        writeln!(f, "- Noise points = {}", self.n_noise)?;
        writeln!(f, "- Intra-distance = {}", self.intra)?;
        match self.inter {
            Some(inter) => writeln!(f, "- Inter-distance = {inter}")?,
            None => writeln!(f, "- Inter-distance = n/a (single cluster)")?,
        }
        write!(f, "- SSE = {}", self.sse)
    }
}
