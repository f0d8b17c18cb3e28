/// Result of a density-based clustering run.
///
/// Holds one label per input point, `Some(cluster_id)` or `None` for noise.
/// Cluster ids are dense (`0..n_clusters`) and follow creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    labels: Vec<Option<usize>>,
    n_clusters: usize,
}

impl Partition {
    pub(crate) fn new(labels: Vec<Option<usize>>, n_clusters: usize) -> Self {
        debug_assert!(labels.iter().flatten().all(|&id| id < n_clusters));
        Self { labels, n_clusters }
    }

    /// Per-point labels, in dataset order.
    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Consume the partition, returning the per-point labels.
    pub fn into_labels(self) -> Vec<Option<usize>> {
        self.labels
    }

    /// Number of clusters found.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Number of points that ended up as noise.
    pub fn n_noise(&self) -> usize {
        self.labels.iter().filter(|l| l.is_none()).count()
    }

    /// Indices of the noise points, in dataset order.
    pub fn noise(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.is_none().then_some(i))
            .collect()
    }

    /// Member indices of each cluster, ordered by cluster id.
    ///
    /// Members appear in dataset order. Every returned cluster is non-empty.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.n_clusters];
        for (i, label) in self.labels.iter().enumerate() {
            if let Some(id) = label {
                out[*id].push(i);
            }
        }
        out
    }

    /// The points of each cluster, copied out of `data`.
    ///
    /// `data` must be the dataset this partition was computed from.
    pub fn cluster_points(&self, data: &[Vec<f32>]) -> Vec<Vec<Vec<f32>>> {
        debug_assert_eq!(data.len(), self.labels.len());
        self.clusters()
            .into_iter()
            .map(|members| members.into_iter().map(|i| data[i].clone()).collect())
            .collect()
    }
}
