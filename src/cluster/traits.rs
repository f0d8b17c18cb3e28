use super::partition::Partition;
use crate::error::Result;

/// Common interface for hard clustering algorithms that may leave points unassigned.
pub trait Clustering {
    /// Cluster `data`, returning the full partition.
    fn fit(&self, data: &[Vec<f32>]) -> Result<Partition>;

    /// Cluster `data` and return one label per point, `None` for noise.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(data)?.into_labels())
    }
}
