//! Density-based clustering with quality scoring.
//!
//! `densityscore` clusters dense vectors with DBSCAN and scores the result.
//!
//! The primary public API is under [`cluster`], which provides:
//! - DBSCAN (density clustering with noise detection), as [`Dbscan`] or the [`cluster()`] shortcut
//! - intra-cluster distance, inter-cluster distance and SSE
//!
//! [`data`] reads comma-separated datasets and min–max normalizes them, and
//! [`ClusterReport`] bundles the metrics of one run.
//!
//! The crate logs through [`tracing`] and never installs a subscriber.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod data;
pub mod error;
mod report;

pub use cluster::{
    cluster, inter_cluster_distance, intra_cluster_distance, squared_euclidean, sse, Clustering,
    Dbscan, Partition,
};
pub use error::{Error, ErrorKind, Result};
pub use report::ClusterReport;
