//! Cluster a dataset with DBSCAN and print its quality metrics.
//!
//! ```text
//! cargo run --example dbscan_report -- [DATASET] [MIN_PTS] [EPS]
//! ```
//!
//! `DATASET` is a comma-separated text file, one point per line. Without it a
//! small built-in dataset is used. Metrics are computed on min–max normalized
//! coordinates. Set `RUST_LOG=densityscore=debug` to see clusters as they form.

use std::env;
use std::process::ExitCode;

use densityscore::data::{dataset_name, load_dataset, normalize_clusters, FeatureRange};
use densityscore::{ClusterReport, Clustering, Dbscan};
use tracing_subscriber::EnvFilter;

fn builtin() -> Vec<Vec<f32>> {
    vec![
        // Group A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Group B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Outlier
        vec![12.0, -3.0],
    ]
}

fn run() -> densityscore::Result<()> {
    let mut args = env::args().skip(1);
    let path = args.next();
    let (data, name, default_min_pts, default_eps) = match &path {
        Some(path) => (load_dataset(path)?, dataset_name(path), 30, 2.6),
        None => (builtin(), "builtin".to_string(), 2, 1.0),
    };
    let min_pts: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default_min_pts);
    let eps: f32 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default_eps);

    let partition = Dbscan::new(eps, min_pts).fit(&data)?;
    let range = FeatureRange::from_data(&data)?;
    let clusters = normalize_clusters(&partition.cluster_points(&data), &range)?;

    println!("Using DBSCAN (min_pts={min_pts}, eps={eps}) to cluster dataset {name}:");
    if clusters.is_empty() {
        println!("- Number of clusters = 0 (all {} points are noise)", partition.n_noise());
        return Ok(());
    }
    let report = ClusterReport::evaluate(&clusters, partition.n_noise())?;
    println!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
