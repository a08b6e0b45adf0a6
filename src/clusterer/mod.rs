mod config;
mod iou;
mod kmeans;
mod median;
mod types;


pub use config::{DEFAULT_MAX_ITERATIONS, KMeansConfig};
pub use iou::{IouMatrix, avg_iou, iou, iou_distance, iou_matrix};
pub use kmeans::kmeans;
pub use median::median_box;
pub use types::{BoxSize, ClusterResult};
