// Public API exports
pub mod clusterer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod writer;

// Re-export main types for convenience
pub use error::AnchorError;

pub use config::{ModelInputSize, check_cluster_count};

pub use clusterer::{BoxSize, ClusterResult, KMeansConfig, avg_iou, iou, iou_matrix, kmeans};

pub use extractor::{BoxExtractor, ImageFileSizes, ImageSizeProvider, KnownSizes, extract_boxes};

pub use report::AnchorReport;

pub use writer::{format_anchors, parse_anchors, read_anchors, write_anchors};
