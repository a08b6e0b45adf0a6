use crate::clusterer::{BoxSize, ClusterResult};
use serde::Serialize;

/// Summary of a clustering run, printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct AnchorReport {
    pub anchors: Vec<BoxSize>,
    /// Mean best IoU of every box against the anchors, in `[0, 1]`.
    pub accuracy: f64,
    pub iterations: usize,
    pub converged: bool,
    pub box_count: usize,
}

impl AnchorReport {
    pub fn new(result: &ClusterResult, accuracy: f64) -> Self {
        Self {
            anchors: result.sorted_centers(),
            accuracy,
            iterations: result.iterations,
            converged: result.converged,
            box_count: result.assignments.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let result = ClusterResult {
            centers: vec![BoxSize::new(30, 20), BoxSize::new(10, 13)],
            assignments: vec![0, 1, 1],
            iterations: 4,
            converged: true,
        };
        let report = AnchorReport::new(&result, 0.5);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["anchors"][0]["width"], 10);
        assert_eq!(json["anchors"][1]["height"], 20);
        assert_eq!(json["accuracy"], 0.5);
        assert_eq!(json["box_count"], 3);
        assert_eq!(json["converged"], true);
    }
}
