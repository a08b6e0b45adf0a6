use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of a box, position discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: u32,
    pub height: u32,
}

impl BoxSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    /// True when either side is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for BoxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for BoxSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct ClusterResult {
    /// Final cluster centers, in cluster index order.
    pub centers: Vec<BoxSize>,
    /// Cluster index of every input box at the last iteration.
    pub assignments: Vec<usize>,
    pub iterations: usize,
    /// False when the iteration cap stopped the loop.
    pub converged: bool,
}

impl ClusterResult {
    /// Centers ordered by width, the order anchor files are written in.
    ///
    /// The sort is stable, so centers with equal widths keep their cluster order.
    pub fn sorted_centers(&self) -> Vec<BoxSize> {
        let mut centers = self.centers.clone();
        centers.sort_by_key(|c| c.width);
        centers
    }

    /// Number of boxes assigned to each cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.centers.len()];
        for &a in &self.assignments {
            sizes[a] += 1;
        }
        sizes
    }
}
