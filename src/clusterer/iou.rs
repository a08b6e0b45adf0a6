use crate::clusterer::types::BoxSize;

/// IoU of two boxes sharing a top-left corner. A zero union gives `0.0`.
pub fn iou(a: &BoxSize, b: &BoxSize) -> f64 {
    let inter = f64::from(a.width.min(b.width)) * f64::from(a.height.min(b.height));
    let union = a.area() + b.area() - inter;

    if union <= 0.0 {
        return 0.0;
    }

    inter / union
}

pub fn iou_distance(a: &BoxSize, b: &BoxSize) -> f64 {
    1.0 - iou(a, b)
}

#[derive(Debug, Clone)]
pub struct IouMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl IouMatrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Best cluster for box `i`, lowest index on ties.
    pub fn best_match(&self, i: usize) -> (usize, f64) {
        let mut best = (0, f64::NEG_INFINITY);
        for (j, &v) in self.row(i).iter().enumerate() {
            if v > best.1 {
                best = (j, v);
            }
        }
        best
    }
}

pub fn iou_matrix(boxes: &[BoxSize], clusters: &[BoxSize]) -> IouMatrix {
    let mut data = Vec::with_capacity(boxes.len() * clusters.len());
    for b in boxes {
        for c in clusters {
            data.push(iou(b, c));
        }
    }

    IouMatrix {
        rows: boxes.len(),
        cols: clusters.len(),
        data,
    }
}

/// Mean over all boxes of the best IoU against any cluster.
pub fn avg_iou(boxes: &[BoxSize], clusters: &[BoxSize]) -> f64 {
    if boxes.is_empty() || clusters.is_empty() {
        return 0.0;
    }

    let matrix = iou_matrix(boxes, clusters);
    let total: f64 = (0..matrix.rows()).map(|i| matrix.best_match(i).1).sum();
    total / boxes.len() as f64
}
