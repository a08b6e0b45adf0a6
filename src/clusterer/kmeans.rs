use rand::Rng;
use rand::seq::index;
use tracing::{debug, warn};

use crate::clusterer::{
    config::KMeansConfig,
    iou::{IouMatrix, iou_matrix},
    median::median_box,
    types::{BoxSize, ClusterResult},
};
use crate::error::AnchorError;

/// Cluster box sizes with k-means, using `1 - IoU` as the distance and the
/// element-wise median as the center update.
///
/// Initial centers are `k` distinct boxes sampled uniformly from `boxes` with `rng`.
/// The loop stops once the assignment of boxes to clusters is unchanged from the
/// previous round (the round before the first counts as "everything in cluster 0"),
/// or when `config.max_iterations` is reached.
///
/// Zero-area boxes overlap nothing, so they are assigned but never move a center.
/// A cluster with no positive-area member is re-seeded from the worst-fitting
/// positive-area box. A round that re-seeds, or that leaves a cluster empty while
/// other centers still move, is not considered converged.
///
/// # Errors
///
/// Returns `AnchorError::NotEnoughBoxes` if `config.k` exceeds the number of boxes.
pub fn kmeans<R: Rng + ?Sized>(
    boxes: &[BoxSize],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<ClusterResult, AnchorError> {
    let n = boxes.len();
    let k = config.k;

    if k > n {
        return Err(AnchorError::NotEnoughBoxes { k, boxes: n });
    }

    // 1. Pick random initial centers
    let centers: Vec<BoxSize> = index::sample(rng, n, k)
        .into_iter()
        .map(|i| boxes[i])
        .collect();

    Ok(kmeans_from(boxes, centers, config))
}

/// Run the assignment/update loop from the given initial centers.
pub(crate) fn kmeans_from(
    boxes: &[BoxSize],
    mut centers: Vec<BoxSize>,
    config: &KMeansConfig,
) -> ClusterResult {
    let n = boxes.len();
    let k = centers.len();

    let mut last_nearest = vec![0usize; n];
    let mut iterations = 0;
    let mut converged = false;

    loop {
        iterations += 1;

        // 2. Assign each box to its closest center
        let matrix = iou_matrix(boxes, &centers);
        let nearest: Vec<usize> = (0..n).map(|i| matrix.best_match(i).0).collect();

        // 3. Medians of the new groups, then re-seed clusters nobody joined
        let mut members: Vec<Vec<BoxSize>> = vec![Vec::new(); k];
        for (b, &c) in boxes.iter().zip(&nearest) {
            if !b.is_degenerate() {
                members[c].push(*b);
            }
        }
        let mut next = centers.clone();
        for (center, group) in next.iter_mut().zip(&members) {
            if let Some(m) = median_box(group) {
                *center = m;
            }
        }
        let reseeded = reseed_empty(boxes, &matrix, &nearest, &members, &centers, &mut next);

        // an empty cluster only counts as settled once the centers stop moving
        let settled = members.iter().all(|m| !m.is_empty()) || next == centers;

        if nearest == last_nearest && reseeded == 0 && settled {
            converged = true;
            break;
        }

        if iterations >= config.max_iterations {
            // keep the centers `nearest` was computed against
            last_nearest = nearest;
            break;
        }

        let changed = nearest
            .iter()
            .zip(&last_nearest)
            .filter(|(a, b)| a != b)
            .count();
        debug!(iteration = iterations, changed, reseeded, "k-means round");

        centers = next;
        last_nearest = nearest;
    }

    if !converged {
        warn!(
            max_iterations = config.max_iterations,
            "k-means stopped at the iteration cap before assignments settled"
        );
    }

    ClusterResult {
        centers,
        assignments: last_nearest,
        iterations,
        converged,
    }
}

/// Replace the center of every cluster without positive-area members.
///
/// Candidates are positive-area boxes ordered by IoU distance to their assigned
/// center, worst first. A box is used at most once and never when its size is
/// already a center in `current` or `next`. Clusters with no candidate left keep
/// their center. Returns the number of clusters re-seeded into `next`.
fn reseed_empty(
    boxes: &[BoxSize],
    matrix: &IouMatrix,
    nearest: &[usize],
    members: &[Vec<BoxSize>],
    current: &[BoxSize],
    next: &mut [BoxSize],
) -> usize {
    if members.iter().all(|m| !m.is_empty()) {
        return 0;
    }

    let mut candidates: Vec<usize> = (0..boxes.len())
        .filter(|&i| !boxes[i].is_degenerate())
        .collect();
    candidates.sort_by(|&a, &b| {
        let da = 1.0 - matrix.get(a, nearest[a]);
        let db = 1.0 - matrix.get(b, nearest[b]);
        db.total_cmp(&da)
    });

    let mut used = vec![false; boxes.len()];
    let mut reseeded = 0;

    for (j, group) in members.iter().enumerate() {
        if !group.is_empty() {
            continue;
        }

        let pick = candidates.iter().copied().find(|&i| {
            !used[i] && !current.contains(&boxes[i]) && !next.contains(&boxes[i])
        });

        if let Some(i) = pick {
            used[i] = true;
            next[j] = boxes[i];
            reseeded += 1;
        }
    }

    reseeded
}
