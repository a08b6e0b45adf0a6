use crate::error::AnchorError;

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Parameters for an IoU k-means run, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KMeansConfig {
    /// Number of cluster centers to produce.
    pub k: usize,

    /// Upper bound on assignment/update rounds. The loop normally stops much
    /// earlier, once assignments stop changing.
    pub max_iterations: usize,
}

impl KMeansConfig {
    /// # Errors
    ///
    /// Returns `AnchorError::InvalidConfig` if `k` or `max_iterations` is zero.
    pub fn new(k: usize, max_iterations: usize) -> Result<Self, AnchorError> {
        if k == 0 {
            return Err(AnchorError::InvalidConfig("k must be > 0".to_string()));
        }
        if max_iterations == 0 {
            return Err(AnchorError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }

        Ok(Self { k, max_iterations })
    }

    /// Config for `k` clusters with the default iteration cap.
    pub fn with_k(k: usize) -> Result<Self, AnchorError> {
        Self::new(k, DEFAULT_MAX_ITERATIONS)
    }
}
