use crate::error::AnchorError;
use std::fmt;
use std::str::FromStr;

/// Both model input dimensions must be a multiple of this stride.
pub const MODEL_STRIDE: u32 = 32;

/// Cluster counts the common YOLO heads are built for.
pub const RECOMMENDED_CLUSTER_COUNTS: [usize; 3] = [5, 6, 9];

/// Network input resolution that boxes are rescaled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInputSize {
    pub height: u32,
    pub width: u32,
}

impl ModelInputSize {
    /// # Errors
    ///
    /// Returns `AnchorError::InvalidModelSize` unless both dimensions are
    /// non-zero multiples of 32.
    pub fn new(height: u32, width: u32) -> Result<Self, AnchorError> {
        if height == 0 || width == 0 {
            return Err(AnchorError::InvalidModelSize(format!(
                "{height}x{width}: dimensions must be non-zero"
            )));
        }
        if height % MODEL_STRIDE != 0 || width % MODEL_STRIDE != 0 {
            return Err(AnchorError::InvalidModelSize(format!(
                "{height}x{width}: dimensions must be multiples of {MODEL_STRIDE}"
            )));
        }

        Ok(Self { height, width })
    }
}

impl Default for ModelInputSize {
    fn default() -> Self {
        Self {
            height: 608,
            width: 608,
        }
    }
}

impl FromStr for ModelInputSize {
    type Err = AnchorError;

    /// Parse `"<height>x<width>"`, e.g. `"416x608"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, w) = s.trim().split_once('x').ok_or_else(|| {
            AnchorError::InvalidModelSize(format!("{s}: expected <height>x<width>"))
        })?;

        let parse = |v: &str| {
            v.trim().parse::<u32>().map_err(|e| {
                AnchorError::InvalidModelSize(format!("{s}: {v:?} is not a size ({e})"))
            })
        };

        Self::new(parse(h)?, parse(w)?)
    }
}

impl fmt::Display for ModelInputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Whether `k` is one of the usual anchor counts. Other values still work.
pub fn check_cluster_count(k: usize) -> bool {
    RECOMMENDED_CLUSTER_COUNTS.contains(&k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_size() {
        let size: ModelInputSize = "608x608".parse().unwrap();
        assert_eq!(size, ModelInputSize::default());
    }

    #[test]
    fn test_parse_height_then_width() {
        let size: ModelInputSize = "416x608".parse().unwrap();
        assert_eq!(size.height, 416);
        assert_eq!(size.width, 608);
        assert_eq!(size.to_string(), "416x608");
    }

    #[test]
    fn test_reject_non_multiple_of_32() {
        let err = "609x608".parse::<ModelInputSize>().unwrap_err();
        assert!(matches!(err, AnchorError::InvalidModelSize(_)));
        assert!(err.to_string().contains("multiples of 32"));
    }

    #[test]
    fn test_reject_malformed_size() {
        assert!("608".parse::<ModelInputSize>().is_err());
        assert!("608xabc".parse::<ModelInputSize>().is_err());
        assert!("-32x608".parse::<ModelInputSize>().is_err());
        assert!("0x608".parse::<ModelInputSize>().is_err());
    }

    #[test]
    fn test_cluster_count_advisory() {
        assert!(check_cluster_count(5));
        assert!(check_cluster_count(6));
        assert!(check_cluster_count(9));
        assert!(!check_cluster_count(7));
    }
}
