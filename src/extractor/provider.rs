use crate::error::AnchorError;
use std::collections::HashMap;

pub trait ImageSizeProvider {
    /// `(width, height)` in pixels.
    fn image_size(&self, image: &str) -> Result<(u32, u32), AnchorError>;
}

/// Reads dimensions from image file headers.
pub struct ImageFileSizes;

impl ImageSizeProvider for ImageFileSizes {
    fn image_size(&self, image: &str) -> Result<(u32, u32), AnchorError> {
        image::image_dimensions(image).map_err(|e| AnchorError::ImageMetadata {
            image: image.to_string(),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct KnownSizes {
    sizes: HashMap<String, (u32, u32)>,
}

impl KnownSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, image: impl Into<String>, width: u32, height: u32) {
        self.sizes.insert(image.into(), (width, height));
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl ImageSizeProvider for KnownSizes {
    fn image_size(&self, image: &str) -> Result<(u32, u32), AnchorError> {
        self.sizes
            .get(image)
            .copied()
            .ok_or_else(|| AnchorError::ImageMetadata {
                image: image.to_string(),
                reason: "no size registered".to_string(),
            })
    }
}

impl<P: ImageSizeProvider + ?Sized> ImageSizeProvider for &P {
    fn image_size(&self, image: &str) -> Result<(u32, u32), AnchorError> {
        (**self).image_size(image)
    }
}
