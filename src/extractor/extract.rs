use crate::clusterer::BoxSize;
use crate::config::ModelInputSize;
use crate::error::AnchorError;
use crate::extractor::annotation::{RawBox, parse_annotation_line};
use crate::extractor::provider::ImageSizeProvider;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Turns annotation lines into box sizes rescaled to the model input.
pub struct BoxExtractor<P> {
    provider: P,
    target: ModelInputSize,
    /// Image reference -> (width, height), filled as images are first seen
    cache: HashMap<String, (u32, u32)>,
}

impl<P: ImageSizeProvider> BoxExtractor<P> {
    pub fn new(provider: P, target: ModelInputSize) -> Self {
        Self {
            provider,
            target,
            cache: HashMap::new(),
        }
    }

    /// Extract every box from an annotation stream.
    ///
    /// All-or-nothing: the first malformed line or unreadable image aborts the run.
    pub fn extract<R: BufRead>(&mut self, reader: R) -> Result<Vec<BoxSize>, AnchorError> {
        let mut boxes = Vec::new();
        let mut lines = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(annotation) = parse_annotation_line(&line, idx + 1)? else {
                continue;
            };
            lines += 1;

            let image_size = self.image_size(&annotation.image)?;
            let scale = rescale_factor(image_size, self.target);

            boxes.extend(annotation.boxes.iter().map(|raw| rescale_box(raw, scale)));
        }

        info!(
            lines,
            images = self.cache.len(),
            boxes = boxes.len(),
            "extracted annotation boxes"
        );
        Ok(boxes)
    }

    /// Extract every box from an annotation file.
    pub fn extract_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<BoxSize>, AnchorError> {
        let file = File::open(path.as_ref())?;
        self.extract(BufReader::new(file))
    }

    fn image_size(&mut self, image: &str) -> Result<(u32, u32), AnchorError> {
        if let Some(&size) = self.cache.get(image) {
            return Ok(size);
        }

        let (width, height) = self.provider.image_size(image)?;
        if width == 0 || height == 0 {
            return Err(AnchorError::ImageMetadata {
                image: image.to_string(),
                reason: format!("degenerate size {width}x{height}"),
            });
        }

        debug!(image, width, height, "probed image size");
        self.cache.insert(image.to_string(), (width, height));
        Ok((width, height))
    }
}

/// Convenience wrapper: extract boxes from `reader` with a fresh [`BoxExtractor`].
pub fn extract_boxes<P: ImageSizeProvider, R: BufRead>(
    reader: R,
    provider: P,
    target: ModelInputSize,
) -> Result<Vec<BoxSize>, AnchorError> {
    BoxExtractor::new(provider, target).extract(reader)
}

/// Letterbox factor mapping an image of `(width, height)` into `target`.
pub fn rescale_factor((width, height): (u32, u32), target: ModelInputSize) -> f64 {
    let sw = f64::from(target.width) / f64::from(width);
    let sh = f64::from(target.height) / f64::from(height);
    sw.min(sh)
}

/// Scale a raw box and round each side half-to-even.
pub fn rescale_box(raw: &RawBox, scale: f64) -> BoxSize {
    let side = |v: i64| (v as f64 * scale).round_ties_even() as u32;
    BoxSize::new(side(raw.width()), side(raw.height()))
}
