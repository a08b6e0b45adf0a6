mod annotation;
mod extract;
mod provider;


pub use annotation::{AnnotationLine, RawBox, parse_annotation_line};
pub use extract::{BoxExtractor, extract_boxes, rescale_box, rescale_factor};
pub use provider::{ImageFileSizes, ImageSizeProvider, KnownSizes};
