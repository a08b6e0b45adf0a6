use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnchorError {
    #[error("Invalid model image size: {0}")]
    InvalidModelSize(String),

    #[error("Invalid clustering config: {0}")]
    InvalidConfig(String),

    #[error("Cannot pick {k} clusters from {boxes} boxes")]
    NotEnoughBoxes { k: usize, boxes: usize },

    #[error("Malformed annotation on line {line}: {reason}")]
    MalformedAnnotation { line: usize, reason: String },

    #[error("Cannot read image size for {image}: {reason}")]
    ImageMetadata { image: String, reason: String },

    #[error("Malformed anchors: {0}")]
    MalformedAnchors(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
