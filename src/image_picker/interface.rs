use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum PickOutcome {
    Picked(Arc<DynamicImage>),
    Cancelled,
}

#[derive(Debug, Error)]
pub enum PickError {
    #[error("failed to read image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Supplies one image per request.
pub trait ImagePicker {
    fn pick(&self) -> Result<PickOutcome, PickError>;
}
