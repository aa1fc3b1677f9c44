use crate::image_classifier::decision::Label;
use image::DynamicImage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write image to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode image to {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Append-only store of user-confirmed samples for retraining.
pub trait FeedbackStore {
    fn save_labeled_sample(&self, image: &DynamicImage, label: Label)
        -> Result<PathBuf, StorageError>;
}
