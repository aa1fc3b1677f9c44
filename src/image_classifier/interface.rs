use crate::image_classifier::preprocess::PixelBuffer;
use thiserror::Error;

/// Raw model output in training class order: index 0 is cat, index 1 is dog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    pub cat: f64,
    pub dog: f64,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load model from {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("unexpected model output: {0}")]
    Output(String),
}

pub trait ImageClassifier {
    fn classify(&self, buffer: &PixelBuffer) -> Result<ClassScores, ModelError>;
}
