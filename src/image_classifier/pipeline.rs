use crate::image_classifier::decision::{decide, InvalidScore, Prediction};
use crate::image_classifier::interface::{ImageClassifier, ModelError};
use crate::image_classifier::preprocess::{preprocess, PreprocessError};
use image::DynamicImage;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("model failed: {0}")]
    Model(#[from] ModelError),
    #[error(transparent)]
    InvalidScore(#[from] InvalidScore),
}

impl ClassifyError {
    /// Status line shown in place of the prediction.
    pub fn status(&self) -> &'static str {
        match self {
            ClassifyError::Preprocess(_) => "Error: Unable to preprocess image.",
            ClassifyError::Model(ModelError::Load { .. }) => "Error: Unable to load model.",
            ClassifyError::Model(ModelError::Inference(_)) => {
                "Error: Model failed to make predictions."
            }
            ClassifyError::Model(ModelError::Output(_)) => {
                "Error: Unable to interpret model output."
            }
            ClassifyError::InvalidScore(_) => "Error: Model returned an invalid score.",
        }
    }
}

/// Preprocess, classify, decide. Holds the model handle for its lifetime.
#[derive(Clone)]
pub struct ClassificationPipeline {
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl ClassificationPipeline {
    pub fn new(classifier: Arc<dyn ImageClassifier + Send + Sync>) -> Self {
        Self { classifier }
    }

    pub fn classify(&self, image: &DynamicImage) -> Result<Prediction, ClassifyError> {
        let buffer = preprocess(image)?;
        let scores = self.classifier.classify(&buffer)?;
        let prediction = decide(scores.cat, scores.dog)?;
        Ok(prediction)
    }
}
