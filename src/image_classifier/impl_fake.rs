use crate::image_classifier::interface::{ClassScores, ImageClassifier, ModelError};
use crate::image_classifier::preprocess::PixelBuffer;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

enum Behavior {
    Random,
    #[cfg(test)]
    Fixed(ClassScores),
    #[cfg(test)]
    Failing,
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Behavior,
}

impl ImageClassifierFake {
    /// Returns a random cat score and its complement as the dog score.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier.fake"),
            behavior: Behavior::Random,
        }
    }

    #[cfg(test)]
    pub fn with_scores(logger: Arc<dyn Logger + Send + Sync>, cat: f64, dog: f64) -> Self {
        Self {
            logger: logger.with_namespace("classifier.fake"),
            behavior: Behavior::Fixed(ClassScores { cat, dog }),
        }
    }

    #[cfg(test)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier.fake"),
            behavior: Behavior::Failing,
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, buffer: &PixelBuffer) -> Result<ClassScores, ModelError> {
        let _ = self.logger.info(&format!(
            "Classifying {}x{} buffer with fake classifier...",
            buffer.width(),
            buffer.height()
        ));

        match &self.behavior {
            Behavior::Random => {
                let mut rng = rand::rng();
                let score_dist =
                    Uniform::new(0.0, 1.0).map_err(|e| ModelError::Inference(e.to_string()))?;
                let cat: f64 = score_dist.sample(&mut rng);
                Ok(ClassScores {
                    cat,
                    dog: 1.0 - cat,
                })
            }
            #[cfg(test)]
            Behavior::Fixed(scores) => Ok(*scores),
            #[cfg(test)]
            Behavior::Failing => Err(ModelError::Inference("fake failure".to_string())),
        }
    }
}
