use crate::image_classifier::interface::{ClassScores, ImageClassifier, ModelError};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::preprocess::PixelBuffer;
use crate::image_classifier::tract::tensor::pixel_buffer_to_tensor;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};
use tract_onnx::prelude::*;

type TractPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// ONNX classifier. The model file is read on first use and then shared
/// read-only by every later call. A failed load is retried on the next call.
pub struct ImageClassifierTract {
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
    model: Mutex<Option<Arc<TractPlan>>>,
}

impl ImageClassifierTract {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("classifier.tract"),
            model: Mutex::new(None),
        }
    }

    pub fn preload(&self) -> Result<(), ModelError> {
        self.model().map(|_| ())
    }

    fn model(&self) -> Result<Arc<TractPlan>, ModelError> {
        let mut slot = self.model.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(model) = slot.as_ref() {
            return Ok(model.clone());
        }

        let model = Arc::new(load_model(&self.config)?);
        let _ = self.logger.info(&format!(
            "Loaded model {}",
            self.config.onnx_model_path.display()
        ));
        *slot = Some(model.clone());

        Ok(model)
    }
}

fn load_model(config: &ModelConfig) -> Result<TractPlan, ModelError> {
    let (height, width) = config.input_shape;
    let input_fact = f32::fact([1, height as usize, width as usize, 3]);

    tract_onnx::onnx()
        .model_for_path(&config.onnx_model_path)
        .and_then(|model| model.with_input_fact(0, input_fact.into()))
        .and_then(|model| model.into_optimized())
        .and_then(|model| model.into_runnable())
        .map_err(|e| ModelError::Load {
            path: config.onnx_model_path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Interprets the flattened model output as `[cat, dog]`.
pub fn scores_from_output(values: &[f32]) -> Result<ClassScores, ModelError> {
    match values {
        [cat, dog] => Ok(ClassScores {
            cat: *cat as f64,
            dog: *dog as f64,
        }),
        other => Err(ModelError::Output(format!(
            "expected 2 scores, got {}",
            other.len()
        ))),
    }
}

impl ImageClassifier for ImageClassifierTract {
    fn classify(&self, buffer: &PixelBuffer) -> Result<ClassScores, ModelError> {
        let model = self.model()?;

        let (height, width) = self.config.input_shape;
        if buffer.width() != width || buffer.height() != height {
            return Err(ModelError::Inference(format!(
                "input is {}x{}, model expects {}x{}",
                buffer.width(),
                buffer.height(),
                width,
                height
            )));
        }

        let input = pixel_buffer_to_tensor(buffer);

        let outputs = model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ModelError::Output("model produced no outputs".to_string()))?;

        let values: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| ModelError::Output(e.to_string()))?
            .iter()
            .copied()
            .collect();

        let scores = scores_from_output(&values)?;

        let _ = self.logger.info(&format!("Scores: {:?}", scores));

        Ok(scores)
    }
}
