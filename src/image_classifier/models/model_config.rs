use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelBackend {
    /// ONNX model run with tract
    Onnx,
    /// Random scores, no model file needed
    Fake,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// (height, width) of the model input.
    pub input_shape: (u32, u32),
    pub backend: ModelBackend,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("./models/cats_dogs_classifier.onnx"),
            input_shape: (32, 32),
            backend: ModelBackend::Onnx,
        }
    }
}
