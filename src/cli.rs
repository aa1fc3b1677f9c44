use crate::config::{Config, ScreenKind, StorageFailurePolicy};
use crate::image_classifier::models::model_config::ModelBackend;
use clap::Parser;
use std::path::PathBuf;

/// Cat or dog photo classifier
#[derive(Parser, Debug)]
#[command(
    name = "pet-photo-classifier",
    about = "Classify photos as cat or dog and collect confirmed samples for retraining"
)]
pub struct Args {
    /// Front-end to run
    #[arg(long, value_enum)]
    pub screen: Option<ScreenKind>,

    /// Classifier backend
    #[arg(long, value_enum)]
    pub backend: Option<ModelBackend>,

    /// Path to the ONNX model
    #[arg(long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Root of the feedback store
    #[arg(long, value_name = "DIR")]
    pub data_root: Option<PathBuf>,

    /// Output directory of the dataset export
    #[arg(long, value_name = "DIR")]
    pub export_root: Option<PathBuf>,

    /// How a failed save is reported
    #[arg(long, value_enum)]
    pub on_storage_failure: Option<StorageFailurePolicy>,
}

pub fn apply_overrides(config: &mut Config, args: Args) {
    if let Some(screen) = args.screen {
        config.screen = screen;
    }
    if let Some(backend) = args.backend {
        config.model.backend = backend;
    }
    if let Some(model) = args.model {
        config.model.onnx_model_path = model;
    }
    if let Some(data_root) = args.data_root {
        config.user_data_root = data_root;
    }
    if let Some(export_root) = args.export_root {
        config.dataset.export_root = export_root;
    }
    if let Some(policy) = args.on_storage_failure {
        config.storage_failure_policy = policy;
    }
}
