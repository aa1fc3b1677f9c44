use crate::image_classifier::models::model_config::ModelConfig;
use chrono::Offset;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageFailurePolicy {
    /// Show the failure on screen as well as logging it.
    Surface,
    /// Log the failure and leave the screen untouched.
    LogOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenKind {
    /// Text frame on stdout, commands on stdin
    Console,
    /// Native window
    Gui,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub export_root: PathBuf,
    pub validation_fraction: f64,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub model: ModelConfig,
    pub user_data_root: PathBuf,
    pub storage_failure_policy: StorageFailurePolicy,
    pub screen: ScreenKind,
    pub dataset: DatasetConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: utc(),
            model: ModelConfig::default(),
            user_data_root: PathBuf::from("./documents"),
            storage_failure_policy: StorageFailurePolicy::Surface,
            screen: ScreenKind::Gui,
            dataset: DatasetConfig {
                export_root: PathBuf::from("./dataset"),
                validation_fraction: 0.2,
                seed: 42,
            },
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
