use crate::config::DatasetConfig;
use crate::dataset::clean::clean_dataset;
use crate::dataset::error::Result;
use crate::dataset::split::{split_dataset, TRAIN_DIR, VALIDATION_DIR};
use crate::library::logger::interface::Logger;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportReport {
    pub train: usize,
    pub validation: usize,
    pub removed: usize,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} training and {} validation images.",
            self.train, self.validation
        )?;
        if self.removed > 0 {
            write!(f, " Removed invalid files: {}.", self.removed)?;
        }
        Ok(())
    }
}

/// Splits the feedback store into `config.export_root` and cleans both halves.
pub fn export_dataset(
    source_root: &Path,
    config: &DatasetConfig,
    logger: &dyn Logger,
) -> Result<ExportReport> {
    let split = split_dataset(source_root, &config.export_root, config)?;
    let _ = logger.info(&format!(
        "Split {} into {} training and {} validation images",
        source_root.display(),
        split.train,
        split.validation
    ));

    let train = clean_dataset(&config.export_root.join(TRAIN_DIR), logger)?;
    let validation = clean_dataset(&config.export_root.join(VALIDATION_DIR), logger)?;

    Ok(ExportReport {
        train: train.kept,
        validation: validation.kept,
        removed: train.removed() + validation.removed(),
    })
}
