//! Train/validation split of the feedback store.
//!
//! Each label directory is split independently, so both subsets keep the
//! class balance of the source. The shuffle is seeded, so the same source and
//! seed always give the same split.

use crate::config::DatasetConfig;
use crate::dataset::error::{DatasetError, Result};
use crate::image_classifier::decision::Label;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

pub const TRAIN_DIR: &str = "train";
pub const VALIDATION_DIR: &str = "validation";

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub train: usize,
    pub validation: usize,
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Image files directly inside `dir`, sorted by path. A missing directory
/// has no images.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(DatasetError::io(dir))? {
        let path = entry.map_err(DatasetError::io(dir))?.path();
        if path.is_file() && has_image_extension(&path) {
            images.push(path);
        }
    }
    images.sort();

    Ok(images)
}

pub fn validation_count(total: usize, fraction: f64) -> usize {
    ((total as f64 * fraction).ceil() as usize).min(total)
}

/// Copies `<source_root>/<Label>/*` into `<output_root>/train/<Label>` and
/// `<output_root>/validation/<Label>`. Both label directories are emptied
/// first, so every export reflects only the current source.
pub fn split_dataset(
    source_root: &Path,
    output_root: &Path,
    config: &DatasetConfig,
) -> Result<SplitReport> {
    if !(0.0..=1.0).contains(&config.validation_fraction) {
        return Err(DatasetError::InvalidFraction(config.validation_fraction));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = SplitReport::default();

    for label in Label::ALL {
        let train_dir = output_root.join(TRAIN_DIR).join(label.as_str());
        let validation_dir = output_root.join(VALIDATION_DIR).join(label.as_str());
        reset_dir(&train_dir)?;
        reset_dir(&validation_dir)?;

        let mut images = list_images(&source_root.join(label.as_str()))?;
        images.shuffle(&mut rng);

        let split_at = validation_count(images.len(), config.validation_fraction);
        let (validation, train) = images.split_at(split_at);

        copy_into(validation, &validation_dir)?;
        copy_into(train, &train_dir)?;

        report.validation += validation.len();
        report.train += train.len();
    }

    Ok(report)
}

fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(DatasetError::io(dir))?;
    }
    fs::create_dir_all(dir).map_err(DatasetError::io(dir))
}

fn copy_into(files: &[PathBuf], dir: &Path) -> Result<()> {
    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = dir.join(name);
        fs::copy(file, &target).map_err(DatasetError::io(&target))?;
    }
    Ok(())
}
