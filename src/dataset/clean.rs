use crate::dataset::error::{DatasetError, Result};
use crate::dataset::split::has_image_extension;
use crate::image_classifier::decision::Label;
use crate::library::logger::interface::Logger;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub kept: usize,
    pub removed_non_images: usize,
    pub removed_invalid: usize,
}

impl CleanReport {
    pub fn removed(&self) -> usize {
        self.removed_non_images + self.removed_invalid
    }
}

/// Deletes files in `<root>/<Label>` that are not images or do not decode.
pub fn clean_dataset(root: &Path, logger: &dyn Logger) -> Result<CleanReport> {
    let mut report = CleanReport::default();

    for label in Label::ALL {
        let dir = root.join(label.as_str());
        if !dir.is_dir() {
            continue;
        }

        for entry in fs::read_dir(&dir).map_err(DatasetError::io(&dir))? {
            let path = entry.map_err(DatasetError::io(&dir))?.path();
            if !path.is_file() {
                continue;
            }

            if !has_image_extension(&path) {
                let _ = logger.info(&format!("Removing non-image file: {}", path.display()));
                fs::remove_file(&path).map_err(DatasetError::io(&path))?;
                report.removed_non_images += 1;
                continue;
            }

            if let Err(e) = image::open(&path) {
                let _ = logger.info(&format!(
                    "Removing invalid file: {} ({})",
                    path.display(),
                    e
                ));
                fs::remove_file(&path).map_err(DatasetError::io(&path))?;
                report.removed_invalid += 1;
                continue;
            }

            report.kept += 1;
        }
    }

    Ok(report)
}
