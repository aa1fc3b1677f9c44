use crate::feedback_store::interface::{FeedbackStore, StorageError};
use crate::image_classifier::decision::Label;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageFormat};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

const IMAGE_EXTENSION: &str = "png";

/// Writes samples to `<root>/<Label>/<UUID>.png`.
pub struct FeedbackStoreFileSystem {
    root: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FeedbackStoreFileSystem {
    pub fn new(root: impl Into<PathBuf>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            root: root.into(),
            logger: logger.with_namespace("feedback_store"),
        }
    }

    pub fn label_dir(&self, label: Label) -> PathBuf {
        self.root.join(label.as_str())
    }
}

impl FeedbackStore for FeedbackStoreFileSystem {
    fn save_labeled_sample(
        &self,
        image: &DynamicImage,
        label: Label,
    ) -> Result<PathBuf, StorageError> {
        let dir = self.label_dir(label);
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDirectory {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(format!(
            "{}.{}",
            Uuid::new_v4().to_string().to_uppercase(),
            IMAGE_EXTENSION
        ));

        write_png(image, &path)?;

        let _ = self
            .logger
            .info(&format!("Saved image to: {}", path.display()));

        Ok(path)
    }
}

fn write_png(image: &DynamicImage, path: &Path) -> Result<(), StorageError> {
    // create_new: never overwrite an existing sample.
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| StorageError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

    if let Err(e) = encode_png(image, file, path) {
        let _ = fs::remove_file(path);
        return Err(e);
    }

    Ok(())
}

/// Encodes `image` into `out` and flushes it.
fn encode_png<W: Write + Seek>(
    image: &DynamicImage,
    out: W,
    path: &Path,
) -> Result<(), StorageError> {
    let mut writer = BufWriter::new(out);

    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|source| StorageError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer
        .into_inner()
        .map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: e.into_error(),
        })?;

    Ok(())
}
