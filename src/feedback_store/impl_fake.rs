use crate::feedback_store::interface::{FeedbackStore, StorageError};
use crate::image_classifier::decision::Label;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct FeedbackStoreFake {
    pub saved: Arc<Mutex<Vec<Label>>>,
    pub fail: bool,
}

impl FeedbackStoreFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl FeedbackStore for FeedbackStoreFake {
    fn save_labeled_sample(
        &self,
        _image: &DynamicImage,
        label: Label,
    ) -> Result<PathBuf, StorageError> {
        let path = PathBuf::from(label.as_str()).join("sample.png");
        if self.fail {
            return Err(StorageError::CreateDirectory {
                path,
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.saved.lock().unwrap().push(label);
        Ok(path)
    }
}
