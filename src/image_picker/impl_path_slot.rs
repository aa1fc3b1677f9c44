use crate::image_picker::interface::{ImagePicker, PickError, PickOutcome};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// The path most recently chosen on screen, waiting to be picked up.
#[derive(Debug, Clone, Default)]
pub struct PathSlot(Arc<Mutex<Option<PathBuf>>>);

impl PathSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, path: Option<PathBuf>) {
        *self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = path;
    }

    pub fn take(&self) -> Option<PathBuf> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

/// Opens whatever file the user put in the [`PathSlot`]. An empty slot
/// means the user dismissed the picker.
pub struct ImagePickerPathSlot {
    slot: PathSlot,
}

impl ImagePickerPathSlot {
    pub fn new(slot: PathSlot) -> Self {
        Self { slot }
    }
}

impl ImagePicker for ImagePickerPathSlot {
    fn pick(&self) -> Result<PickOutcome, PickError> {
        let Some(path) = self.slot.take() else {
            return Ok(PickOutcome::Cancelled);
        };

        let image = image::open(&path).map_err(|source| PickError::Decode { path, source })?;

        Ok(PickOutcome::Picked(Arc::new(image)))
    }
}
