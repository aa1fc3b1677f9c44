use crate::image_picker::interface::{ImagePicker, PickError, PickOutcome};
use image::{DynamicImage, ImageBuffer};
use std::sync::Arc;

pub struct ImagePickerFake {
    outcome: PickOutcome,
}

impl ImagePickerFake {
    /// Always picks a black 64x64 image.
    pub fn new() -> Self {
        Self {
            outcome: PickOutcome::Picked(Arc::new(DynamicImage::ImageRgb8(ImageBuffer::new(
                64, 64,
            )))),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            outcome: PickOutcome::Cancelled,
        }
    }
}

impl ImagePicker for ImagePickerFake {
    fn pick(&self) -> Result<PickOutcome, PickError> {
        Ok(self.outcome.clone())
    }
}
