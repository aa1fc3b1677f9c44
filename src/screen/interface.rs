use image::DynamicImage;
use std::error::Error;
use std::sync::Arc;

/// Everything the single screen shows, derived from the app state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub image: Option<Arc<DynamicImage>>,
    pub image_caption: String,
    pub prediction: String,
    /// Show the "Was the prediction correct?" buttons.
    pub show_feedback: bool,
    pub feedback_message: Option<String>,
    pub busy: bool,
    pub should_close: bool,
}

pub trait Screen {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;
}
