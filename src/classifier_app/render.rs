use crate::classifier_app::core::{Activity, State};
use crate::classifier_app::main::ClassifierApp;
use crate::screen::interface::View;
use std::error::Error;

pub const NO_IMAGE: &str = "No Image Selected";

pub fn view(state: &State) -> View {
    let image_caption = match &state.selected_image {
        Some(image) => format!("Image: {}x{}", image.width(), image.height()),
        None => NO_IMAGE.to_string(),
    };

    View {
        image: state.selected_image.clone(),
        image_caption,
        prediction: state.prediction_text.clone(),
        show_feedback: state.selected_image.is_some(),
        feedback_message: state.feedback_message.clone(),
        busy: state.activity != Activity::Idle,
        should_close: state.quit,
    }
}

impl ClassifierApp {
    pub fn render(&self, state: &State) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut screen = self
            .screen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        screen.render(&view(state))
    }
}
