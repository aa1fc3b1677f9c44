use crate::classifier_app::core::Event;
use crate::config::Config;
use crate::feedback_store::interface::FeedbackStore;
use crate::image_classifier::pipeline::ClassificationPipeline;
use crate::image_picker::interface::ImagePicker;
use crate::library::logger::interface::Logger;
use crate::screen::interface::Screen;
use crate::user_input::interface::UserInput;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct ClassifierApp {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub user_input: Arc<dyn UserInput + Send + Sync>,
    pub image_picker: Arc<dyn ImagePicker + Send + Sync>,
    pub pipeline: ClassificationPipeline,
    pub feedback_store: Arc<dyn FeedbackStore + Send + Sync>,
    pub screen: Arc<Mutex<dyn Screen + Send>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
}

impl ClassifierApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        user_input: Arc<dyn UserInput + Send + Sync>,
        image_picker: Arc<dyn ImagePicker + Send + Sync>,
        pipeline: ClassificationPipeline,
        feedback_store: Arc<dyn FeedbackStore + Send + Sync>,
        screen: Arc<Mutex<dyn Screen + Send>>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("app"),
            user_input,
            image_picker,
            pipeline,
            feedback_store,
            screen,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }
}
