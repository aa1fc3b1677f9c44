use clap::Parser;
use classifier_app::main::ClassifierApp;
use cli::{apply_overrides, Args};
use config::{Config, ScreenKind};
use feedback_store::impl_file_system::FeedbackStoreFileSystem;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract::ImageClassifierTract;
use image_classifier::interface::ImageClassifier;
use image_classifier::models::model_config::ModelBackend;
use image_classifier::pipeline::ClassificationPipeline;
use image_picker::impl_path_slot::{ImagePickerPathSlot, PathSlot};
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use screen::impl_console::ScreenConsole;
use screen::impl_gui::{run_window, GuiShared, ScreenGui};
use std::sync::{Arc, Mutex};
use user_input::impl_console::UserInputConsole;
use user_input::impl_gui::{ActionBroadcaster, UserInputGui};
use user_input::interface::UserAction;

mod classifier_app;
mod cli;
mod config;
mod dataset;
mod feedback_store;
mod image_classifier;
mod image_picker;
mod library;
mod screen;
mod user_input;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = Config::default();
    apply_overrides(&mut config, Args::parse());

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let pipeline = ClassificationPipeline::new(image_classifier(&config, logger.clone()));

    let feedback_store = Arc::new(FeedbackStoreFileSystem::new(
        config.user_data_root.clone(),
        logger.clone(),
    ));

    let path_slot = PathSlot::new();
    let image_picker = Arc::new(ImagePickerPathSlot::new(path_slot.clone()));

    match config.screen {
        ScreenKind::Console => {
            let user_input = Arc::new(UserInputConsole::new(path_slot, logger.clone()));
            let screen = Arc::new(Mutex::new(ScreenConsole::new()));

            let app = ClassifierApp::new(
                config,
                logger,
                user_input,
                image_picker,
                pipeline,
                feedback_store,
                screen,
            );

            app.run()
        }
        ScreenKind::Gui => {
            let shared = GuiShared::new();
            let actions = ActionBroadcaster::new();
            let user_input = Arc::new(UserInputGui::new(actions.clone()));
            let screen = Arc::new(Mutex::new(ScreenGui::new(shared.clone())));

            let app = ClassifierApp::new(
                config,
                logger,
                user_input,
                image_picker,
                pipeline,
                feedback_store,
                screen,
            );

            let app_thread = std::thread::spawn(move || app.run());

            run_window(shared, path_slot, actions.clone()).map_err(|e| e.to_string())?;

            // The window may be closed before the app saw a quit.
            actions.send(UserAction::Quit);

            match app_thread.join() {
                Ok(result) => result,
                Err(_) => Err("app thread panicked".into()),
            }
        }
    }
}

fn image_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn ImageClassifier + Send + Sync> {
    match config.model.backend {
        ModelBackend::Onnx => {
            let classifier = ImageClassifierTract::new(config.model.clone(), logger.clone());
            if let Err(e) = classifier.preload() {
                let _ = logger.error(&format!("{}. Classification will retry on demand.", e));
            }
            Arc::new(classifier)
        }
        ModelBackend::Fake => Arc::new(ImageClassifierFake::new(logger)),
    }
}
