use crate::classifier_app::core::{Effect, Event};
use crate::classifier_app::main::ClassifierApp;
use crate::dataset::export::export_dataset;

impl ClassifierApp {
    /// Runs one effect to completion and returns the event carrying its
    /// result. Errors are always logged here, whatever the screen shows.
    pub fn run_effect(&self, effect: Effect) -> Option<Event> {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeUserInput => {
                let actions = self.user_input.actions();
                for action in actions.iter() {
                    if self.event_sender.send(Event::UserAction(action)).is_err() {
                        break;
                    }
                }
                None
            }
            Effect::PickImage => {
                let result = self.image_picker.pick();
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Image picker failed: {}", e));
                }
                Some(Event::PickDone(result))
            }
            Effect::Classify { image } => {
                let result = self.pipeline.classify(&image);
                match &result {
                    Ok(prediction) => {
                        let _ = self.logger.info(&prediction.to_string());
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!("{} ({})", e.status(), e));
                    }
                }
                Some(Event::ClassifyDone(result))
            }
            Effect::SaveSample { image, label } => {
                let result = self.feedback_store.save_labeled_sample(&image, label);
                match &result {
                    Ok(path) => {
                        let _ = self
                            .logger
                            .info(&format!("Saved as {}: {}", label, path.display()));
                    }
                    Err(e) => {
                        let _ = self
                            .logger
                            .error(&format!("Failed to save image as {}: {}", label, e));
                    }
                }
                Some(Event::SaveDone { label, result })
            }
            Effect::ExportDataset => {
                let result = export_dataset(
                    &self.config.user_data_root,
                    &self.config.dataset,
                    self.logger.as_ref(),
                );
                match &result {
                    Ok(report) => {
                        let _ = self.logger.info(&report.to_string());
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!("Dataset export failed: {}", e));
                    }
                }
                Some(Event::ExportDone(result))
            }
        }
    }
}
