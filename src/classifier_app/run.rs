use crate::classifier_app::core::{init, transition, Effect};
use crate::classifier_app::main::ClassifierApp;
use std::error::Error;

impl ClassifierApp {
    /// Applies events one at a time until the user quits.
    pub fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let (mut current_state, effects) = init();

        self.render(&current_state)?;
        self.execute_effects(effects);

        let event_receiver = self
            .event_receiver
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        while !current_state.quit {
            let event = event_receiver.recv()?;

            let _ = self
                .logger
                .info(&format!("event: {}", event.to_display_string()));

            let (new_state, effects) = transition(&self.config, current_state, event);
            current_state = new_state;

            self.render(&current_state)?;
            self.execute_effects(effects);
        }

        let _ = self.logger.info("Quitting");

        Ok(())
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || {
                if let Some(event) = self_clone.run_effect(effect) {
                    let _ = self_clone.event_sender.send(event);
                }
            });
        }
    }
}
