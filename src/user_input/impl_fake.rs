use crate::user_input::interface::{UserAction, UserInput};
use std::sync::mpsc::{self, Receiver};

/// Replays a fixed script of actions to each subscriber.
pub struct UserInputFake {
    script: Vec<UserAction>,
}

impl UserInputFake {
    pub fn new(script: Vec<UserAction>) -> Self {
        Self { script }
    }
}

impl UserInput for UserInputFake {
    fn actions(&self) -> Receiver<UserAction> {
        let (tx, rx) = mpsc::channel();
        for action in &self.script {
            let _ = tx.send(action.clone());
        }
        rx
    }
}
