use crate::user_input::interface::{UserAction, UserInput};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Fans window button presses out to every subscriber.
#[derive(Clone, Default)]
pub struct ActionBroadcaster {
    subscribers: Arc<Mutex<Vec<Sender<UserAction>>>>,
}

impl ActionBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&self, action: UserAction) {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .retain(|subscriber| subscriber.send(action.clone()).is_ok());
    }

    fn subscribe(&self) -> Receiver<UserAction> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(tx);
        rx
    }
}

/// Subscribes on construction, so clicks made before the app asks for
/// actions are queued rather than dropped.
pub struct UserInputGui {
    broadcaster: ActionBroadcaster,
    first: Mutex<Option<Receiver<UserAction>>>,
}

impl UserInputGui {
    pub fn new(broadcaster: ActionBroadcaster) -> Self {
        let first = broadcaster.subscribe();
        Self {
            broadcaster,
            first: Mutex::new(Some(first)),
        }
    }
}

impl UserInput for UserInputGui {
    fn actions(&self) -> Receiver<UserAction> {
        self.first
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
            .unwrap_or_else(|| self.broadcaster.subscribe())
    }
}
