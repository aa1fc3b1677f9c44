use crate::screen::interface::{Screen, View};
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct ScreenFake {
    pub views: Arc<Mutex<Vec<View>>>,
}

impl ScreenFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for ScreenFake {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.views.lock().unwrap().push(view.clone());
        Ok(())
    }
}
