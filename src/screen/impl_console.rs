use crate::screen::interface::{Screen, View};
use crate::user_input::impl_console::HELP;
use std::error::Error;

const FRAME_WIDTH: usize = 60;

pub struct ScreenConsole {}

impl ScreenConsole {
    pub fn new() -> Self {
        Self {}
    }
}

fn fit(text: &str) -> String {
    let mut line: String = text.chars().take(FRAME_WIDTH).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat(' ').take(FRAME_WIDTH - len));
    line
}

pub fn frame_lines(view: &View) -> Vec<String> {
    let border = "─".repeat(FRAME_WIDTH + 2);
    let mut body = vec![view.image_caption.clone(), view.prediction.clone()];

    if view.show_feedback {
        body.push("Was the prediction correct? [cat] Correct as Cat".to_string());
        body.push("                            [dog] Correct as Dog".to_string());
    }
    if let Some(message) = &view.feedback_message {
        body.push(message.clone());
    }
    if view.busy {
        body.push("Working...".to_string());
    }

    let mut lines = vec![format!("┌{}┐", border)];
    lines.extend(body.iter().map(|text| format!("│ {} │", fit(text))));
    lines.push(format!("├{}┤", border));
    lines.push(format!("│ {} │", fit(HELP)));
    lines.push(format!("└{}┘", border));
    lines
}

impl Screen for ScreenConsole {
    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        for line in frame_lines(view) {
            println!("{}", line);
        }
        Ok(())
    }
}
