use crate::image_classifier::decision::Label;
use crate::image_picker::impl_path_slot::PathSlot;
use crate::library::logger::interface::Logger;
use crate::user_input::interface::{UserAction, UserInput};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Pick(Option<PathBuf>),
    Confirm(Label),
    Export,
    Quit,
}

pub const HELP: &str = "pick <path> | cat | dog | export | quit";

pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "pick" | "p" if argument.is_empty() => Some(ConsoleCommand::Pick(None)),
        "pick" | "p" => Some(ConsoleCommand::Pick(Some(PathBuf::from(argument)))),
        "cat" => Some(ConsoleCommand::Confirm(Label::Cat)),
        "dog" => Some(ConsoleCommand::Confirm(Label::Dog)),
        "export" => Some(ConsoleCommand::Export),
        "quit" | "q" | "exit" => Some(ConsoleCommand::Quit),
        _ => None,
    }
}

/// Reads commands from stdin. A `pick` command drops its path into the
/// shared [`PathSlot`] before asking the core for a pick.
pub struct UserInputConsole {
    path_slot: PathSlot,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl UserInputConsole {
    pub fn new(path_slot: PathSlot, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            path_slot,
            logger: logger.with_namespace("user_input.console"),
        }
    }
}

impl UserInput for UserInputConsole {
    fn actions(&self) -> Receiver<UserAction> {
        let (tx, rx) = mpsc::channel();
        let path_slot = self.path_slot.clone();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };

                let action = match parse_command(&line) {
                    Some(ConsoleCommand::Pick(path)) => {
                        path_slot.set(path);
                        UserAction::PickImage
                    }
                    Some(ConsoleCommand::Confirm(label)) => UserAction::ConfirmLabel(label),
                    Some(ConsoleCommand::Export) => UserAction::ExportDataset,
                    Some(ConsoleCommand::Quit) => UserAction::Quit,
                    None => {
                        let _ = logger.info(&format!("Unknown command {:?}. Try: {}", line, HELP));
                        continue;
                    }
                };

                if tx.send(action).is_err() {
                    return;
                }
            }

            // stdin closed
            let _ = tx.send(UserAction::Quit);
        });

        rx
    }
}
