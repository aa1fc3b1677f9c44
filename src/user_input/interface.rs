use crate::image_classifier::decision::Label;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    PickImage,
    ConfirmLabel(Label),
    ExportDataset,
    Quit,
}

pub trait UserInput {
    fn actions(&self) -> Receiver<UserAction>;
}
