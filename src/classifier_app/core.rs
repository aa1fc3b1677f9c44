use crate::config::{Config, StorageFailurePolicy};
use crate::dataset::error::DatasetError;
use crate::dataset::export::ExportReport;
use crate::feedback_store::interface::StorageError;
use crate::image_classifier::decision::{Label, Prediction};
use crate::image_classifier::pipeline::ClassifyError;
use crate::image_picker::interface::{PickError, PickOutcome};
use crate::user_input::interface::UserAction;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;

pub const NO_PREDICTION: &str = "No Prediction";
pub const CLASSIFYING: &str = "Classifying...";

/// What the app is waiting on. Only `Idle` accepts new requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Picking,
    Classifying,
    Saving,
    Exporting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub activity: Activity,
    pub selected_image: Option<Arc<DynamicImage>>,
    pub prediction_text: String,
    pub feedback_message: Option<String>,
    pub quit: bool,
}

#[derive(Debug)]
pub enum Event {
    UserAction(UserAction),
    PickDone(Result<PickOutcome, PickError>),
    ClassifyDone(Result<Prediction, ClassifyError>),
    SaveDone {
        label: Label,
        result: Result<PathBuf, StorageError>,
    },
    ExportDone(Result<ExportReport, DatasetError>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::UserAction(action) => format!("UserAction({:?})", action),
            Event::PickDone(Ok(PickOutcome::Picked(image))) => {
                format!("PickDone(Picked {}x{})", image.width(), image.height())
            }
            Event::PickDone(Ok(PickOutcome::Cancelled)) => "PickDone(Cancelled)".to_string(),
            Event::PickDone(Err(e)) => format!("PickDone(Err({}))", e),
            Event::ClassifyDone(Ok(prediction)) => format!("ClassifyDone({})", prediction),
            Event::ClassifyDone(Err(e)) => format!("ClassifyDone(Err({}))", e),
            Event::SaveDone { label, result } => match result {
                Ok(path) => format!("SaveDone({}, {})", label, path.display()),
                Err(e) => format!("SaveDone({}, Err({}))", label, e),
            },
            Event::ExportDone(Ok(report)) => format!("ExportDone({})", report),
            Event::ExportDone(Err(e)) => format!("ExportDone(Err({}))", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeUserInput,
    PickImage,
    Classify {
        image: Arc<DynamicImage>,
    },
    SaveSample {
        image: Arc<DynamicImage>,
        label: Label,
    },
    ExportDataset,
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::SubscribeUserInput => "SubscribeUserInput".to_string(),
            Effect::PickImage => "PickImage".to_string(),
            Effect::Classify { image } => {
                format!("Classify({}x{})", image.width(), image.height())
            }
            Effect::SaveSample { label, .. } => format!("SaveSample({})", label),
            Effect::ExportDataset => "ExportDataset".to_string(),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    let state = State {
        activity: Activity::Idle,
        selected_image: None,
        prediction_text: NO_PREDICTION.to_string(),
        feedback_message: None,
        quit: false,
    };

    (state, vec![Effect::SubscribeUserInput])
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::UserAction(UserAction::Quit) => (State { quit: true, ..state }, vec![]),

        // One request at a time.
        Event::UserAction(_) if state.activity != Activity::Idle => (state, vec![]),

        Event::UserAction(UserAction::PickImage) => (
            State {
                activity: Activity::Picking,
                feedback_message: None,
                ..state
            },
            vec![Effect::PickImage],
        ),

        Event::UserAction(UserAction::ConfirmLabel(label)) => match state.selected_image.clone() {
            Some(image) => (
                State {
                    activity: Activity::Saving,
                    feedback_message: None,
                    ..state
                },
                vec![Effect::SaveSample { image, label }],
            ),
            None => (state, vec![]),
        },

        Event::UserAction(UserAction::ExportDataset) => (
            State {
                activity: Activity::Exporting,
                feedback_message: Some("Exporting dataset...".to_string()),
                ..state
            },
            vec![Effect::ExportDataset],
        ),

        Event::PickDone(Ok(PickOutcome::Picked(image))) => (
            State {
                activity: Activity::Classifying,
                selected_image: Some(image.clone()),
                prediction_text: CLASSIFYING.to_string(),
                ..state
            },
            vec![Effect::Classify { image }],
        ),

        Event::PickDone(Ok(PickOutcome::Cancelled)) => (
            State {
                activity: Activity::Idle,
                ..state
            },
            vec![],
        ),

        Event::PickDone(Err(_)) => (
            State {
                activity: Activity::Idle,
                feedback_message: Some("Error: Unable to open the selected image.".to_string()),
                ..state
            },
            vec![],
        ),

        Event::ClassifyDone(Ok(prediction)) => (
            State {
                activity: Activity::Idle,
                prediction_text: prediction.to_string(),
                ..state
            },
            vec![],
        ),

        Event::ClassifyDone(Err(e)) => (
            State {
                activity: Activity::Idle,
                prediction_text: e.status().to_string(),
                ..state
            },
            vec![],
        ),

        Event::SaveDone {
            label,
            result: Ok(_),
        } => (
            State {
                activity: Activity::Idle,
                feedback_message: Some(format!("Saved as {}", label)),
                ..state
            },
            vec![],
        ),

        Event::SaveDone {
            label,
            result: Err(_),
        } => {
            let feedback_message = match config.storage_failure_policy {
                StorageFailurePolicy::Surface => {
                    Some(format!("Error: Unable to save image as {}.", label))
                }
                StorageFailurePolicy::LogOnly => None,
            };
            (
                State {
                    activity: Activity::Idle,
                    feedback_message,
                    ..state
                },
                vec![],
            )
        }

        Event::ExportDone(Ok(report)) => (
            State {
                activity: Activity::Idle,
                feedback_message: Some(report.to_string()),
                ..state
            },
            vec![],
        ),

        Event::ExportDone(Err(_)) => (
            State {
                activity: Activity::Idle,
                feedback_message: Some("Error: Unable to export dataset.".to_string()),
                ..state
            },
            vec![],
        ),
    }
}
