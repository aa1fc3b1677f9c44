use crate::classifier_app::core::{
    init, transition, Activity, Effect, Event, State, CLASSIFYING, NO_PREDICTION,
};
use crate::classifier_app::render::{view, NO_IMAGE};
use crate::config::{Config, StorageFailurePolicy};
use crate::dataset::error::DatasetError;
use crate::dataset::export::ExportReport;
use crate::feedback_store::interface::StorageError;
use crate::image_classifier::decision::{Label, Prediction};
use crate::image_classifier::interface::ModelError;
use crate::image_classifier::pipeline::ClassifyError;
use crate::image_picker::interface::PickOutcome;
use crate::user_input::interface::UserAction;
use image::{DynamicImage, ImageBuffer};
use std::path::PathBuf;
use std::sync::Arc;

fn black_image() -> Arc<DynamicImage> {
    Arc::new(DynamicImage::ImageRgb8(ImageBuffer::new(64, 64)))
}

fn idle_with_image(image: Arc<DynamicImage>) -> State {
    let (state, _) = init();
    State {
        selected_image: Some(image),
        prediction_text: "Prediction: Cat with 80% confidence.".to_string(),
        ..state
    }
}

fn storage_error() -> StorageError {
    StorageError::CreateDirectory {
        path: PathBuf::from("Cat"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
}

#[test]
fn test_init() {
    let (state, effects) = init();

    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(state.prediction_text, NO_PREDICTION);
    assert!(state.selected_image.is_none());
    assert_eq!(effects, vec![Effect::SubscribeUserInput]);
}

#[test]
fn test_pick_and_classify_flow() {
    let config = Config::default();
    let (state, _) = init();
    let image = black_image();

    let (state, effects) = transition(&config, state, Event::UserAction(UserAction::PickImage));
    assert_eq!(state.activity, Activity::Picking);
    assert_eq!(effects, vec![Effect::PickImage]);

    let (state, effects) = transition(
        &config,
        state,
        Event::PickDone(Ok(PickOutcome::Picked(image.clone()))),
    );
    assert_eq!(state.activity, Activity::Classifying);
    assert_eq!(state.prediction_text, CLASSIFYING);
    assert_eq!(effects, vec![Effect::Classify { image: image.clone() }]);

    let prediction = Prediction {
        label: Label::Cat,
        confidence_percent: 80,
    };
    let (state, effects) = transition(&config, state, Event::ClassifyDone(Ok(prediction)));
    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(state.prediction_text, "Prediction: Cat with 80% confidence.");
    assert_eq!(state.selected_image, Some(image));
    assert!(effects.is_empty());
}

#[test]
fn test_cancelled_pick_keeps_previous_selection() {
    let config = Config::default();
    let image = black_image();
    let state = State {
        activity: Activity::Picking,
        ..idle_with_image(image.clone())
    };

    let (state, effects) = transition(&config, state, Event::PickDone(Ok(PickOutcome::Cancelled)));

    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(state.selected_image, Some(image));
    assert_eq!(state.prediction_text, "Prediction: Cat with 80% confidence.");
    assert!(effects.is_empty());
}

#[test]
fn test_requests_are_ignored_while_busy() {
    let config = Config::default();
    let image = black_image();

    for activity in [
        Activity::Picking,
        Activity::Classifying,
        Activity::Saving,
        Activity::Exporting,
    ] {
        let state = State {
            activity,
            ..idle_with_image(image.clone())
        };

        for action in [
            UserAction::PickImage,
            UserAction::ConfirmLabel(Label::Dog),
            UserAction::ExportDataset,
        ] {
            let (next, effects) =
                transition(&config, state.clone(), Event::UserAction(action));
            assert_eq!(next, state);
            assert!(effects.is_empty());
        }
    }
}

#[test]
fn test_quit_is_accepted_while_busy() {
    let config = Config::default();
    let state = State {
        activity: Activity::Classifying,
        ..idle_with_image(black_image())
    };

    let (state, effects) = transition(&config, state, Event::UserAction(UserAction::Quit));

    assert!(state.quit);
    assert!(effects.is_empty());
}

#[test]
fn test_classify_error_replaces_prediction_with_status() {
    let config = Config::default();
    let state = State {
        activity: Activity::Classifying,
        ..idle_with_image(black_image())
    };
    let error = ClassifyError::Model(ModelError::Load {
        path: "model.onnx".to_string(),
        reason: "missing".to_string(),
    });

    let (state, _) = transition(&config, state, Event::ClassifyDone(Err(error)));

    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(state.prediction_text, "Error: Unable to load model.");
}

#[test]
fn test_confirm_label_saves_selected_image() {
    let config = Config::default();
    let image = black_image();

    let (state, effects) = transition(
        &config,
        idle_with_image(image.clone()),
        Event::UserAction(UserAction::ConfirmLabel(Label::Dog)),
    );

    assert_eq!(state.activity, Activity::Saving);
    assert_eq!(
        effects,
        vec![Effect::SaveSample {
            image,
            label: Label::Dog
        }]
    );

    let (state, _) = transition(
        &config,
        state,
        Event::SaveDone {
            label: Label::Dog,
            result: Ok(PathBuf::from("Dog/A.png")),
        },
    );
    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(state.feedback_message.as_deref(), Some("Saved as Dog"));
}

#[test]
fn test_confirm_without_image_is_ignored() {
    let config = Config::default();
    let (state, _) = init();

    let (next, effects) = transition(
        &config,
        state.clone(),
        Event::UserAction(UserAction::ConfirmLabel(Label::Cat)),
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn test_save_failure_is_surfaced_by_default() {
    let config = Config::default();
    let state = State {
        activity: Activity::Saving,
        ..idle_with_image(black_image())
    };

    let (state, _) = transition(
        &config,
        state,
        Event::SaveDone {
            label: Label::Cat,
            result: Err(storage_error()),
        },
    );

    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(
        state.feedback_message.as_deref(),
        Some("Error: Unable to save image as Cat.")
    );
}

#[test]
fn test_save_failure_can_be_log_only() {
    let config = Config {
        storage_failure_policy: StorageFailurePolicy::LogOnly,
        ..Config::default()
    };
    let state = State {
        activity: Activity::Saving,
        ..idle_with_image(black_image())
    };

    let (state, _) = transition(
        &config,
        state,
        Event::SaveDone {
            label: Label::Cat,
            result: Err(storage_error()),
        },
    );

    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(state.feedback_message, None);
}

#[test]
fn test_export_flow() {
    let config = Config::default();
    let (state, _) = init();

    let (state, effects) =
        transition(&config, state, Event::UserAction(UserAction::ExportDataset));
    assert_eq!(state.activity, Activity::Exporting);
    assert_eq!(effects, vec![Effect::ExportDataset]);

    let report = ExportReport {
        train: 8,
        validation: 2,
        removed: 0,
    };
    let (state, _) = transition(&config, state, Event::ExportDone(Ok(report)));
    assert_eq!(state.activity, Activity::Idle);
    assert_eq!(
        state.feedback_message.as_deref(),
        Some("Exported 8 training and 2 validation images.")
    );

    let (state, _) = transition(
        &config,
        State {
            activity: Activity::Exporting,
            ..state
        },
        Event::ExportDone(Err(DatasetError::InvalidFraction(2.0))),
    );
    assert_eq!(
        state.feedback_message.as_deref(),
        Some("Error: Unable to export dataset.")
    );
}

#[test]
fn test_view_without_image() {
    let (state, _) = init();

    let view = view(&state);

    assert_eq!(view.image_caption, NO_IMAGE);
    assert_eq!(view.prediction, NO_PREDICTION);
    assert!(!view.show_feedback);
    assert!(!view.busy);
}

#[test]
fn test_view_with_image_shows_feedback_prompt() {
    let state = idle_with_image(black_image());

    let view = view(&state);

    assert_eq!(view.image_caption, "Image: 64x64");
    assert!(view.show_feedback);
    assert!(view.image.is_some());
}

#[test]
fn test_view_is_busy_while_waiting() {
    let state = State {
        activity: Activity::Saving,
        ..idle_with_image(black_image())
    };

    assert!(view(&state).busy);
}
