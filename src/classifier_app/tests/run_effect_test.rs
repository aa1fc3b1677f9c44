use crate::classifier_app::core::{Effect, Event};
use crate::classifier_app::render::NO_IMAGE;
use crate::classifier_app::tests::fixture::{Fixture, FixtureOptions};
use crate::feedback_store::impl_fake::FeedbackStoreFake;
use crate::image_classifier::decision::Label;
use crate::image_picker::impl_fake::ImagePickerFake;
use crate::image_picker::interface::PickOutcome;
use crate::user_input::interface::UserAction;
use image::{DynamicImage, ImageBuffer};
use std::sync::Arc;

fn black_image() -> Arc<DynamicImage> {
    Arc::new(DynamicImage::ImageRgb8(ImageBuffer::new(64, 64)))
}

#[test]
fn test_pick_effect_returns_picked_image() {
    let f = Fixture::new();

    let event = f.app.run_effect(Effect::PickImage);

    match event {
        Some(Event::PickDone(Ok(PickOutcome::Picked(image)))) => {
            assert_eq!((image.width(), image.height()), (64, 64));
        }
        other => panic!("Unexpected event: {:?}", other.map(|e| e.to_display_string())),
    }
}

#[test]
fn test_cancelling_picker() {
    let f = Fixture::with_options(FixtureOptions {
        picker: ImagePickerFake::cancelling(),
        ..FixtureOptions::default()
    });

    let event = f.app.run_effect(Effect::PickImage);

    assert!(matches!(
        event,
        Some(Event::PickDone(Ok(PickOutcome::Cancelled)))
    ));
}

#[test]
fn test_classify_effect_formats_prediction() {
    let f = Fixture::new();

    let event = f.app.run_effect(Effect::Classify {
        image: black_image(),
    });

    match event {
        Some(Event::ClassifyDone(Ok(prediction))) => {
            assert_eq!(
                prediction.to_string(),
                "Prediction: Cat with 80% confidence."
            );
        }
        other => panic!("Unexpected event: {:?}", other.map(|e| e.to_display_string())),
    }
}

#[test]
fn test_save_effect_writes_to_store() {
    let f = Fixture::new();

    let event = f.app.run_effect(Effect::SaveSample {
        image: black_image(),
        label: Label::Dog,
    });

    assert!(matches!(
        event,
        Some(Event::SaveDone {
            label: Label::Dog,
            result: Ok(_)
        })
    ));
    assert_eq!(*f.feedback_store.saved.lock().unwrap(), vec![Label::Dog]);
}

#[test]
fn test_save_failure_is_always_logged() {
    let f = Fixture::with_options(FixtureOptions {
        feedback_store: FeedbackStoreFake::failing(),
        ..FixtureOptions::default()
    });

    let event = f.app.run_effect(Effect::SaveSample {
        image: black_image(),
        label: Label::Cat,
    });

    assert!(matches!(
        event,
        Some(Event::SaveDone {
            result: Err(_),
            ..
        })
    ));
    let errors = f.logger.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Failed to save image as Cat"));
}

#[test]
fn test_run_stops_on_quit_and_renders() {
    let f = Fixture::with_options(FixtureOptions {
        script: vec![UserAction::Quit],
        ..FixtureOptions::default()
    });

    f.app.run().unwrap();

    let views = f.screen.views.lock().unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].image_caption, NO_IMAGE);
    assert!(views[1].should_close);
}

#[test]
fn test_full_flow_through_effects() {
    let f = Fixture::new();
    let (mut state, _) = crate::classifier_app::core::init();

    let mut pending = vec![Event::UserAction(UserAction::PickImage)];
    while let Some(event) = pending.pop() {
        let (next, effects) =
            crate::classifier_app::core::transition(&f.config, state, event);
        state = next;
        for effect in effects {
            pending.extend(f.app.run_effect(effect));
        }
    }
    assert_eq!(state.prediction_text, "Prediction: Cat with 80% confidence.");

    let mut pending = vec![Event::UserAction(UserAction::ConfirmLabel(Label::Cat))];
    while let Some(event) = pending.pop() {
        let (next, effects) =
            crate::classifier_app::core::transition(&f.config, state, event);
        state = next;
        for effect in effects {
            pending.extend(f.app.run_effect(effect));
        }
    }
    assert_eq!(state.feedback_message.as_deref(), Some("Saved as Cat"));
    assert_eq!(*f.feedback_store.saved.lock().unwrap(), vec![Label::Cat]);
}
