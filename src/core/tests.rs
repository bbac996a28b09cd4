//! End-to-end scenarios across the core state types

use std::cell::Cell;

use crate::core::motion::{PARTICLE_COUNT, particles};
use crate::core::{
    DragScroll, Field, FloatMotion, MenuState, ModalPhase, PlaybackState, PredictionPanel,
    RegistrationDraft, RegistrationFlow, RegistrationForm, SubmitError, default_crops,
    default_markets, default_testimonials, reel_items,
};

/// Drive a flow the way the modal does: validate, call the handler once, apply its outcome
fn submit_with<F>(flow: &mut RegistrationFlow, handler: F) -> Option<RegistrationForm>
where
    F: FnOnce(&RegistrationForm) -> Result<(), SubmitError>,
{
    let form = flow.submit()?;
    let outcome = handler(&form);
    flow.finish(outcome);
    Some(form)
}

#[test]
fn test_reel_keys_unique_and_ordered() {
    let testimonials = default_testimonials();
    let items = reel_items(&testimonials);

    assert_eq!(items.len(), 2 * testimonials.len());

    let mut keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), items.len());

    for (item, testimonial) in items.iter().zip(&testimonials) {
        assert_eq!(item.testimonial.id, testimonial.id);
    }
}

#[test]
fn test_short_name_never_reaches_handler() {
    let calls = Cell::new(0);
    let mut flow = RegistrationFlow::opened();
    {
        let draft = flow.draft_mut();
        draft.name = "J".to_string();
        draft.email = "jane@example.com".to_string();
        draft.agree_to_terms = true;
    }

    let submitted = submit_with(&mut flow, |_| {
        calls.set(calls.get() + 1);
        Ok(())
    });

    assert!(submitted.is_none());
    assert_eq!(calls.get(), 0);
    assert_eq!(flow.phase(), ModalPhase::Open);
    assert_eq!(
        flow.errors().message(Field::Name).as_deref(),
        Some("Name must be at least 2 characters")
    );
}

#[test]
fn test_valid_registration_calls_handler_once_then_resets() {
    let calls = Cell::new(0);
    let mut flow = RegistrationFlow::opened();
    {
        let draft = flow.draft_mut();
        draft.name = "Jane Doe".to_string();
        draft.email = "jane@example.com".to_string();
        draft.agree_to_terms = true;
    }

    let submitted = submit_with(&mut flow, |form| {
        calls.set(calls.get() + 1);
        assert_eq!(form.name, "Jane Doe");
        Ok(())
    });

    assert!(submitted.is_some());
    assert_eq!(calls.get(), 1);
    assert_eq!(flow.phase(), ModalPhase::Closed);
    assert_eq!(flow.draft(), &RegistrationDraft::default());
    assert!(flow.errors().is_empty());
}

#[test]
fn test_rejected_registration_stays_open() {
    let mut flow = RegistrationFlow::opened();
    {
        let draft = flow.draft_mut();
        draft.name = "Jane Doe".to_string();
        draft.email = "jane@example.com".to_string();
        draft.agree_to_terms = true;
    }

    submit_with(&mut flow, |_| Err(SubmitError::Rejected("503".to_string())));

    assert_eq!(flow.phase(), ModalPhase::Open);
    assert!(flow.draft().agree_to_terms);
}

#[test]
fn test_menu_toggle_twice_is_closed() {
    let menu = MenuState::default().toggled().toggled();
    assert_eq!(menu, MenuState::Closed);
}

#[test]
fn test_prediction_generation_per_click() {
    let crops = default_crops();
    let markets = default_markets();
    let mut panel = PredictionPanel::new();

    panel.select_crop(&crops[0].id);
    panel.generate();
    assert!(!panel.shows_chart());

    panel.select_market(&markets[4].id);
    for expected in 1..=3 {
        assert!(panel.generate());
        assert_eq!(panel.generation(), expected);
    }
}

#[test]
fn test_play_toggle_controls_overlay() {
    let mut playback = PlaybackState::default();
    assert!(playback.overlay_visible());
    playback.toggle_play();
    assert!(!playback.overlay_visible());
    playback.toggle_play();
    assert!(playback.overlay_visible());
}

#[test]
fn test_drag_scroll_sequence() {
    let mut drag = DragScroll::default();
    drag.begin(50.0, 0.0);
    assert_eq!(drag.drag_to(20.0), Some(60.0));
    assert_eq!(drag.drag_to(10.0), Some(80.0));
    drag.end();
    assert_eq!(drag.drag_to(0.0), None);
}

#[test]
fn test_decorations_are_stable() {
    assert_eq!(particles().len(), PARTICLE_COUNT);
    assert_eq!(particles(), particles());

    let testimonials = default_testimonials();
    for item in reel_items(&testimonials) {
        let motion = FloatMotion::for_index(item.index);
        assert!((5.0..10.0).contains(&motion.amplitude));
        assert!((0.2..0.5).contains(&motion.speed));
    }
}
