// SPDX-License-Identifier: MPL-2.0
//! Scenario tests for the lightbox controller.

use super::*;
use crate::application::port::{ImageVariant, Region, BODY_OPENED_CLASS, STAGE_IDLE_CLASS};
use crate::config::HideControlsAfter;
use crate::diagnostics::{Diagnostic, ValueKind};
use crate::error::Error;
use crate::test_utils::{FakePlatform, PortEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn abc() -> Collection {
    Collection::new(vec![
        Item::new("A", "https://example.com/a.jpg"),
        Item::new("B", "https://example.com/b.jpg?size=large"),
        Item::new("C", "/photos/c.png"),
    ])
}

fn id(value: &str) -> ItemId {
    ItemId::from(value)
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn current_id(lightbox: &Lightbox) -> Option<&str> {
    lightbox.current().map(|item| item.id.as_str())
}

/// Collects every `onSlideChange` payload.
fn recording_callbacks() -> (RawCallbacks, Rc<RefCell<Vec<SlideChange>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let callbacks = RawCallbacks::default().on_slide_change(RawCallback::new(
        move |change: &SlideChange| sink.borrow_mut().push(change.clone()),
    ));
    (callbacks, changes)
}

#[test]
fn abc_scenario_wraps_in_both_directions() {
    let fake = FakePlatform::new();
    let (callbacks, changes) = recording_callbacks();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("B")
        .callbacks(callbacks)
        .open(Instant::now());

    lightbox.select_next(&id("B")).unwrap();
    assert_eq!(current_id(&lightbox), Some("C"));
    assert_eq!(lightbox.direction(), Direction::Forward);

    lightbox.select_next(&id("C")).unwrap();
    assert_eq!(current_id(&lightbox), Some("A"));
    assert_eq!(lightbox.direction(), Direction::Forward);

    lightbox.select_previous(&id("A")).unwrap();
    assert_eq!(current_id(&lightbox), Some("C"));
    assert_eq!(lightbox.direction(), Direction::Backward);

    let reported: Vec<(SlideAction, usize)> = changes
        .borrow()
        .iter()
        .map(|change| (change.action, change.index))
        .collect();
    assert_eq!(
        reported,
        vec![
            (SlideAction::Right, 2),
            (SlideAction::Right, 0),
            (SlideAction::Left, 2),
        ]
    );
}

#[test]
fn select_item_reports_selected_action_and_neighbours() {
    let fake = FakePlatform::new();
    let (callbacks, changes) = recording_callbacks();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .callbacks(callbacks)
        .open(Instant::now());

    lightbox.select_item(&id("B")).unwrap();

    assert_eq!(lightbox.direction(), Direction::Forward);
    let changes = changes.borrow();
    let change = &changes[0];
    assert_eq!(change.action, SlideAction::Selected);
    assert_eq!(change.index, 1);
    assert_eq!(change.slides.previous.as_ref().map(|i| i.id.as_str()), Some("A"));
    assert_eq!(change.slides.current.id, id("B"));
    assert_eq!(change.slides.next.as_ref().map(|i| i.id.as_str()), Some("C"));
}

#[test]
fn selecting_the_current_item_has_no_direction() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("B")
        .open(Instant::now());

    lightbox.select_item(&id("B")).unwrap();
    assert_eq!(lightbox.direction(), Direction::None);

    lightbox.select_item(&id("A")).unwrap();
    assert_eq!(lightbox.direction(), Direction::Backward);
}

#[test]
fn absent_identifier_changes_nothing() {
    let fake = FakePlatform::new();
    let (callbacks, changes) = recording_callbacks();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("B")
        .callbacks(callbacks)
        .open(Instant::now());
    lightbox.set_zoom(true);

    let result = lightbox.select_item(&id("Z"));

    assert!(matches!(result, Err(Error::ItemNotFound(missing)) if missing == id("Z")));
    assert_eq!(current_id(&lightbox), Some("B"));
    assert!(lightbox.interaction().zoom);
    assert!(changes.borrow().is_empty());
}

#[test]
fn every_navigation_disables_zoom() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());

    lightbox.set_zoom(true);
    lightbox.next().unwrap();
    assert!(!lightbox.interaction().zoom);

    lightbox.set_zoom(true);
    lightbox.previous().unwrap();
    assert!(!lightbox.interaction().zoom);

    lightbox.set_zoom(true);
    lightbox.select_item(&id("C")).unwrap();
    assert!(!lightbox.interaction().zoom);

    lightbox.select_item(&id("A")).unwrap();
    assert!(!lightbox.interaction().zoom);
    assert_eq!(fake.zoom.live(), 0);
}

#[test]
fn zoom_disposed_once_per_cycle_and_on_unmount() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());

    lightbox.set_zoom(true);
    assert_eq!(fake.zoom.live(), 1);
    lightbox.set_zoom(false);
    assert_eq!(fake.zoom.live(), 0);

    lightbox.set_zoom(true);
    lightbox.unmount();
    lightbox.unmount();
    drop(lightbox);

    assert_eq!(
        fake.journal
            .count(|e| matches!(e, PortEvent::ZoomAttached(..))),
        2
    );
    assert_eq!(
        fake.journal
            .count(|e| matches!(e, PortEvent::ZoomDisposed(_))),
        2
    );
}

#[test]
fn zoom_is_noop_when_panzoom_disabled() {
    let mut options = Options::default();
    options.settings.disable_panzoom = true;
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .options(options)
        .selected("A")
        .open(Instant::now());

    lightbox.set_zoom(true);
    assert!(!lightbox.interaction().zoom);
    assert_eq!(fake.zoom.live(), 0);
}

#[test]
fn autoplay_ticks_advance_until_stopped() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());
    let start = Instant::now();

    lightbox.set_autoplay(true);
    assert_eq!(fake.timer.started(), vec![ms(3_000)]);

    lightbox.autoplay_tick(start + ms(3_000));
    assert_eq!(current_id(&lightbox), Some("B"));
    lightbox.autoplay_tick(start + ms(6_000));
    assert_eq!(current_id(&lightbox), Some("C"));

    lightbox.set_autoplay(false);
    assert_eq!(fake.timer.live(), 0);
    lightbox.autoplay_tick(start + ms(9_000));
    assert_eq!(current_id(&lightbox), Some("C"));
}

#[test]
fn autoplay_uses_configured_speed_and_survives_zoom() {
    let mut options = Options::default();
    options.settings.autoplay_speed = 1_500;
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .options(options)
        .selected("A")
        .open(Instant::now());

    lightbox.set_autoplay(true);
    lightbox.set_zoom(true);
    assert!(lightbox.interaction().autoplay);
    assert_eq!(fake.timer.started(), vec![ms(1_500)]);
    assert_eq!(fake.timer.live(), 1);
}

#[test]
fn keys_within_window_coalesce_to_last() {
    let fake = FakePlatform::new();
    let (callbacks, changes) = recording_callbacks();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("B")
        .callbacks(callbacks)
        .open(Instant::now());
    let start = Instant::now();

    lightbox.key_pressed(Key::ArrowRight, start);
    lightbox.key_pressed(Key::ArrowRight, start + ms(100));
    lightbox.key_pressed(Key::ArrowLeft, start + ms(200));
    assert_eq!(lightbox.tick(start + ms(250)), Effect::None);
    assert!(changes.borrow().is_empty());

    lightbox.tick(start + ms(500));
    assert_eq!(current_id(&lightbox), Some("A"));
    assert_eq!(changes.borrow().len(), 1);

    lightbox.tick(start + ms(1_000));
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn up_and_down_arrows_navigate() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());
    let start = Instant::now();

    lightbox.key_pressed(Key::ArrowUp, start);
    lightbox.tick(start + ms(300));
    assert_eq!(current_id(&lightbox), Some("B"));

    lightbox.key_pressed(Key::ArrowDown, start + ms(400));
    lightbox.tick(start + ms(700));
    assert_eq!(current_id(&lightbox), Some("A"));

    lightbox.key_pressed(Key::from_name("Enter"), start + ms(800));
    lightbox.tick(start + ms(1_100));
    assert_eq!(current_id(&lightbox), Some("A"));
}

#[test]
fn escape_closes_after_settling() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());
    let start = Instant::now();

    lightbox.key_pressed(Key::Escape, start);
    assert_eq!(lightbox.tick(start + ms(300)), Effect::Closed);
    assert!(!lightbox.is_open());
    assert_eq!(fake.store.dispatched(), vec![StoreAction::CloseLightbox]);
    assert_eq!(fake.keyboard.live(), 0);
}

#[test]
fn keyboard_disabled_ignores_keys() {
    let mut options = Options::default();
    options.settings.disable_keyboard_controls = true;
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .options(options)
        .selected("A")
        .open(Instant::now());
    let start = Instant::now();

    assert!(!lightbox.keyboard_active());
    lightbox.key_pressed(Key::ArrowRight, start);
    lightbox.tick(start + ms(500));
    assert_eq!(current_id(&lightbox), Some("A"));
}

#[test]
fn idle_toggles_the_stage_class() {
    let fake = FakePlatform::new();
    let start = Instant::now();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(start);

    lightbox.tick(start + ms(2_000));
    assert!(!fake.stage.has_class(Region::Stage, STAGE_IDLE_CLASS));

    lightbox.tick(start + ms(3_000));
    assert!(lightbox.interaction().idle);
    assert!(fake.stage.has_class(Region::Stage, STAGE_IDLE_CLASS));

    lightbox.record_activity(start + ms(3_500));
    assert!(!lightbox.interaction().idle);
    assert!(!fake.stage.has_class(Region::Stage, STAGE_IDLE_CLASS));
}

#[test]
fn sub_second_idle_threshold_never_idles() {
    let mut options = Options::default();
    options.settings.hide_controls_after = HideControlsAfter::Millis(500);
    let fake = FakePlatform::new();
    let start = Instant::now();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .options(options)
        .selected("A")
        .open(start);

    for seconds in 1..=600 {
        lightbox.tick(start + Duration::from_secs(seconds));
    }
    assert!(!lightbox.interaction().idle);
    assert!(!fake.stage.has_class(Region::Stage, STAGE_IDLE_CLASS));
}

#[test]
fn disabled_idle_never_touches_the_stage_class() {
    let mut options = Options::default();
    options.settings.hide_controls_after = HideControlsAfter::Enabled(false);
    let fake = FakePlatform::new();
    let start = Instant::now();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .options(options)
        .selected("A")
        .open(start);

    lightbox.tick(start + Duration::from_secs(3_600));
    assert_eq!(
        fake.journal.count(|e| matches!(
            e,
            PortEvent::ClassSet {
                region: Region::Stage,
                ..
            }
        )),
        0
    );
}

#[test]
fn string_slide_change_callback_is_reported_not_invoked() {
    let fake = FakePlatform::new();
    let diagnostics = Diagnostics::default();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .diagnostics(diagnostics.clone())
        .callbacks(
            RawCallbacks::default()
                .on_slide_change(RawCallback::not_callable(ValueKind::String)),
        )
        .open(Instant::now());

    lightbox.next().unwrap();
    lightbox.next().unwrap();

    assert_eq!(
        diagnostics.snapshot(),
        vec![Diagnostic::CallbackNotCallable {
            callback: "onSlideChange",
            received: ValueKind::String,
        }]
    );
    assert_eq!(
        diagnostics.snapshot()[0].to_string(),
        r#"you are not passing a function in your "onSlideChange" callback! You are passing a string."#
    );
}

#[test]
fn open_reports_once_and_close_reports_current() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let counts = Rc::new(RefCell::new(Vec::new()));
    let (opened, closed, counted) = (Rc::clone(&events), Rc::clone(&events), Rc::clone(&counts));
    let callbacks = RawCallbacks::default()
        .on_lightbox_opened(RawCallback::new(move |event: &LightboxEvent| {
            opened.borrow_mut().push(event.clone());
        }))
        .on_lightbox_closed(RawCallback::new(move |event: &LightboxEvent| {
            closed.borrow_mut().push(event.clone());
        }))
        .on_count_slides(RawCallback::new(move |count: &SlideCount| {
            counted.borrow_mut().push(count.total_slide);
        }));

    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("B")
        .callbacks(callbacks)
        .open(Instant::now());
    lightbox.next().unwrap();
    lightbox.close();
    lightbox.close();

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(events[0].opened);
    assert_eq!(events[0].current_slide.as_ref().map(|i| i.id.as_str()), Some("B"));
    assert!(!events[1].opened);
    assert_eq!(events[1].current_slide.as_ref().map(|i| i.id.as_str()), Some("C"));
    assert_eq!(*counts.borrow(), vec![3]);
    assert_eq!(fake.store.dispatched(), vec![StoreAction::CloseLightbox]);
}

#[test]
fn closed_lightbox_ignores_navigation_and_zoom() {
    let fake = FakePlatform::new();
    let (callbacks, changes) = recording_callbacks();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .callbacks(callbacks)
        .open(Instant::now());
    lightbox.close();

    assert!(lightbox.select_next(&id("A")).is_ok());
    assert!(lightbox.select_previous(&id("A")).is_ok());
    assert!(lightbox.select_item(&id("C")).is_ok());
    lightbox.next().unwrap();
    lightbox.set_zoom(true);

    assert_eq!(current_id(&lightbox), Some("A"));
    assert!(changes.borrow().is_empty());
    assert!(!lightbox.interaction().zoom);
    assert_eq!(
        fake.journal
            .count(|event| matches!(event, PortEvent::ZoomAttached(..))),
        0
    );
    assert!(!lightbox.is_open());
}

#[test]
fn missing_selection_defaults_to_first_item_silently() {
    let fake = FakePlatform::new();
    let (callbacks, changes) = recording_callbacks();
    let lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("unknown")
        .callbacks(callbacks)
        .open(Instant::now());

    assert_eq!(current_id(&lightbox), Some("A"));
    assert_eq!(lightbox.direction(), Direction::None);
    assert!(changes.borrow().is_empty());
}

#[test]
fn mount_locks_scroll_and_unmount_restores_it() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());

    assert!(fake.stage.has_class(Region::Body, BODY_OPENED_CLASS));
    assert!(!fake.stage.page_scroll_enabled());
    assert_eq!(fake.keyboard.live(), 1);

    lightbox.next().unwrap();
    assert_eq!(fake.keyboard.live(), 1);

    drop(lightbox);
    assert!(!fake.stage.has_class(Region::Body, BODY_OPENED_CLASS));
    assert!(fake.stage.page_scroll_enabled());
    assert_eq!(fake.keyboard.live(), 0);
}

#[test]
fn unmount_cancels_autoplay_and_keys() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());
    let start = Instant::now();

    lightbox.set_autoplay(true);
    lightbox.key_pressed(Key::ArrowRight, start);
    lightbox.unmount();

    assert_eq!(fake.timer.live(), 0);
    lightbox.tick(start + ms(500));
    lightbox.autoplay_tick(start + ms(3_000));
    assert_eq!(current_id(&lightbox), Some("A"));

    lightbox.set_autoplay(true);
    assert_eq!(fake.timer.started().len(), 1);
}

#[test]
fn fullscreen_stops_autoplay_and_targets_variant() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());

    lightbox.set_autoplay(true);
    lightbox.set_zoom(true);
    lightbox.request_fullscreen();

    assert!(!lightbox.interaction().autoplay);
    assert_eq!(fake.timer.live(), 0);
    let requests = fake.fullscreen.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].variant, ImageVariant::Zoomed);
}

#[test]
fn unsupported_fullscreen_is_silent() {
    let fake = FakePlatform::with_fullscreen(false);
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());

    lightbox.request_fullscreen();
    assert!(fake.fullscreen.requests().is_empty());
    assert!(lightbox.is_open());
}

#[test]
fn download_suggests_file_name() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("B")
        .open(Instant::now());

    let Effect::Download(request) = lightbox.update(Message::Download) else {
        panic!("expected a download request");
    };
    assert_eq!(request.file_name, "b.jpg");
    assert_eq!(request.source, "https://example.com/b.jpg?size=large");

    lightbox.select_item(&id("C")).unwrap();
    assert_eq!(lightbox.download().map(|r| r.file_name), Some("c.png".to_string()));
}

#[test]
fn replaced_collection_resolves_positions_by_identifier() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("B")
        .open(Instant::now());

    lightbox.set_collection(Collection::new(vec![
        Item::new("B", "b.jpg"),
        Item::new("D", "d.jpg"),
    ]));
    lightbox.next().unwrap();
    assert_eq!(current_id(&lightbox), Some("D"));
    assert_eq!(fake.keyboard.live(), 1);
}

#[test]
fn progress_bar_follows_autoplay() {
    let fake = FakePlatform::new();
    let start = Instant::now();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(start);

    assert!(!lightbox.controls(start).progress_bar_visible());

    lightbox.set_autoplay(true);
    lightbox.tick(start);
    let controls = lightbox.controls(start + ms(1_500));
    assert!(controls.progress_bar_visible());
    let fraction = controls.progress.map(AutoplayProgress::fraction).unwrap();
    assert!((fraction - 0.5).abs() < 1e-3);
    assert_eq!(controls.buttons.offset_from_progress_bar, "3px");
}

#[test]
fn hidden_progress_bar_stays_hidden() {
    let mut options = Options::default();
    options.progress_bar.show_progress_bar = false;
    let fake = FakePlatform::new();
    let start = Instant::now();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .options(options)
        .selected("A")
        .open(start);

    lightbox.set_autoplay(true);
    assert!(!lightbox.controls(start).progress_bar_visible());
}

#[test]
fn update_routes_messages() {
    let fake = FakePlatform::new();
    let mut lightbox = Lightbox::builder(abc(), fake.platform())
        .selected("A")
        .open(Instant::now());

    assert_eq!(lightbox.update(Message::Next), Effect::None);
    assert_eq!(current_id(&lightbox), Some("B"));
    assert_eq!(lightbox.update(Message::SelectItem(id("missing"))), Effect::None);
    assert_eq!(current_id(&lightbox), Some("B"));
    assert_eq!(lightbox.update(Message::Close), Effect::Closed);
}
