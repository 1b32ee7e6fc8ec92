use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const SCREEN: f64 = 800.0;

struct TestScrollView {
    inset: Mutex<f64>,
    writes: AtomicUsize,
}

impl TestScrollView {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            inset: Mutex::new(0.0),
            writes: AtomicUsize::new(0),
        })
    }

    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ScrollableView for TestScrollView {
    fn set_bottom_inset(&self, points: f64) {
        *self.inset.lock().unwrap() = points;
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    fn bottom_inset(&self) -> f64 {
        *self.inset.lock().unwrap()
    }
}

fn frame(y: f64) -> Rect {
    Rect::new(0.0, y, 320.0, 300.0)
}

#[test]
fn rising_from_offscreen_classifies_as_will_show() {
    assert_eq!(
        classify(frame(SCREEN), frame(500.0), SCREEN),
        KeyboardEvent::WillShow
    );
}

#[test]
fn sinking_below_screen_classifies_as_will_hide() {
    assert_eq!(
        classify(frame(500.0), frame(SCREEN), SCREEN),
        KeyboardEvent::WillHide
    );
}

#[test]
fn resize_while_visible_classifies_as_just_change() {
    // beginTop < screenHeight, so neither boundary rule matches.
    assert_eq!(
        classify(frame(500.0), frame(450.0), SCREEN),
        KeyboardEvent::JustChange
    );
}

#[test]
fn zero_dy_tie_breaks_on_end_position() {
    assert_eq!(
        classify(frame(500.0), frame(500.0), SCREEN),
        KeyboardEvent::JustChange
    );
    assert_eq!(
        classify(frame(SCREEN), frame(SCREEN), SCREEN),
        KeyboardEvent::WillHide
    );
}

#[test]
fn bottom_inset_is_screen_remainder_below_keyboard_top() {
    assert_eq!(bottom_inset(frame(500.0), SCREEN), 300.0);
    assert_eq!(bottom_inset(frame(SCREEN), SCREEN), 0.0);
}

#[test]
fn bottom_inset_clamps_when_keyboard_rests_below_screen() {
    assert_eq!(bottom_inset(frame(850.0), SCREEN), 0.0);
}

#[test]
fn show_notification_sets_inset_and_fires_callback() {
    let view = TestScrollView::new();
    let seen = Arc::new(Mutex::new(None));
    let seen2 = Arc::clone(&seen);

    let options = ObserverOptions::new(SCREEN).with_on_frame_change(Some(move |frame, event| {
        *seen2.lock().unwrap() = Some((frame, event));
    }));
    let mut observer = KeyboardObserver::with_scroll_view(options, view.clone());

    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));

    assert_eq!(view.bottom_inset(), 300.0);
    assert_eq!(
        *seen.lock().unwrap(),
        Some((frame(500.0), KeyboardEvent::WillShow))
    );
}

#[test]
fn hide_notification_resets_inset_to_zero() {
    let view = TestScrollView::new();
    let mut observer =
        KeyboardObserver::with_scroll_view(ObserverOptions::new(SCREEN), view.clone());

    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));
    assert_eq!(view.bottom_inset(), 300.0);

    observer.handle_notification(&Notification::will_change_frame(frame(500.0), frame(SCREEN)));
    assert_eq!(view.bottom_inset(), 0.0);
}

#[test]
fn resize_notification_updates_inset_in_place() {
    let view = TestScrollView::new();
    let mut observer =
        KeyboardObserver::with_scroll_view(ObserverOptions::new(SCREEN), view.clone());

    observer.handle_notification(&Notification::will_change_frame(frame(500.0), frame(450.0)));
    assert_eq!(view.bottom_inset(), 350.0);
    assert_eq!(
        observer.last_change().map(|c| c.event),
        Some(KeyboardEvent::JustChange)
    );
}

#[test]
fn missing_end_frame_is_dropped_without_side_effects() {
    let view = TestScrollView::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let fired2 = Arc::clone(&fired);

    let options = ObserverOptions::new(SCREEN).with_on_frame_change(Some(move |_, _| {
        fired2.fetch_add(1, Ordering::SeqCst);
    }));
    let mut observer = KeyboardObserver::with_scroll_view(options, view.clone());

    let malformed =
        Notification::new(KEYBOARD_WILL_CHANGE_FRAME).with_value(FRAME_BEGIN_KEY, frame(SCREEN));
    observer.handle_notification(&malformed);

    assert_eq!(view.writes(), 0);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(observer.last_change().is_none());
}

#[test]
fn mistyped_frame_value_is_dropped_the_same_way() {
    let view = TestScrollView::new();
    let mut observer =
        KeyboardObserver::with_scroll_view(ObserverOptions::new(SCREEN), view.clone());

    let malformed = Notification::new(KEYBOARD_WILL_CHANGE_FRAME)
        .with_value(FRAME_BEGIN_KEY, frame(SCREEN))
        .with_value(FRAME_END_KEY, 500.0);
    observer.handle_notification(&malformed);

    assert_eq!(view.writes(), 0);
    assert!(observer.last_change().is_none());
}

#[test]
fn unbound_view_still_fires_callback() {
    let seen = Arc::new(Mutex::new(None));
    let seen2 = Arc::clone(&seen);

    let options = ObserverOptions::new(SCREEN).with_on_frame_change(Some(move |frame, event| {
        *seen2.lock().unwrap() = Some((frame, event));
    }));
    let mut observer = KeyboardObserver::new(options);

    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));

    assert_eq!(
        *seen.lock().unwrap(),
        Some((frame(500.0), KeyboardEvent::WillShow))
    );
}

#[test]
fn replacing_the_callback_retires_the_previous_one() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let first2 = Arc::clone(&first);
    let second2 = Arc::clone(&second);

    let mut observer = KeyboardObserver::new(ObserverOptions::new(SCREEN));
    observer.set_on_frame_change(Some(move |_, _| {
        first2.fetch_add(1, Ordering::SeqCst);
    }));
    observer.set_on_frame_change(Some(move |_, _| {
        second2.fetch_add(1, Ordering::SeqCst);
    }));

    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn clearing_the_callback_keeps_the_inset_side_effect() {
    let view = TestScrollView::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let fired2 = Arc::clone(&fired);

    let options = ObserverOptions::new(SCREEN).with_on_frame_change(Some(move |_, _| {
        fired2.fetch_add(1, Ordering::SeqCst);
    }));
    let mut observer = KeyboardObserver::with_scroll_view(options, view.clone());
    observer.set_on_frame_change(None::<fn(Rect, KeyboardEvent)>);

    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert_eq!(view.bottom_inset(), 300.0);
}

#[test]
fn disabled_observer_ignores_valid_notifications() {
    let view = TestScrollView::new();
    let mut observer =
        KeyboardObserver::with_scroll_view(ObserverOptions::new(SCREEN), view.clone());
    observer.set_enabled(false);

    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));
    assert_eq!(view.writes(), 0);
    assert!(observer.last_change().is_none());

    observer.set_enabled(true);
    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));
    assert_eq!(view.bottom_inset(), 300.0);
}

#[test]
fn last_change_tracks_the_latest_notification() {
    let mut observer = KeyboardObserver::new(ObserverOptions::new(SCREEN));

    observer.handle_notification(&Notification::will_change_frame(frame(SCREEN), frame(500.0)));
    observer.handle_notification(&Notification::will_change_frame(frame(500.0), frame(SCREEN)));

    let change = observer.last_change().unwrap();
    assert_eq!(change.frame, frame(SCREEN));
    assert_eq!(change.event, KeyboardEvent::WillHide);
    assert_eq!(change.bottom_inset, 0.0);
}

#[test]
fn update_options_can_retune_screen_height() {
    let mut observer = KeyboardObserver::new(ObserverOptions::new(SCREEN));
    observer.update_options(|o| o.screen_height = 900.0);

    assert_eq!(observer.screen_height(), 900.0);
    assert_eq!(observer.bottom_inset_for(frame(500.0)), 400.0);
    // 800 is now on-screen, so the same geometry reads as a resize.
    assert_eq!(
        observer.classify(frame(SCREEN), frame(500.0)),
        KeyboardEvent::JustChange
    );
}

#[test]
fn rect_edges_and_payload_accessors() {
    let r = Rect::new(0.0, 500.0, 320.0, 300.0);
    assert_eq!(r.min_y(), 500.0);
    assert_eq!(r.max_y(), 800.0);

    let n = Notification::will_change_frame(frame(SCREEN), frame(500.0));
    assert_eq!(n.name(), KEYBOARD_WILL_CHANGE_FRAME);
    assert_eq!(n.rect(FRAME_BEGIN_KEY), Some(frame(SCREEN)));
    assert_eq!(n.rect("SomethingElse"), None);

    let insets = EdgeInsets::ZERO.with_bottom(12.5);
    assert_eq!(insets, EdgeInsets::bottom(12.5));
    assert_eq!(insets.top, 0.0);
}
