use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use keyboard_observer::{
    FrameChange, KEYBOARD_WILL_CHANGE_FRAME, KeyboardEvent, KeyboardObserver, ObserverOptions,
    Rect, ScrollViewHandle,
};

use crate::{NotificationCenter, Subscription};

/// A framework-neutral controller that owns a
/// [`keyboard_observer::KeyboardObserver`] and its subscription lifecycle.
///
/// The controller is where the subscribe/unsubscribe state machine lives:
/// `Unsubscribed -> Subscribed` via [`Self::subscribe`], back via
/// [`Self::unsubscribe`], and both transitions are no-ops when invoked from
/// the "wrong" state. Dropping the controller releases the registration, so
/// a host that forgets to unsubscribe cannot leave a dangling handler
/// behind.
pub struct Controller {
    observer: Arc<Mutex<KeyboardObserver>>,
    subscription: Option<Subscription>,
}

impl Controller {
    /// Creates a controller around a fresh observer with no bound view.
    pub fn new(options: ObserverOptions) -> Self {
        Self::from_observer(KeyboardObserver::new(options))
    }

    /// Creates a controller around a fresh observer bound to a scroll view.
    pub fn with_scroll_view(options: ObserverOptions, scroll_view: ScrollViewHandle) -> Self {
        Self::from_observer(KeyboardObserver::with_scroll_view(options, scroll_view))
    }

    pub fn from_observer(observer: KeyboardObserver) -> Self {
        Self {
            observer: Arc::new(Mutex::new(observer)),
            subscription: None,
        }
    }

    /// Runs `f` with exclusive access to the wrapped observer.
    pub fn with_observer<R>(&self, f: impl FnOnce(&mut KeyboardObserver) -> R) -> R {
        f(&mut self.lock())
    }

    /// Replaces the frame-change callback; passing `None` clears it.
    pub fn set_on_frame_change(
        &self,
        on_frame_change: Option<impl Fn(Rect, KeyboardEvent) + Send + Sync + 'static>,
    ) {
        self.lock().set_on_frame_change(on_frame_change);
    }

    /// Binds or unbinds the scrollable view whose bottom inset is adjusted.
    pub fn set_scroll_view(&self, scroll_view: Option<ScrollViewHandle>) {
        self.lock().set_scroll_view(scroll_view);
    }

    /// The most recently applied frame change, if any.
    pub fn last_change(&self) -> Option<FrameChange> {
        self.lock().last_change()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Registers for keyboard frame-change notifications on `center`.
    ///
    /// No-op when already subscribed: calling this twice without an
    /// intervening [`Self::unsubscribe`] keeps exactly one registration.
    pub fn subscribe(&mut self, center: &NotificationCenter) {
        if self.subscription.is_some() {
            return;
        }
        let observer = Arc::clone(&self.observer);
        self.subscription = Some(center.subscribe(KEYBOARD_WILL_CHANGE_FRAME, move |n| {
            observer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .handle_notification(n);
        }));
    }

    /// Releases the registration. Safe to call when never subscribed.
    pub fn unsubscribe(&mut self) {
        self.subscription = None;
    }

    fn lock(&self) -> MutexGuard<'_, KeyboardObserver> {
        // Plain data; a poisoned lock is still usable.
        self.observer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for Controller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("observer", &*self.lock())
            .field("is_subscribed", &self.is_subscribed())
            .finish()
    }
}
