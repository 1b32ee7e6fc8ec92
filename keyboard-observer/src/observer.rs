use alloc::sync::Arc;

use crate::{
    FRAME_BEGIN_KEY, FRAME_END_KEY, FrameChange, KeyboardEvent, Notification, ObserverOptions,
    Rect, ScrollViewHandle,
};

/// Classifies a keyboard frame change from its before/after rectangles.
///
/// The tie-break rules are exact:
/// - the top edge moved up (`dy > 0`) from a fully off-screen position
///   (`begin.min_y() >= screen_height`) → [`KeyboardEvent::WillShow`]
/// - the top edge moved down or stayed (`dy <= 0`) and ends fully off-screen
///   (`end.min_y() >= screen_height`) → [`KeyboardEvent::WillHide`]
/// - anything else → [`KeyboardEvent::JustChange`]
pub fn classify(begin: Rect, end: Rect, screen_height: f64) -> KeyboardEvent {
    let dy = begin.min_y() - end.min_y();
    if dy > 0.0 && begin.min_y() >= screen_height {
        KeyboardEvent::WillShow
    } else if dy <= 0.0 && end.min_y() >= screen_height {
        KeyboardEvent::WillHide
    } else {
        KeyboardEvent::JustChange
    }
}

/// Returns the bottom content inset that keeps content above the keyboard:
/// the screen remainder below the keyboard's top edge.
///
/// A keyboard resting at `screen_height` yields exactly 0; one resting below
/// it is clamped to 0 (a negative inset has no meaning for any host).
pub fn bottom_inset(end: Rect, screen_height: f64) -> f64 {
    (screen_height - end.min_y()).max(0.0)
}

/// A headless keyboard frame observer.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the scroll view is reached through the
///   [`crate::ScrollableView`] trait seam.
/// - An event source drives it by calling [`Self::handle_notification`].
///
/// For subscription wiring (notification center, RAII handles, controllers),
/// see the `keyboard-observer-adapter` crate.
#[derive(Clone)]
pub struct KeyboardObserver {
    options: ObserverOptions,
    scroll_view: Option<ScrollViewHandle>,
    last_change: Option<FrameChange>,
}

impl KeyboardObserver {
    /// Creates a new observer with no bound scroll view.
    pub fn new(options: ObserverOptions) -> Self {
        kdebug!(
            screen_height = options.screen_height,
            enabled = options.enabled,
            "KeyboardObserver::new"
        );
        Self {
            options,
            scroll_view: None,
            last_change: None,
        }
    }

    /// Creates a new observer bound to a scrollable view.
    pub fn with_scroll_view(options: ObserverOptions, scroll_view: ScrollViewHandle) -> Self {
        let mut observer = Self::new(options);
        observer.scroll_view = Some(scroll_view);
        observer
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ObserverOptions) {
        kdebug!(
            screen_height = options.screen_height,
            enabled = options.enabled,
            "KeyboardObserver::set_options"
        );
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ObserverOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    pub fn screen_height(&self) -> f64 {
        self.options.screen_height
    }

    pub fn set_screen_height(&mut self, screen_height: f64) {
        self.options.screen_height = screen_height;
    }

    /// Replaces the frame-change callback; passing `None` clears it.
    pub fn set_on_frame_change(
        &mut self,
        on_frame_change: Option<impl Fn(Rect, KeyboardEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_frame_change = on_frame_change.map(|f| Arc::new(f) as _);
    }

    /// Binds or unbinds the scrollable view whose bottom inset is adjusted.
    pub fn set_scroll_view(&mut self, scroll_view: Option<ScrollViewHandle>) {
        self.scroll_view = scroll_view;
    }

    pub fn scroll_view(&self) -> Option<&ScrollViewHandle> {
        self.scroll_view.as_ref()
    }

    /// The most recently applied frame change, if any.
    pub fn last_change(&self) -> Option<FrameChange> {
        self.last_change
    }

    /// Classifies a frame change against this observer's screen height.
    pub fn classify(&self, begin: Rect, end: Rect) -> KeyboardEvent {
        classify(begin, end, self.options.screen_height)
    }

    /// The bottom inset this observer would apply for a given end frame.
    pub fn bottom_inset_for(&self, end: Rect) -> f64 {
        bottom_inset(end, self.options.screen_height)
    }

    /// Handles a keyboard frame-change notification.
    ///
    /// Invoked by the event source, not by host code. Malformed payloads
    /// (either frame rectangle absent or mistyped) are dropped with no side
    /// effects. This method never fails visibly.
    pub fn handle_notification(&mut self, notification: &Notification) {
        if !self.options.enabled {
            return;
        }
        let Some(begin) = notification.rect(FRAME_BEGIN_KEY) else {
            return;
        };
        let Some(end) = notification.rect(FRAME_END_KEY) else {
            return;
        };

        let event = self.classify(begin, end);
        let inset = self.bottom_inset_for(end);
        ktrace!(
            begin_y = begin.min_y(),
            end_y = end.min_y(),
            event = ?event,
            inset,
            "handle_notification"
        );

        if let Some(view) = &self.scroll_view {
            view.set_bottom_inset(inset);
        }

        self.last_change = Some(FrameChange {
            frame: end,
            event,
            bottom_inset: inset,
        });

        if let Some(cb) = &self.options.on_frame_change {
            cb(end, event);
        }
    }
}

impl core::fmt::Debug for KeyboardObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardObserver")
            .field("options", &self.options)
            .field("has_scroll_view", &self.scroll_view.is_some())
            .field("last_change", &self.last_change)
            .finish()
    }
}
