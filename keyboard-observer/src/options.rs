use alloc::sync::Arc;

use crate::{KeyboardEvent, Rect};

/// A callback fired after a keyboard frame change has been applied.
///
/// The arguments are the keyboard's end frame and the derived event.
pub type OnFrameChangeCallback = Arc<dyn Fn(Rect, KeyboardEvent) + Send + Sync>;

/// Configuration for [`crate::KeyboardObserver`].
///
/// This type is designed to be cheap to clone: the callback is stored in an
/// `Arc` so hosts can tweak a field and call `set_options` without
/// reallocating closures.
pub struct ObserverOptions {
    /// Full device screen height in points (not the safe area).
    ///
    /// The classification rule compares keyboard frame tops against this
    /// value: a frame whose top edge is at or below it is off-screen.
    pub screen_height: f64,

    /// Enables/disables the observer. When disabled, notifications are
    /// ignored entirely.
    pub enabled: bool,

    /// Optional callback fired after each applied frame change.
    pub on_frame_change: Option<OnFrameChangeCallback>,
}

impl ObserverOptions {
    pub fn new(screen_height: f64) -> Self {
        Self {
            screen_height,
            enabled: true,
            on_frame_change: None,
        }
    }

    pub fn with_screen_height(mut self, screen_height: f64) -> Self {
        self.screen_height = screen_height;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_frame_change(
        mut self,
        on_frame_change: Option<impl Fn(Rect, KeyboardEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_frame_change = on_frame_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for ObserverOptions {
    fn clone(&self) -> Self {
        Self {
            screen_height: self.screen_height,
            enabled: self.enabled,
            on_frame_change: self.on_frame_change.clone(),
        }
    }
}

impl core::fmt::Debug for ObserverOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverOptions")
            .field("screen_height", &self.screen_height)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
