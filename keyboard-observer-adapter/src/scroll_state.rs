use std::sync::{Mutex, PoisonError};

use keyboard_observer::{EdgeInsets, ScrollableView};

/// A thread-safe [`ScrollableView`] backed by an [`EdgeInsets`] value.
///
/// Hosts that mirror content insets into a real toolkit can poll
/// [`Self::insets`] after each notification; tests use it to observe the
/// inset side effect. Wrap it in an `Arc` to use it as a
/// [`keyboard_observer::ScrollViewHandle`].
#[derive(Default)]
pub struct SharedScrollView {
    insets: Mutex<EdgeInsets>,
}

impl SharedScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insets(insets: EdgeInsets) -> Self {
        Self {
            insets: Mutex::new(insets),
        }
    }

    /// The current content insets.
    pub fn insets(&self) -> EdgeInsets {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EdgeInsets> {
        self.insets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScrollableView for SharedScrollView {
    fn set_bottom_inset(&self, points: f64) {
        self.lock().bottom = points;
    }

    fn bottom_inset(&self) -> f64 {
        self.lock().bottom
    }
}

impl core::fmt::Debug for SharedScrollView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedScrollView")
            .field("insets", &self.insets())
            .finish()
    }
}
