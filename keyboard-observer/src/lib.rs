//! A headless on-screen keyboard frame observer.
//!
//! For host wiring (notification center, subscriptions, controllers), see the
//! `keyboard-observer-adapter` crate.
//!
//! This crate focuses on the core logic needed to keep scrollable content
//! visible above a mobile on-screen keyboard: classifying before/after frame
//! rectangles into show/hide/resize events and deriving the bottom content
//! inset that leaves the visible screen remainder uncovered.
//!
//! It is UI-agnostic. A host/adapter layer is expected to provide:
//! - the event source that delivers keyboard frame-change notifications
//! - the scrollable view whose bottom inset is adjusted (via [`ScrollableView`])
//! - the full device screen height in points
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod notification;
mod observer;
mod options;
mod scroll;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use notification::{
    FRAME_BEGIN_KEY, FRAME_END_KEY, KEYBOARD_WILL_CHANGE_FRAME, Notification, PayloadValue,
};
pub use observer::{KeyboardObserver, bottom_inset, classify};
pub use options::{ObserverOptions, OnFrameChangeCallback};
pub use scroll::{ScrollViewHandle, ScrollableView};
pub use state::FrameChange;
pub use types::{EdgeInsets, KeyboardEvent, Rect};
