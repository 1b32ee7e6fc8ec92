use alloc::string::String;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::Rect;

#[cfg(feature = "std")]
type PayloadMap = HashMap<String, PayloadValue>;
#[cfg(not(feature = "std"))]
type PayloadMap = BTreeMap<String, PayloadValue>;

/// Notification name posted when the keyboard is about to change its frame.
pub const KEYBOARD_WILL_CHANGE_FRAME: &str = "KeyboardWillChangeFrame";

/// User-info key carrying the keyboard frame before the change.
pub const FRAME_BEGIN_KEY: &str = "FrameBegin";

/// User-info key carrying the keyboard frame after the change.
pub const FRAME_END_KEY: &str = "FrameEnd";

/// A value stored in a notification's user-info map.
///
/// Payload entries are dynamically typed at the boundary: a key may be absent
/// or carry a value of the wrong kind, and consumers must treat both the same
/// way (see [`Notification::rect`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayloadValue {
    Rect(Rect),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl PayloadValue {
    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(*r),
            _ => None,
        }
    }
}

impl From<Rect> for PayloadValue {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<f64> for PayloadValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for PayloadValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for PayloadValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A broadcast event payload: a name plus a user-info map.
///
/// This is the sole wire-like contract at the boundary. The event source
/// (e.g. the adapter crate's notification center) routes by name; consumers
/// read typed values out of the user-info map and drop anything malformed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    name: String,
    user_info: PayloadMap,
}

impl Notification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_info: PayloadMap::new(),
        }
    }

    /// Builds a well-formed keyboard frame-change notification.
    pub fn will_change_frame(begin: Rect, end: Rect) -> Self {
        Self::new(KEYBOARD_WILL_CHANGE_FRAME)
            .with_value(FRAME_BEGIN_KEY, begin)
            .with_value(FRAME_END_KEY, end)
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        self.user_info.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PayloadValue>) {
        self.user_info.insert(key.into(), value.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.user_info.get(key)
    }

    /// Reads a rectangle out of the user-info map.
    ///
    /// Returns `None` when the key is absent *or* holds a non-rect value, so
    /// callers can guard on a single condition.
    pub fn rect(&self, key: &str) -> Option<Rect> {
        self.get(key).and_then(PayloadValue::as_rect)
    }
}
