use crate::{KeyboardEvent, Rect};

/// A lightweight snapshot of the most recently applied keyboard frame change.
///
/// This is useful for hosts that attach a scroll view or callback late and
/// want to catch up with the current keyboard state, without coupling the
/// observer to any specific UI framework.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameChange {
    /// The keyboard's end frame.
    pub frame: Rect,
    /// The derived event classification.
    pub event: KeyboardEvent,
    /// The bottom content inset that was applied (or would have been, had a
    /// scroll view been bound).
    pub bottom_inset: f64,
}
