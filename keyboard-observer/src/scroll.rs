use alloc::sync::Arc;

/// A scrollable view that exposes a mutable bottom content inset.
///
/// Receivers take `&self`: the handle has platform reference semantics, and
/// implementors choose their own interior mutability (a `Mutex`-backed state,
/// a channel into a UI toolkit, ...). The observer only ever writes the
/// bottom edge.
pub trait ScrollableView {
    /// Sets the bottom content inset, in screen points.
    fn set_bottom_inset(&self, points: f64);

    /// Returns the current bottom content inset, in screen points.
    fn bottom_inset(&self) -> f64;
}

/// A shared, non-owning handle to the host's scrollable view.
pub type ScrollViewHandle = Arc<dyn ScrollableView + Send + Sync>;
