//! Adapter utilities for the `keyboard-observer` crate.
//!
//! The `keyboard-observer` crate is UI-agnostic and focuses on the core
//! classification and inset logic. This crate provides small,
//! framework-neutral helpers commonly needed to wire it into a host:
//!
//! - An explicit notification center (event bus) with RAII subscription
//!   handles, so registrations are released deterministically
//! - A controller that owns the observer and its subscription lifecycle
//! - A `Mutex`-backed scroll view state for hosts and tests
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![forbid(unsafe_code)]

mod center;
mod controller;
mod scroll_state;


pub use center::{NotificationCenter, NotificationHandler, Subscription};
pub use controller::Controller;
pub use scroll_state::SharedScrollView;
