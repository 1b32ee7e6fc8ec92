use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use keyboard_observer::Notification;

/// A handler invoked for every notification posted under its name.
pub type NotificationHandler = Arc<dyn Fn(&Notification) + Send + Sync>;

struct Entry {
    id: u64,
    name: String,
    handler: NotificationHandler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// An explicit event bus that routes [`Notification`]s by name.
///
/// This replaces the implicit global observer list of platform notification
/// centers: subscribing returns an owned [`Subscription`] handle, and
/// dropping the handle deregisters. There is no registry keyed by object
/// identity, so there is nothing to dangle.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    registry: Arc<Mutex<Registry>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for notifications posted under `name`.
    ///
    /// The registration lives exactly as long as the returned handle.
    pub fn subscribe(
        &self,
        name: impl Into<String>,
        handler: impl Fn(&Notification) + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            name: name.into(),
            handler: Arc::new(handler),
        });
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Delivers `notification` to every handler registered under its name,
    /// synchronously, in registration order.
    pub fn post(&self, notification: &Notification) {
        // Snapshot the matching handlers so one may subscribe, unsubscribe,
        // or post re-entrantly without deadlocking on the registry.
        let handlers: Vec<NotificationHandler> = self
            .lock()
            .entries
            .iter()
            .filter(|entry| entry.name == notification.name())
            .map(|entry| Arc::clone(&entry.handler))
            .collect();

        for handler in handlers {
            handler(notification);
        }
    }

    /// The number of live registrations under `name`.
    pub fn observer_count(&self, name: &str) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.name == name)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // Plain data; a poisoned lock is still usable.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("registrations", &self.lock().entries.len())
            .finish()
    }
}

/// An owned registration on a [`NotificationCenter`].
///
/// Dropping the handle (or calling [`Self::dispose`]) deregisters the
/// handler. Deregistering an entry that is already gone, or outliving the
/// center itself, is a no-op.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Subscription {
    /// Releases the registration explicitly. Equivalent to dropping.
    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.entries.retain(|entry| entry.id != self.id);
        }
    }
}

impl core::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
