// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed change notifications for hosts.

use smallvec::SmallVec;

/// Callback invoked with each emitted event.
pub type Listener<E> = Box<dyn FnMut(&E)>;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A list of listeners for one event type.
///
/// Listeners run synchronously, in subscription order, on the thread that
/// emits. Most signals have one or two listeners, so they are stored inline.
pub struct Signal<E> {
    listeners: SmallVec<[(SubscriptionId, Listener<E>); 2]>,
    next_id: u64,
}

impl<E> core::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self {
            listeners: SmallVec::new(),
            next_id: 0,
        }
    }
}

impl<E> Signal<E> {
    /// Creates a signal with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Calls every listener with `event`.
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}
