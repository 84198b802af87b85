// SPDX-License-Identifier: MPL-2.0
//! The active collection of toasts.
//!
//! The `Store` owns every active [`Record`] in insertion order and is the
//! only place records are added or dropped. Interested parties (the toast
//! layer, host code) observe mutations through [`Store::subscribe`].

use super::options::Options;
use super::record::{Record, ToastId};
use crate::config::ToastDefaults;
use std::fmt;
use std::time::Instant;

/// A mutation of the active collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A toast was appended.
    Added(ToastId),
    /// A single toast was removed.
    Removed(ToastId),
    /// Every toast was dropped at once.
    Cleared,
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Change)>;

/// Ordered collection of active toasts.
#[derive(Default)]
pub struct Store {
    /// Active toasts, oldest first.
    toasts: Vec<Record>,
    defaults: ToastDefaults,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Store {
    /// Creates an empty store using the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that merges options over `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: ToastDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &ToastDefaults {
        &self.defaults
    }

    /// Creates a toast from `options` and appends it to the collection.
    ///
    /// Option values are not validated. The new ID is returned synchronously.
    pub fn show(&mut self, options: Options) -> ToastId {
        let id = ToastId::generate();
        let record = Record::new(id.clone(), options, &self.defaults, Instant::now());
        log::debug!(
            "showing toast {id} ({}, {:?})",
            record.toast_type().name(),
            record.duration()
        );
        self.toasts.push(record);
        self.notify(&Change::Added(id.clone()));
        id
    }

    /// Removes a toast and returns it without running its `on_close` callback.
    ///
    /// Returns `None` (and notifies nobody) when `id` is not active.
    pub fn take(&mut self, id: &ToastId) -> Option<Record> {
        let Some(pos) = self.toasts.iter().position(|t| t.id() == id) else {
            log::trace!("hide ignored, toast {id} is not active");
            return None;
        };
        let record = self.toasts.remove(pos);
        log::debug!("removed toast {id}");
        self.notify(&Change::Removed(id.clone()));
        Some(record)
    }

    /// Removes a toast, then runs its `on_close` callback once.
    ///
    /// Unknown IDs are ignored.
    pub fn hide(&mut self, id: &ToastId) {
        if let Some(record) = self.take(id) {
            if let Some(on_close) = record.on_close() {
                on_close.call();
            }
        }
    }

    /// Drops every toast. No `on_close` callback runs.
    pub fn hide_all(&mut self) {
        log::debug!("clearing {} toast(s)", self.toasts.len());
        self.toasts.clear();
        self.notify(&Change::Cleared);
    }

    /// Returns the active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Record] {
        &self.toasts
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Record> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Registers a listener called synchronously after every mutation.
    ///
    /// Listeners must not touch the store they are registered on.
    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() < before
    }

    fn notify(&mut self, change: &Change) {
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("toasts", &self.toasts)
            .field("defaults", &self.defaults)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
