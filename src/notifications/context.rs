// SPDX-License-Identifier: MPL-2.0
//! Ambient access to the nearest toast provider.
//!
//! [`Provider::scope`](super::Provider::scope) installs a provider for the
//! duration of a closure; code running inside it reaches the provider's
//! operations through [`use_toast`] without threading a handle through every
//! intermediate layer. Scopes nest, the innermost one wins.

use super::options::Options;
use super::record::{Record, ToastId};
use super::store::Store;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

thread_local! {
    static PROVIDERS: RefCell<Vec<ToastHandle>> = const { RefCell::new(Vec::new()) };
}

/// Shared access to a provider's store: `show`, `hide`, `hide_all` and `toasts`.
///
/// Callbacks run after the store borrow is released, so `on_close` may
/// itself use the handle.
#[derive(Clone)]
pub struct ToastHandle {
    store: Rc<RefCell<Store>>,
}

impl ToastHandle {
    pub(crate) fn new(store: Rc<RefCell<Store>>) -> Self {
        Self { store }
    }

    /// Shows a toast and returns its ID.
    pub fn show(&self, options: Options) -> ToastId {
        self.store.borrow_mut().show(options)
    }

    /// Removes a toast, then runs its `on_close` callback. Unknown IDs are ignored.
    ///
    /// The callback runs with this handle installed, so it reaches the same
    /// provider through [`use_toast`].
    pub fn hide(&self, id: &ToastId) {
        let removed = self.store.borrow_mut().take(id);
        if let Some(on_close) = removed.as_ref().and_then(Record::on_close) {
            enter(self.clone(), || on_close.call());
        }
    }

    /// Removes every toast without running any `on_close` callback.
    pub fn hide_all(&self) {
        self.store.borrow_mut().hide_all();
    }

    /// Snapshot of the active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Record> {
        self.store.borrow().toasts().to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Whether both handles reach the same provider.
    #[must_use]
    pub fn same_provider(&self, other: &ToastHandle) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle")
            .field("toasts", &self.len())
            .finish()
    }
}

/// Pops the scope even if the closure panics.
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let _ = PROVIDERS.try_with(|providers| providers.borrow_mut().pop());
    }
}

pub(crate) fn enter<R>(handle: ToastHandle, f: impl FnOnce() -> R) -> R {
    PROVIDERS.with(|providers| providers.borrow_mut().push(handle));
    let _guard = ScopeGuard;
    f()
}

/// Returns the innermost provider's handle, or [`Error::OutsideProvider`].
pub fn try_use_toast() -> Result<ToastHandle> {
    PROVIDERS
        .with(|providers| providers.borrow().last().cloned())
        .ok_or(Error::OutsideProvider)
}

/// Returns the innermost provider's handle.
///
/// # Panics
///
/// Panics when called outside of any provider scope. That is a programming
/// error; use [`try_use_toast`] to probe instead.
#[must_use]
pub fn use_toast() -> ToastHandle {
    match try_use_toast() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}
