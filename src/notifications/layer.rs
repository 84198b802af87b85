// SPDX-License-Identifier: MPL-2.0
//! The set of mounted toast views.
//!
//! The layer mirrors the store's active collection: one [`ToastView`] per
//! record, mounted and unmounted as [`Change`]s arrive. Unmounting a view
//! drops its auto-dismiss deadline along with it.

use super::options::Callback;
use super::record::{Record, ToastId};
use super::store::{Change, Store};
use super::view::ToastView;
use crate::config::AnimationConfig;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct Layer {
    /// Mounted views in mount order.
    views: Vec<ToastView>,
    timing: AnimationConfig,
}

impl Layer {
    #[must_use]
    pub fn new(timing: AnimationConfig) -> Self {
        Self {
            views: Vec::new(),
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> AnimationConfig {
        self.timing
    }

    /// Applies a store change, looking up added records in `store`.
    pub fn apply(&mut self, change: &Change, store: &Store) {
        match change {
            Change::Added(id) => {
                // Already gone if it was removed before this change was applied.
                if let Some(record) = store.get(id) {
                    self.mount(record);
                }
            }
            Change::Removed(id) => self.unmount(id),
            Change::Cleared => self.clear(),
        }
    }

    /// Mounts a view for `record` unless one exists already.
    pub fn mount(&mut self, record: &Record) {
        if self.view(record.id()).is_none() {
            self.views.push(ToastView::new(record, self.timing));
        }
    }

    pub fn unmount(&mut self, id: &ToastId) {
        self.views.retain(|view| view.id() != id);
    }

    pub fn clear(&mut self) {
        self.views.clear();
    }

    /// Advances every view and returns the IDs whose exit has completed.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        self.views
            .iter_mut()
            .filter_map(|view| view.tick(now).then(|| view.id().clone()))
            .collect()
    }

    /// Forwards a tap to the view. Returns its `on_press` callback, if any.
    pub fn press(&mut self, id: &ToastId, now: Instant) -> Option<Callback> {
        self.view_mut(id).and_then(|view| view.press(now))
    }

    /// Starts the exit animation of a view. Returns `false` if it is not mounted.
    pub fn dismiss(&mut self, id: &ToastId, now: Instant) -> bool {
        match self.view_mut(id) {
            Some(view) => {
                view.dismiss(now);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn view(&self, id: &ToastId) -> Option<&ToastView> {
        self.views.iter().find(|view| view.id() == id)
    }

    fn view_mut(&mut self, id: &ToastId) -> Option<&mut ToastView> {
        self.views.iter_mut().find(|view| view.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::view::Phase;
    use crate::notifications::Options;
    use std::time::Duration;

    fn synced(store: &mut Store, options: Options, layer: &mut Layer) -> ToastId {
        let id = store.show(options);
        layer.apply(&Change::Added(id.clone()), store);
        id
    }

    #[test]
    fn mounts_one_view_per_record() {
        let mut store = Store::new();
        let mut layer = Layer::default();
        let first = synced(&mut store, Options::new(), &mut layer);
        let second = synced(&mut store, Options::new(), &mut layer);

        assert_eq!(layer.len(), 2);
        assert!(layer.view(&first).is_some());
        assert!(layer.view(&second).is_some());

        layer.apply(&Change::Added(first.clone()), &store);
        assert_eq!(layer.len(), 2);
    }

    #[test]
    fn added_then_removed_record_is_not_mounted() {
        let mut store = Store::new();
        let mut layer = Layer::default();
        let id = store.show(Options::new());
        store.hide(&id);

        layer.apply(&Change::Added(id.clone()), &store);
        assert!(layer.is_empty());
    }

    #[test]
    fn unmount_and_clear_drop_views() {
        let mut store = Store::new();
        let mut layer = Layer::default();
        let first = synced(&mut store, Options::new(), &mut layer);
        synced(&mut store, Options::new(), &mut layer);

        layer.apply(&Change::Removed(first.clone()), &store);
        assert_eq!(layer.len(), 1);
        assert!(layer.view(&first).is_none());

        layer.apply(&Change::Cleared, &store);
        assert!(layer.is_empty());
    }

    #[test]
    fn tick_reports_finished_exits() {
        let mut store = Store::new();
        let mut layer = Layer::default();
        let quick = synced(
            &mut store,
            Options::new().duration(Duration::from_millis(1000)),
            &mut layer,
        );
        let slow = synced(&mut store, Options::new().auto_close(false), &mut layer);
        let start = store.get(&quick).map(Record::created_at).expect("active");

        assert!(layer.tick(start + Duration::from_millis(1000)).is_empty());
        let done = layer.tick(start + Duration::from_secs(2));
        assert_eq!(done, vec![quick]);
        assert_eq!(
            layer.view(&slow).map(|v| v.phase(start + Duration::from_secs(2))),
            Some(Phase::Idle)
        );
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut layer = Layer::default();
        assert!(!layer.dismiss(&ToastId::from("missing"), Instant::now()));
        assert!(layer.press(&ToastId::from("missing"), Instant::now()).is_none());
    }
}
