// SPDX-License-Identifier: MPL-2.0
//! The toast provider: owner of the store and the mounted views.
//!
//! A host application keeps one `Provider` in its state, forwards
//! [`Message`]s to [`Provider::update`], and composes [`Provider::view`]
//! and [`Provider::subscription`] into its own.

use super::context::{self, ToastHandle};
use super::layer::Layer;
use super::options::Options;
use super::record::{Record, ToastId};
use super::store::{Change, Store};
use crate::config::Config;
use crate::ui::toast::Toast;
use iced::{time, Element, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Frame interval while any toast is on screen (~60 FPS).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Animation frame; advances timers and animations.
    Tick(Instant),
    /// The user tapped a toast.
    Pressed(ToastId),
    /// Play the exit animation of a toast, then remove it.
    Dismiss(ToastId),
}

pub struct Provider {
    store: Rc<RefCell<Store>>,
    layer: Layer,
    /// Changes published by the store and not yet applied to the layer.
    pending: Rc<RefCell<Vec<Change>>>,
    /// Clock of the provider: the last frame, or the newest toast if shown since.
    now: Instant,
}

impl Provider {
    /// Creates a provider with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a provider whose toasts use `config`'s defaults and timings.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::with_defaults(config.toast);
        let sink = Rc::clone(&pending);
        store.subscribe(move |change: &Change| sink.borrow_mut().push(change.clone()));

        Self {
            store: Rc::new(RefCell::new(store)),
            layer: Layer::new(config.animation),
            pending,
            now: Instant::now(),
        }
    }

    /// Returns a handle to this provider's operations.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle::new(Rc::clone(&self.store))
    }

    /// Runs `f` with this provider as the ambient toast context, making it
    /// reachable through [`use_toast`](super::use_toast).
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        context::enter(self.handle(), f)
    }

    pub fn show(&self, options: Options) -> ToastId {
        self.handle().show(options)
    }

    /// Removes a toast immediately, without an exit animation.
    pub fn hide(&self, id: &ToastId) {
        self.handle().hide(id);
    }

    pub fn hide_all(&self) {
        self.handle().hide_all();
    }

    #[must_use]
    pub fn toasts(&self) -> Vec<Record> {
        self.handle().toasts()
    }

    /// Plays the exit animation of a toast; it is removed once the exit completes.
    ///
    /// Returns `false` if the toast is not active.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        self.sync();
        self.layer.dismiss(id, self.now)
    }

    /// Whether anything is on screen or still animating.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.store.borrow().is_empty() || !self.layer.is_empty()
    }

    /// Handles a toast message.
    ///
    /// Taps and dismissals take effect at the time of the last frame.
    /// Callbacks run with this provider installed as the ambient context.
    pub fn update(&mut self, message: Message) {
        self.sync();
        match message {
            Message::Tick(now) => {
                self.now = now;
                for id in self.layer.tick(now) {
                    self.hide(&id);
                }
                self.sync();
            }
            Message::Pressed(id) => {
                let on_press = self.layer.press(&id, self.now);
                if let Some(on_press) = on_press {
                    self.scope(|| on_press.call());
                }
                self.sync();
            }
            Message::Dismiss(id) => {
                self.layer.dismiss(&id, self.now);
            }
        }
    }

    /// Renders the toast overlay. Compose it above the application with a `Stack`.
    pub fn view(&self) -> Element<'_, Message> {
        let store = self.store.borrow();
        Toast::view_overlay(store.toasts(), &self.layer, self.now)
    }

    /// Frame ticks, active only while toasts are shown.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_toasts() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Applies store changes made since the last update to the layer.
    fn sync(&mut self) {
        let changes: Vec<Change> = self.pending.borrow_mut().drain(..).collect();
        if changes.is_empty() {
            return;
        }
        let store = self.store.borrow();
        for change in &changes {
            if let Change::Added(id) = change {
                if let Some(record) = store.get(id) {
                    self.now = self.now.max(record.created_at());
                }
            }
            self.layer.apply(change, &store);
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("store", &self.store.borrow())
            .field("layer", &self.layer)
            .finish()
    }
}
