// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are transient, non-blocking notifications. Host code shows them
//! through a [`Provider`]; each toast slides in, optionally counts down with
//! a progress bar, and slides out when its time is up or it is tapped.
//!
//! # Components
//!
//! - [`options`] - Caller-facing [`Options`], [`ToastType`] and [`Position`]
//! - [`record`] - Active toast [`Record`]s and their [`ToastId`]
//! - [`store`] - Ordered active collection with change notifications
//! - [`view`] - Per-toast animation and auto-dismiss state machine
//! - [`layer`] - Mounted views, kept in step with the store
//! - [`provider`] - Store owner and Iced integration
//! - [`context`] - Ambient accessor ([`use_toast`])
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::notifications::{use_toast, Options, Provider};
//!
//! // Keep one provider in the application state
//! let mut toasts = Provider::new();
//!
//! // Anywhere inside the provider's scope
//! toasts.scope(|| {
//!     use_toast().show(Options::success().title("Saved"));
//! });
//!
//! // In update, view and subscription
//! toasts.update(message);
//! let overlay = toasts.view().map(Message::Toast);
//! let ticks = toasts.subscription().map(Message::Toast);
//! ```

pub mod animation;
pub mod context;
pub mod layer;
pub mod options;
pub mod provider;
pub mod record;
pub mod store;
pub mod view;

pub use context::{try_use_toast, use_toast, ToastHandle};
pub use layer::Layer;
pub use options::{Callback, Options, Position, ToastType};
pub use provider::{Message, Provider};
pub use record::{Record, ToastId};
pub use store::{Change, ListenerId, Store};
pub use view::{Frame, Phase, ToastView};
