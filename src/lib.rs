// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification library for the Iced GUI framework.
//!
//! It provides a provider that owns the active toasts, a click-through
//! overlay that renders them, and an animated card for each toast with
//! optional auto-dismiss and progress bar.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;

#[cfg(test)]
mod test_utils;
