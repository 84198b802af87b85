// SPDX-License-Identifier: MPL-2.0
//! User interface components for toasts.
//!
//! - [`toast`] - Toast card and overlay widgets
//! - [`styles`] - Card and progress bar styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod styles;
pub mod toast;
