// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Option defaults merged into every shown toast
//! - **Animation**: Entrance and exit timings and targets
//! - **Placement**: Distance of toasts from the window edges

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default display time of a toast (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Whether toasts close on their own by default.
pub const DEFAULT_AUTO_CLOSE: bool = true;

/// Whether tapping a toast dismisses it by default.
pub const DEFAULT_CLOSE_ON_PRESS: bool = true;

/// Whether the progress bar is shown by default.
pub const DEFAULT_SHOW_PROGRESS: bool = true;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Fade-in time of the entrance animation (in milliseconds).
pub const DEFAULT_ENTER_FADE_MS: u64 = 300;

/// Length of the exit animation (in milliseconds).
pub const DEFAULT_EXIT_MS: u64 = 300;

/// Vertical offset a toast slides in from and out to (in logical pixels).
pub const SLIDE_OFFSET: f32 = -100.0;

/// Scale a toast starts its entrance at.
pub const ENTER_SCALE: f32 = 0.9;

/// Scale a toast ends its exit at.
pub const EXIT_SCALE: f32 = 0.8;

/// Spring driving the slide-in (damping, stiffness).
pub const SLIDE_SPRING: (f32, f32) = (20.0, 200.0);

/// Spring driving the scale-in (damping, stiffness).
pub const SCALE_SPRING: (f32, f32) = (30.0, 100.0);

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Distance between top/bottom toasts and the window edge.
pub const EDGE_OFFSET: f32 = 50.0;

/// Horizontal inset of the toast layer.
pub const SIDE_INSET: f32 = 20.0;

const _: () = {
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(DEFAULT_EXIT_MS > 0);
    assert!(EXIT_SCALE < ENTER_SCALE);
    assert!(ENTER_SCALE < 1.0);
};
