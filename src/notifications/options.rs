// SPDX-License-Identifier: MPL-2.0
//! Caller-facing toast options.
//!
//! Every field is optional; anything left unset is filled from the store's
//! [`ToastDefaults`](crate::config::ToastDefaults) when the toast is shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ToastType {
    Success,
    Error,
    Warning,
    /// Fallback for absent or unrecognized names.
    #[default]
    Info,
}

impl ToastType {
    /// Parses a type name, falling back to [`ToastType::Info`] for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl From<String> for ToastType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Screen placement of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Position {
    #[default]
    Top,
    Bottom,
    /// Vertically centered. Also the fallback for unrecognized names.
    Center,
}

impl Position {
    /// Parses a position name, falling back to [`Position::Center`] for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            _ => Self::Center,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }
}

impl From<String> for Position {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Zero-argument callback attached to a toast.
///
/// Cloning shares the same closure.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Options passed to `show`.
///
/// # Example
///
/// ```
/// use iced_toast::notifications::{Options, Position, ToastType};
/// use std::time::Duration;
///
/// let options = Options::success()
///     .title("Saved")
///     .duration(Duration::from_millis(1000))
///     .position(Position::Bottom);
///
/// assert_eq!(options.toast_type, Some(ToastType::Success));
/// assert_eq!(options.title.as_deref(), Some("Saved"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub toast_type: Option<ToastType>,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Display time. `Duration::ZERO` counts as unset and disables
    /// auto-close and the progress bar.
    pub duration: Option<Duration>,
    pub position: Option<Position>,
    pub auto_close: Option<bool>,
    pub close_on_press: Option<bool>,
    pub show_progress: Option<bool>,
    pub on_press: Option<Callback>,
    pub on_close: Option<Callback>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn success() -> Self {
        Self::new().toast_type(ToastType::Success)
    }

    #[must_use]
    pub fn error() -> Self {
        Self::new().toast_type(ToastType::Error)
    }

    #[must_use]
    pub fn warning() -> Self {
        Self::new().toast_type(ToastType::Warning)
    }

    #[must_use]
    pub fn info() -> Self {
        Self::new().toast_type(ToastType::Info)
    }

    #[must_use]
    pub fn toast_type(mut self, toast_type: ToastType) -> Self {
        self.toast_type = Some(toast_type);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = Some(auto_close);
        self
    }

    #[must_use]
    pub fn close_on_press(mut self, close_on_press: bool) -> Self {
        self.close_on_press = Some(close_on_press);
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = Some(show_progress);
        self
    }

    #[must_use]
    pub fn on_press(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_press = Some(Callback::new(f));
        self
    }

    #[must_use]
    pub fn on_close(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Callback::new(f));
        self
    }
}
