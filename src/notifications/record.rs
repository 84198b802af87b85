// SPDX-License-Identifier: MPL-2.0
//! Active toast records.
//!
//! A [`Record`] is the result of merging caller [`Options`] over the store's
//! [`ToastDefaults`]. Records are immutable while active.

use super::options::{Callback, Options, Position, ToastType};
use crate::config::ToastDefaults;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Identity of a toast, unique among all toasts created by this process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new unique toast ID.
    pub(crate) fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(to_base36(COUNTER.fetch_add(1, Ordering::Relaxed)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut buf = Vec::new();
    loop {
        // value % 36 < 36, always a valid index
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

/// A toast in the active collection.
#[derive(Debug, Clone)]
pub struct Record {
    id: ToastId,
    /// Set at creation and never consulted afterwards.
    visible: bool,
    toast_type: ToastType,
    title: Option<String>,
    message: Option<String>,
    duration: Duration,
    position: Position,
    auto_close: bool,
    close_on_press: bool,
    show_progress: bool,
    on_press: Option<Callback>,
    on_close: Option<Callback>,
    created_at: Instant,
}

impl Record {
    pub(crate) fn new(
        id: ToastId,
        options: Options,
        defaults: &ToastDefaults,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            visible: true,
            toast_type: options.toast_type.unwrap_or(defaults.toast_type),
            title: options.title,
            message: options.message,
            duration: options.duration.unwrap_or_else(|| defaults.duration()),
            position: options.position.unwrap_or(defaults.position),
            auto_close: options.auto_close.unwrap_or(defaults.auto_close),
            close_on_press: options.close_on_press.unwrap_or(defaults.close_on_press),
            show_progress: options.show_progress.unwrap_or(defaults.show_progress),
            on_press: options.on_press,
            on_close: options.on_close,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn toast_type(&self) -> ToastType {
        self.toast_type
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the duration only when it is set (non-zero).
    #[must_use]
    pub fn timed_duration(&self) -> Option<Duration> {
        (!self.duration.is_zero()).then_some(self.duration)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    #[must_use]
    pub fn close_on_press(&self) -> bool {
        self.close_on_press
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    /// When the toast should start dismissing itself, if it does at all.
    ///
    /// A duration too large to represent as an instant never elapses.
    #[must_use]
    pub fn auto_close_deadline(&self) -> Option<Instant> {
        if !self.auto_close {
            return None;
        }
        self.timed_duration().and_then(|d| self.created_at.checked_add(d))
    }

    #[must_use]
    pub fn on_press(&self) -> Option<&Callback> {
        self.on_press.as_ref()
    }

    #[must_use]
    pub fn on_close(&self) -> Option<&Callback> {
        self.on_close.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(options: Options) -> Record {
        Record::new(
            ToastId::generate(),
            options,
            &ToastDefaults::default(),
            Instant::now(),
        )
    }

    #[test]
    fn toast_ids_are_unique() {
        let ids: Vec<ToastId> = (0..100).map(|_| ToastId::generate()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn base36_rendering() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn empty_options_take_every_default() {
        let record = record(Options::new());

        assert!(record.visible());
        assert_eq!(record.toast_type(), ToastType::Info);
        assert_eq!(record.duration(), Duration::from_millis(3000));
        assert_eq!(record.position(), Position::Top);
        assert!(record.auto_close());
        assert!(record.close_on_press());
        assert!(record.show_progress());
        assert!(record.title().is_none());
        assert!(record.message().is_none());
    }

    #[test]
    fn explicit_options_override_defaults() {
        let record = record(
            Options::error()
                .title("Error!")
                .message("Something went wrong")
                .duration(Duration::from_millis(4000))
                .position(Position::Center)
                .auto_close(false)
                .close_on_press(false)
                .show_progress(false),
        );

        assert_eq!(record.toast_type(), ToastType::Error);
        assert_eq!(record.title(), Some("Error!"));
        assert_eq!(record.message(), Some("Something went wrong"));
        assert_eq!(record.duration(), Duration::from_millis(4000));
        assert_eq!(record.position(), Position::Center);
        assert!(!record.auto_close());
        assert!(!record.close_on_press());
        assert!(!record.show_progress());
    }

    #[test]
    fn deadline_follows_duration_and_auto_close() {
        let timed = record(Options::new().duration(Duration::from_millis(1000)));
        assert_eq!(
            timed.auto_close_deadline(),
            Some(timed.created_at() + Duration::from_millis(1000))
        );

        let manual = record(Options::new().auto_close(false));
        assert!(manual.auto_close_deadline().is_none());

        let zero = record(Options::new().duration(Duration::ZERO));
        assert!(zero.timed_duration().is_none());
        assert!(zero.auto_close_deadline().is_none());
    }

    #[test]
    fn unrepresentable_deadline_never_elapses() {
        let endless = record(Options::new().duration(Duration::MAX));

        assert_eq!(endless.timed_duration(), Some(Duration::MAX));
        assert!(endless.auto_close_deadline().is_none());
    }
}
