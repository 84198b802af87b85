// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config, ToastDefaults};
use iced_toast::notifications::{
    try_use_toast, use_toast, Message, Options, Position, Provider, ToastType,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn created_at(provider: &Provider, index: usize) -> Instant {
    provider.toasts()[index].created_at()
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&calls);
    (calls, move || {
        inner.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn saved_toast_is_removed_after_its_duration() {
    let mut provider = Provider::new();
    let id = provider.scope(|| {
        use_toast().show(
            Options::success()
                .title("Saved")
                .duration(Duration::from_millis(1000)),
        )
    });
    let start = created_at(&provider, 0);

    let mut removed_at = None;
    for ms in (0..=2000).step_by(16) {
        let now = start + Duration::from_millis(ms);
        provider.update(Message::Tick(now));
        if removed_at.is_none() && provider.toasts().iter().all(|t| t.id() != &id) {
            removed_at = Some(ms);
        }
    }

    let removed_at = removed_at.expect("toast should have been removed");
    assert!(removed_at >= 1000, "removed too early at {removed_at}ms");
}

#[test]
fn two_empty_toasts_keep_call_order() {
    let provider = Provider::new();
    let (first, second) = provider.scope(|| {
        let toast = use_toast();
        (toast.show(Options::new()), toast.show(Options::new()))
    });

    assert_ne!(first, second);
    let ids: Vec<_> = provider.toasts().iter().map(|t| t.id().clone()).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn hide_all_removes_manual_toast_without_callbacks() {
    let (closes, on_close) = counter();
    let mut provider = Provider::new();
    provider.show(Options::new().auto_close(false).on_close(on_close));
    provider.update(Message::Tick(Instant::now()));

    provider.scope(|| use_toast().hide_all());
    for secs in 1..5 {
        provider.update(Message::Tick(Instant::now() + Duration::from_secs(secs)));
    }

    assert!(provider.toasts().is_empty());
    assert!(!provider.has_toasts());
    assert_eq!(closes.load(Ordering::SeqCst), 0);
}

#[test]
fn hide_calls_on_close_exactly_once() {
    let (closes, on_close) = counter();
    let provider = Provider::new();
    let keep = provider.show(Options::new());
    let id = provider.show(Options::new().on_close(on_close));

    provider.hide(&id);
    provider.hide(&id);

    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(provider.toasts().len(), 1);
    assert_eq!(provider.toasts()[0].id(), &keep);
}

#[test]
fn tap_without_close_on_press_keeps_toast() {
    let (presses, on_press) = counter();
    let mut provider = Provider::new();
    let id = provider.show(
        Options::info()
            .close_on_press(false)
            .auto_close(false)
            .on_press(on_press),
    );
    provider.update(Message::Tick(Instant::now()));

    provider.update(Message::Pressed(id));
    provider.update(Message::Tick(Instant::now() + Duration::from_secs(2)));

    assert_eq!(presses.load(Ordering::SeqCst), 1);
    assert_eq!(provider.toasts().len(), 1);
}

#[test]
fn tap_closes_and_calls_on_press() {
    let (presses, on_press) = counter();
    let (closes, on_close) = counter();
    let mut provider = Provider::new();
    let id = provider.show(
        Options::new()
            .auto_close(false)
            .on_press(on_press)
            .on_close(on_close),
    );
    provider.update(Message::Tick(Instant::now()));

    provider.update(Message::Pressed(id));
    assert_eq!(provider.toasts().len(), 1, "removal waits for the exit animation");

    provider.update(Message::Tick(Instant::now() + Duration::from_secs(1)));
    assert!(provider.toasts().is_empty());
    assert_eq!(presses.load(Ordering::SeqCst), 1);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn accessor_outside_provider_is_an_error() {
    assert!(try_use_toast().is_err());
    let result = std::panic::catch_unwind(|| {
        let _ = use_toast();
    });
    assert!(result.is_err());
}

#[test]
fn config_file_drives_toast_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toast.toml");
    let config = Config {
        toast: ToastDefaults {
            toast_type: ToastType::Warning,
            duration_ms: 5000,
            position: Position::Bottom,
            ..ToastDefaults::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let provider = Provider::with_config(&loaded);
    provider.show(Options::new());

    let record = &provider.toasts()[0];
    assert_eq!(record.toast_type(), ToastType::Warning);
    assert_eq!(record.duration(), Duration::from_millis(5000));
    assert_eq!(record.position(), Position::Bottom);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn callbacks_reach_their_provider_through_the_accessor() {
    let mut provider = Provider::new();
    let id = provider.show(
        Options::new()
            .duration(Duration::from_millis(100))
            .on_close(|| {
                use_toast().show(
                    Options::info()
                        .title("Closed")
                        .auto_close(false)
                        .close_on_press(false)
                        .on_press(|| use_toast().hide_all()),
                );
            }),
    );
    let start = created_at(&provider, 0);

    provider.update(Message::Tick(start + Duration::from_millis(150)));
    provider.update(Message::Tick(start + Duration::from_millis(1000)));

    let toasts = provider.toasts();
    assert_eq!(toasts.len(), 1);
    assert_ne!(toasts[0].id(), &id);
    assert_eq!(toasts[0].title(), Some("Closed"));

    provider.update(Message::Pressed(toasts[0].id().clone()));
    assert!(provider.toasts().is_empty());
    assert!(!provider.has_toasts());
}

#[test]
fn endless_duration_never_auto_closes() {
    let mut provider = Provider::new();
    provider.show(Options::new().duration(Duration::MAX));
    let start = created_at(&provider, 0);

    let _ = provider.view();
    for hours in 0..3 {
        provider.update(Message::Tick(start + Duration::from_secs(hours * 3600)));
    }
    let _ = provider.view();

    assert_eq!(provider.toasts().len(), 1);
    assert!(provider.layer().view(provider.toasts()[0].id()).is_some());
}
