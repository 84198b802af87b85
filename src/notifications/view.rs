// SPDX-License-Identifier: MPL-2.0
//! Presentation state of a single toast.
//!
//! A `ToastView` drives the entrance and exit animations, the progress bar
//! and the auto-dismiss deadline of one record. The store knows nothing of
//! this state: dropping the view is all it takes to cancel its timer.

use super::animation::{lerp, timing, Spring};
use super::options::Callback;
use super::record::{Record, ToastId};
use crate::config::{
    AnimationConfig, ENTER_SCALE, EXIT_SCALE, SCALE_SPRING, SLIDE_OFFSET, SLIDE_SPRING,
};
use std::time::{Duration, Instant};

const SLIDE: Spring = Spring::new(SLIDE_SPRING.0, SLIDE_SPRING.1);
const SCALE: Spring = Spring::new(SCALE_SPRING.0, SCALE_SPRING.1);

/// Lifecycle stage of a toast view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding, fading and scaling in.
    Entering,
    /// Resting on screen.
    Idle,
    /// Playing the exit animation.
    Exiting,
    /// Exit complete; removal has been requested.
    Finished,
}

/// Animated values sampled at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Vertical offset from the resting position, in logical pixels.
    pub offset_y: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Fill of the progress bar in `[0, 1]`.
    pub progress: f32,
}

impl Frame {
    /// The values a toast is rendered with before its first frame.
    pub const HIDDEN: Frame = Frame {
        offset_y: SLIDE_OFFSET,
        opacity: 0.0,
        scale: ENTER_SCALE,
        progress: 0.0,
    };
}

#[derive(Debug, Clone, Copy)]
struct Exit {
    started_at: Instant,
    from: Frame,
}

/// Animation and timer state for one active toast.
#[derive(Debug, Clone)]
pub struct ToastView {
    id: ToastId,
    mounted_at: Instant,
    deadline: Option<Instant>,
    progress_duration: Option<Duration>,
    close_on_press: bool,
    on_press: Option<Callback>,
    timing: AnimationConfig,
    exit: Option<Exit>,
    finished: bool,
}

impl ToastView {
    /// Mounts a view for `record`, anchored at the record's creation time.
    #[must_use]
    pub fn new(record: &Record, timing: AnimationConfig) -> Self {
        let progress_duration = if record.show_progress() {
            record.timed_duration()
        } else {
            None
        };

        Self {
            id: record.id().clone(),
            mounted_at: record.created_at(),
            deadline: record.auto_close_deadline(),
            progress_duration,
            close_on_press: record.close_on_press(),
            on_press: record.on_press().cloned(),
            timing,
            exit: None,
            finished: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    /// When auto-dismiss kicks in, if it is scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn shows_progress(&self) -> bool {
        self.progress_duration.is_some()
    }

    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.exit.is_some() {
            Phase::Exiting
        } else if self.elapsed(now) < self.entrance_time() {
            Phase::Entering
        } else {
            Phase::Idle
        }
    }

    /// Starts the exit animation. Repeated calls are ignored.
    pub fn dismiss(&mut self, now: Instant) {
        if self.exit.is_none() && !self.finished {
            log::trace!("toast {} starts exiting", self.id);
            self.exit = Some(Exit {
                started_at: now,
                from: self.frame(now),
            });
        }
    }

    /// Handles a tap on the toast.
    ///
    /// Dismisses when `close_on_press` is set and always hands back the
    /// `on_press` callback for the caller to run.
    pub fn press(&mut self, now: Instant) -> Option<Callback> {
        if self.close_on_press {
            self.dismiss(now);
        }
        self.on_press.clone()
    }

    /// Advances timers. Returns `true` exactly once, when the exit animation
    /// has completed and the toast should be removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }
        if self.exit.is_none() && self.deadline.is_some_and(|deadline| now >= deadline) {
            self.dismiss(now);
        }
        match self.exit {
            Some(exit) if now.saturating_duration_since(exit.started_at) >= self.timing.exit() => {
                self.finished = true;
                true
            }
            _ => false,
        }
    }

    /// Samples the animated values at `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        let elapsed = self.elapsed(now);
        let progress = self
            .progress_duration
            .map_or(0.0, |duration| timing(elapsed, duration));

        match self.exit {
            Some(exit) => {
                let t = timing(
                    now.saturating_duration_since(exit.started_at),
                    self.timing.exit(),
                );
                Frame {
                    offset_y: lerp(exit.from.offset_y, SLIDE_OFFSET, t),
                    opacity: lerp(exit.from.opacity, 0.0, t),
                    scale: lerp(exit.from.scale, EXIT_SCALE, t),
                    progress,
                }
            }
            None => Frame {
                offset_y: lerp(SLIDE_OFFSET, 0.0, SLIDE.progress(elapsed)),
                opacity: timing(elapsed, self.timing.enter_fade()),
                scale: lerp(ENTER_SCALE, 1.0, SCALE.progress(elapsed)),
                progress,
            },
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.mounted_at)
    }

    fn entrance_time(&self) -> Duration {
        self.timing
            .enter_fade()
            .max(SLIDE.settle_time())
            .max(SCALE.settle_time())
    }
}
