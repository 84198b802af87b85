// SPDX-License-Identifier: MPL-2.0
//! Toast card and progress bar styles.
//!
//! Every style takes the toast's current opacity so fading applies to the
//! background, text and shadow alike.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Card style: solid accent background, white text, soft shadow.
///
/// The card dims while pressed.
pub fn card(accent: Color, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Pressed => alpha * opacity::PRESSED,
            button::Status::Active | button::Status::Hovered | button::Status::Disabled => alpha,
        };

        button::Style {
            background: Some(Background::Color(faded(accent, alpha))),
            text_color: faded(palette::WHITE, alpha),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: faded(shadow::TOAST.color, alpha),
                ..shadow::TOAST
            },
            snap: true,
        }
    }
}

/// Filled part of the progress bar.
pub fn progress_fill(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PROGRESS_TRACK * alpha.clamp(0.0, 1.0),
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Text color at the given opacity; `emphasis` scales it further for secondary text.
#[must_use]
pub fn text_color(alpha: f32, emphasis: f32) -> Color {
    faded(palette::WHITE, alpha * emphasis)
}
