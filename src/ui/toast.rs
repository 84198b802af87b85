// SPDX-License-Identifier: MPL-2.0
//! Toast widgets.
//!
//! Toasts are rendered as solid cards colored by type, with a glyph, an
//! optional title and message, and an optional progress bar along the
//! bottom. Each toast is its own layer of the overlay, placed by position.

use crate::config::{EDGE_OFFSET, SIDE_INSET, SLIDE_OFFSET};
use crate::notifications::{Frame, Layer, Message, Position, Record, ToastType, ToastView};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles::toast as styles;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, font, Color, Element, Font, Length, Padding};
use std::time::Instant;

/// Resolution of the progress bar, in portions of the card width.
const PROGRESS_STEPS: u16 = 1000;

/// Color and glyph of a toast type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub color: Color,
    pub glyph: &'static str,
}

impl Variant {
    #[must_use]
    pub fn of(toast_type: ToastType) -> Self {
        match toast_type {
            ToastType::Success => Self {
                color: palette::SUCCESS_500,
                glyph: "✓",
            },
            ToastType::Error => Self {
                color: palette::ERROR_500,
                glyph: "✕",
            },
            ToastType::Warning => Self {
                color: palette::WARNING_500,
                glyph: "!",
            },
            ToastType::Info => Self {
                color: palette::INFO_500,
                glyph: "i",
            },
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card at the given animation frame.
    pub fn view<'a>(record: &Record, frame: Frame, show_progress: bool) -> Element<'a, Message> {
        let variant = Variant::of(record.toast_type());
        let alpha = frame.opacity;

        let mut lines = Column::new().spacing(spacing::XXS);
        if let Some(title) = record.title() {
            lines = lines.push(
                Text::new(title.to_owned())
                    .size(typography::TITLE)
                    .font(Font {
                        weight: font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .color(styles::text_color(alpha, opacity::OPAQUE)),
            );
        }
        if let Some(message) = record.message() {
            lines = lines.push(
                Text::new(message.to_owned())
                    .size(typography::BODY)
                    .color(styles::text_color(alpha, opacity::TEXT_SECONDARY)),
            );
        }

        let icon = Container::new(
            Text::new(variant.glyph)
                .size(typography::ICON)
                .color(styles::text_color(alpha, opacity::OPAQUE)),
        )
        .width(Length::Fixed(sizing::ICON_MD))
        .align_x(alignment::Horizontal::Center);

        // Layout: [glyph] [title / message]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(Container::new(lines).width(Length::Fill));

        let mut body = Column::new().push(Container::new(content).padding(spacing::MD));
        if show_progress {
            body = body.push(progress_bar(frame.progress, alpha));
        }

        button(body)
            .padding(0.0)
            .width(Length::Fixed(sizing::TOAST_WIDTH * frame.scale.max(0.0)))
            .on_press(Message::Pressed(record.id().clone()))
            .style(styles::card(variant.color, alpha))
            .into()
    }

    /// Renders the overlay with every active toast, oldest at the bottom of the stack.
    ///
    /// Only the cards themselves react to the pointer; the rest of the
    /// overlay lets events through to the application below.
    pub fn view_overlay<'a>(
        toasts: &[Record],
        layer: &Layer,
        now: Instant,
    ) -> Element<'a, Message> {
        if toasts.is_empty() {
            // Empty space that takes no room
            return Space::new()
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let stack = toasts.iter().fold(Stack::new(), |stack, record| {
            let (frame, show_progress) = match layer.view(record.id()) {
                Some(view) => (view.frame(now), view.shows_progress()),
                None => {
                    // Shown since the last frame, not mounted yet.
                    let view = ToastView::new(record, layer.timing());
                    (view.frame(now), view.shows_progress())
                }
            };
            stack.push(Self::placed(
                Self::view(record, frame, show_progress),
                record.position(),
                frame.offset_y,
            ))
        });

        stack.width(Length::Fill).height(Length::Fill).into()
    }

    /// Positions a card on screen, shifted vertically by `offset_y`.
    fn placed<'a>(
        card: Element<'a, Message>,
        position: Position,
        offset_y: f32,
    ) -> Element<'a, Message> {
        let (align_y, padding) = placement(position, offset_y);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(align_y)
            .padding(padding)
            .into()
    }
}

/// Vertical alignment and padding placing a card for `position`.
///
/// Negative offsets move the card up. Padding cannot pull a card past the
/// top edge, so top cards travel the full slide scaled into the gap between
/// the edge and their resting place.
fn placement(position: Position, offset_y: f32) -> (alignment::Vertical, Padding) {
    let sides = Padding::ZERO.left(SIDE_INSET).right(SIDE_INSET);
    match position {
        Position::Top => (
            alignment::Vertical::Top,
            sides.top((EDGE_OFFSET * (1.0 - offset_y / SLIDE_OFFSET)).max(0.0)),
        ),
        Position::Bottom => (
            alignment::Vertical::Bottom,
            sides.bottom((EDGE_OFFSET - offset_y).max(0.0)),
        ),
        // Padding on one side of a centered card moves it by half as much.
        Position::Center => (
            alignment::Vertical::Center,
            sides
                .top((2.0 * offset_y).max(0.0))
                .bottom((-2.0 * offset_y).max(0.0)),
        ),
    }
}

fn progress_bar<'a>(fraction: f32, alpha: f32) -> Element<'a, Message> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // fraction is clamped to [0, 1], so the product fits in u16
    let filled = (fraction.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
    let rest = PROGRESS_STEPS - filled;

    let mut bar = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT));
    if filled > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::progress_fill(alpha)),
        );
    }
    if rest > 0 {
        bar = bar.push(Space::new().width(Length::FillPortion(rest)));
    }
    bar.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastDefaults;
    use crate::notifications::{Options, Store};

    #[test]
    fn variants_follow_type() {
        assert_eq!(Variant::of(ToastType::Success).color, palette::SUCCESS_500);
        assert_eq!(Variant::of(ToastType::Error).color, palette::ERROR_500);
        assert_eq!(Variant::of(ToastType::Warning).color, palette::WARNING_500);
        assert_eq!(Variant::of(ToastType::Info).color, palette::INFO_500);
    }

    #[test]
    fn unknown_type_name_renders_as_info() {
        assert_eq!(
            Variant::of(ToastType::from_name("mystery")),
            Variant::of(ToastType::Info)
        );
    }

    #[test]
    fn resting_cards_sit_at_the_edge_offset() {
        let (align, padding) = placement(Position::Top, 0.0);
        assert_eq!(align, alignment::Vertical::Top);
        assert_eq!(padding.top, EDGE_OFFSET);

        let (align, padding) = placement(Position::Bottom, 0.0);
        assert_eq!(align, alignment::Vertical::Bottom);
        assert_eq!(padding.bottom, EDGE_OFFSET);

        let (align, padding) = placement(Position::Center, 0.0);
        assert_eq!(align, alignment::Vertical::Center);
        assert_eq!(padding.top, 0.0);
        assert_eq!(padding.bottom, 0.0);
    }

    #[test]
    fn entering_cards_start_above_their_rest() {
        let (_, top) = placement(Position::Top, SLIDE_OFFSET);
        assert_eq!(top.top, 0.0);

        let (_, bottom) = placement(Position::Bottom, SLIDE_OFFSET);
        assert!(bottom.bottom > EDGE_OFFSET);

        let (_, center) = placement(Position::Center, SLIDE_OFFSET);
        assert!(center.bottom > 0.0);
    }

    #[test]
    fn top_cards_move_through_the_whole_slide() {
        let paddings: Vec<f32> = [1.0, 0.75, 0.5, 0.25, 0.0]
            .iter()
            .map(|share| placement(Position::Top, SLIDE_OFFSET * share).1.top)
            .collect();

        assert_eq!(paddings.first(), Some(&0.0));
        assert_eq!(paddings.last(), Some(&EDGE_OFFSET));
        assert!(paddings.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn unknown_position_name_is_centered() {
        let (align, _) = placement(Position::from_name("sideways"), 0.0);
        assert_eq!(align, alignment::Vertical::Center);
    }

    #[test]
    fn overlay_renders_unmounted_toasts() {
        let mut store = Store::with_defaults(ToastDefaults::default());
        store.show(Options::success().title("Saved"));
        store.show(Options::error().message("Failed"));

        // Building the element tree must not panic for records with no view.
        let _ = Toast::view_overlay(store.toasts(), &Layer::default(), Instant::now());
        let _ = Toast::view_overlay(&[], &Layer::default(), Instant::now());
    }
}
