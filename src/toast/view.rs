// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the toast surface.
//!
//! The card is pinned at the surface's current animated frame, so the
//! entrance and exit transitions are just successive redraws. Tap handling
//! is only attached while the surface accepts taps.

use super::queue::{Message, ToastQueue};
use super::surface::{ActiveContext, ToastSurface};
use iced::widget::{container, mouse_area, pin, text, Container};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Renders a single toast card, sized to its current frame.
pub fn view_card<'a, C: ActiveContext>(surface: &'a ToastSurface<C>) -> Element<'a, Message> {
    let appearance = surface.appearance();
    let frame = surface.frame();
    let text_frame = surface.text_frame();
    let background = appearance.background;
    let text_color = appearance.text_color;
    let radius = surface.corner_radius();

    let label = text(surface.message())
        .font(appearance.font.face)
        .size(appearance.font.size)
        .color(text_color)
        .width(Length::Fixed(text_frame.width));

    let card = Container::new(label)
        .padding(text_frame.x - frame.x)
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .style(move |_theme: &Theme| card_style(background, text_color, radius));

    if surface.is_interactive() {
        mouse_area(card).on_press(Message::Tapped).into()
    } else {
        card.into()
    }
}

/// Renders the toast overlay for the queue's current surface.
///
/// Meant to be stacked on top of the application content. Returns an empty
/// element when no toast is on screen, including frames where the card is
/// still entirely outside the window.
pub fn view_overlay<'a, C: ActiveContext + Clone>(
    queue: &'a ToastQueue<C>,
) -> Element<'a, Message> {
    match queue.current() {
        Some(surface) if surface.is_on_screen() => {
            let frame = surface.frame();
            pin(view_card(surface))
                .x(frame.x)
                .y(frame.y)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        _ => Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
    }
}

/// Style function for the toast card.
fn card_style(background: Color, text_color: Color, radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}
