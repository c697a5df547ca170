//! Celebration overlay component
//!
//! Full-window layer stacking a dimmed backdrop, the gradient card, and the
//! confetti canvas. The backdrop and close button both emit
//! `CelebrationDismiss`; the card itself is opaque so clicks on it go
//! nowhere. `presentation` is the eased card value (0.0 hidden, 1.0 shown)
//! and multiplies every alpha, which renders both the entry pop and the
//! fade-out without any widget-level opacity support.

use iced::widget::{Space, button, column, container, mouse_area, opaque, row, stack, svg, text};
use iced::{Alignment, Color, Element, Fill, Shadow, Vector};

use crate::app::Message;
use crate::features::celebration::Celebration;
use crate::ui::effects::confetti::{ConfettiField, view_confetti};
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Backdrop opacity when the request does not override it
const DEFAULT_BACKDROP: f32 = 0.55;
/// Card corner radius when the request does not override it
const DEFAULT_RADIUS: f32 = 20.0;

/// Build the celebration overlay
pub fn view<'a>(
    celebration: &'a Celebration,
    field: &'a ConfettiField,
    presentation: f32,
) -> Element<'a, Message> {
    let style = celebration.style;
    let alpha = presentation.clamp(0.0, 1.0);

    let text_color = faded(style.text_color.unwrap_or(Color::WHITE), alpha);
    let radius = style.corner_radius.unwrap_or(DEFAULT_RADIUS);
    let backdrop_opacity = style.backdrop_opacity.unwrap_or(DEFAULT_BACKDROP) * alpha;

    // Close button, frosted so it reads on any gradient
    let close = button(
        svg(svg::Handle::from_memory(crate::ui::icons::CLOSE.as_bytes()))
            .width(14)
            .height(14)
            .style(move |_theme, _status| svg::Style {
                color: Some(text_color),
            }),
    )
    .padding(8)
    .style(move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => 0.3,
            button::Status::Pressed => 0.4,
            _ => 0.18,
        };
        button::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                1.0,
                1.0,
                1.0,
                bg * alpha,
            ))),
            border: iced::Border {
                radius: 50.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .on_press(Message::CelebrationDismiss);

    let mut body = column![].spacing(10).align_x(Alignment::Center);
    if let Some(glyph) = &celebration.glyph {
        body = body.push(text(glyph).size(54));
    }
    body = body.push(
        text(&celebration.title)
            .size(26)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .color(text_color)
            .center(),
    );
    if let Some(subtitle) = &celebration.subtitle {
        body = body.push(
            text(subtitle)
                .size(15)
                .color(faded(text_color, 0.85))
                .center(),
        );
    }

    let gradient = celebration.theme.gradient.map(|stop| faded(stop, alpha));
    let card = container(
        column![
            row![Space::new().width(Fill), close],
            container(body)
                .width(Fill)
                .padding(iced::Padding::new(12.0).bottom(28.0)),
        ],
    )
    .width(420)
    .padding(14)
    .style(move |_theme| container::Style {
        background: Some(theme::celebration_gradient(gradient)),
        border: iced::Border {
            radius: radius.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35 * alpha),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 40.0,
        },
        ..Default::default()
    });

    // Opaque card over a click-to-dismiss backdrop; confetti draws on top
    // and captures nothing.
    let backdrop = mouse_area(
        container(opaque(card))
            .center(Fill)
            .style(move |theme| container::Style {
                background: Some(iced::Background::Color(theme::overlay_backdrop(
                    theme,
                    backdrop_opacity,
                ))),
                ..Default::default()
            }),
    )
    .on_press(Message::CelebrationDismiss);

    stack![backdrop, view_confetti(field, alpha)]
        .width(Fill)
        .height(Fill)
        .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
