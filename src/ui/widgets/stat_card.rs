//! Stat card widget
//!
//! Headline figure with a tinted icon bubble, used on the overview grid.
//! This is a reusable widget that does not depend on application-specific types.

use iced::widget::{column, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a stat card element
///
/// # Arguments
/// * `icon` - SVG source for the bubble icon
/// * `accent` - Tint for the bubble and icon
/// * `value` - Headline figure
/// * `label` - Caption under the figure
pub fn view<'a, Message: 'a>(
    icon: &'static str,
    accent: Color,
    value: String,
    label: String,
) -> Element<'a, Message> {
    let bubble = container(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(20)
            .height(20)
            .style(move |_theme, _status| svg::Style {
                color: Some(accent),
            }),
    )
    .width(42)
    .height(42)
    .center_x(42)
    .center_y(42)
    .style(move |_theme| container::Style {
        background: Some(iced::Background::Color(Color { a: 0.16, ..accent })),
        border: iced::Border {
            radius: 21.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let figures = column![
        text(value)
            .size(24)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        text(label).size(12).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .spacing(2);

    container(
        row![bubble, figures]
            .spacing(14)
            .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(16)
    .style(theme::card)
    .into()
}
