//! Chip widget
//!
//! Small rounded pill with a colored dot, used for service statuses and
//! tag rarities.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Color, Element, Padding};

/// Create a chip element
///
/// # Arguments
/// * `label` - Chip text
/// * `accent` - Dot and text tint
pub fn view_chip<'a, Message: 'a>(label: String, accent: Color) -> Element<'a, Message> {
    let dot = container(Space::new())
        .width(6)
        .height(6)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(accent)),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    container(
        row![dot, Space::new().width(6), text(label).size(11).color(accent)]
            .align_y(Alignment::Center),
    )
    .padding(Padding::new(3.0).left(8.0).right(10.0))
    .style(move |_theme| container::Style {
        background: Some(iced::Background::Color(Color { a: 0.14, ..accent })),
        border: iced::Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
