//! Page components - one module per sidebar destination

pub mod fan_tags;
pub mod health;
pub mod memory_tags;
pub mod overview;
pub mod settings;

use iced::Element;
use iced::widget::{column, text};

use crate::app::Message;
use crate::ui::theme;

/// Shared page header: large title with a muted subtitle
pub(crate) fn page_title<'a>(title: &str, subtitle: &str) -> Element<'a, Message> {
    column![
        text(title.to_string())
            .size(28)
            .font(iced::Font {
                weight: theme::BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        text(subtitle.to_string())
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ]
    .spacing(6)
    .into()
}
