//! Section header widget
//!
//! Section title with an optional muted caption on the trailing edge.
//! Uses a generic Message type so it can be reused across pages.

use iced::widget::{Space, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `caption` - Optional right-aligned annotation
pub fn view<'a, Message: 'a>(title: String, caption: Option<String>) -> Element<'a, Message> {
    let title_text = text(title)
        .size(18)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let caption_text: Element<'a, Message> = match caption {
        Some(caption) => text(caption)
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into(),
        None => Space::new().width(0).into(),
    };

    row![title_text, Space::new().width(Fill), caption_text]
        .align_y(Alignment::Center)
        .into()
}
