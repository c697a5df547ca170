//! Notice widget
//!
//! Transient status notices in a dark minimalist style: surface card with a
//! tinted glyph bubble, accent color kept off the background.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Color, Element, Padding};

use crate::ui::theme;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Accent color for this severity (used for the glyph only)
    pub fn accent_color(&self) -> Color {
        match self {
            Severity::Success => theme::success(&iced::Theme::Dark),
            Severity::Error => theme::danger(&iced::Theme::Dark),
        }
    }

    /// Glyph for this severity
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✗",
        }
    }
}

/// Transient notice data
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Build a notice card
pub fn view_notice<'a, Message: 'a>(notice: &Notice) -> Element<'a, Message> {
    let accent = notice.severity.accent_color();
    let message = notice.message.clone();

    let glyph_bubble = container(text(notice.severity.glyph()).size(12).color(accent))
        .width(22)
        .height(22)
        .center_x(22)
        .center_y(22)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(Color { a: 0.15, ..accent })),
            border: iced::Border {
                radius: 11.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let content = row![
        glyph_bubble,
        Space::new().width(10),
        text(message).size(13).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(12.0).left(14.0).right(18.0));

    container(content)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
