//! Usage meter widget
//!
//! Labelled utilization bar with threshold coloring: calm below 60%,
//! warning below 85%, critical from there up.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Color, Element, Fill, Length, Theme};

use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Color for a utilization ratio
pub fn meter_color(theme: &Theme, ratio: f32) -> Color {
    if ratio < 0.6 {
        theme::success(theme)
    } else if ratio < 0.85 {
        theme::warning(theme)
    } else {
        theme::danger(theme)
    }
}

/// Create a labelled meter element
///
/// # Arguments
/// * `label` - Name of the measured resource
/// * `ratio` - Utilization in `0.0..=1.0`; values outside are clamped
pub fn view_meter_bar<'a, Message: 'a>(label: String, ratio: f32) -> Element<'a, Message> {
    let ratio = ratio.clamp(0.0, 1.0);
    let permille = (ratio * 1000.0).round() as u16;

    let fill = container(Space::new())
        .height(Fill)
        .style(move |theme: &Theme| container::Style {
            background: Some(iced::Background::Color(meter_color(theme, ratio))),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let bar: Element<'a, Message> = match permille {
        0 => Space::new().width(Fill).into(),
        1000 => fill.width(Fill).into(),
        _ => row![
            fill.width(Length::FillPortion(permille)),
            Space::new().width(Length::FillPortion(1000 - permille)),
        ]
        .into(),
    };

    let track = container(bar)
        .width(Fill)
        .height(6)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let readout = text(format!("{:.0}%", ratio * 100.0))
        .size(12)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(move |theme| text::Style {
            color: Some(meter_color(theme, ratio)),
        });

    column![
        row![
            text(label).size(12).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().width(Fill),
            readout,
        ]
        .align_y(Alignment::Center),
        track,
    ]
    .spacing(6)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calm_below_sixty_percent() {
        let theme = Theme::Dark;
        assert_eq!(meter_color(&theme, 0.0), theme::success(&theme));
        assert_eq!(meter_color(&theme, 0.59), theme::success(&theme));
    }

    #[test]
    fn warning_band_up_to_eighty_five() {
        let theme = Theme::Dark;
        assert_eq!(meter_color(&theme, 0.6), theme::warning(&theme));
        assert_eq!(meter_color(&theme, 0.84), theme::warning(&theme));
    }

    #[test]
    fn critical_from_eighty_five() {
        let theme = Theme::Dark;
        assert_eq!(meter_color(&theme, 0.85), theme::danger(&theme));
        assert_eq!(meter_color(&theme, 1.0), theme::danger(&theme));
    }
}
