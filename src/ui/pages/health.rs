//! System health page
//!
//! Static infrastructure mock: one card per service with utilization meters,
//! a status chip, and a client-side expand/collapse for detail lines.

use std::collections::HashSet;

use iced::widget::{Space, button, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::roster::{ServiceHealth, ServiceStatus};
use crate::ui::pages::page_title;
use crate::ui::theme::{self, MEDIUM_WEIGHT};
use crate::ui::widgets::{view_chip, view_meter_bar};

/// Build the system health page
pub fn view<'a>(
    services: &'a [ServiceHealth],
    expanded: &HashSet<usize>,
    locale: Locale,
) -> Element<'a, Message> {
    let mut cards = column![].spacing(16);
    for (index, service) in services.iter().enumerate() {
        cards = cards.push(service_card(index, service, expanded.contains(&index), locale));
    }

    let content = column![
        page_title(locale.get(Key::HealthTitle), locale.get(Key::HealthSubtitle)),
        Space::new().height(24),
        cards,
    ]
    .width(Fill)
    .padding(Padding::new(40.0).right(48.0));

    scrollable(content)
        .style(theme::page_scrollable)
        .width(Fill)
        .height(Fill)
        .into()
}

fn status_chip<'a>(status: ServiceStatus, locale: Locale) -> Element<'a, Message> {
    let theme_ref = iced::Theme::Dark;
    let (key, accent) = match status {
        ServiceStatus::Healthy => (Key::StatusHealthy, theme::success(&theme_ref)),
        ServiceStatus::Degraded => (Key::StatusDegraded, theme::warning(&theme_ref)),
        ServiceStatus::Down => (Key::StatusDown, theme::danger(&theme_ref)),
    };
    view_chip(locale.get(key).to_string(), accent)
}

fn service_card<'a>(
    index: usize,
    service: &'a ServiceHealth,
    expanded: bool,
    locale: Locale,
) -> Element<'a, Message> {
    let header = row![
        text(&service.name)
            .size(16)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        Space::new().width(12),
        status_chip(service.status, locale),
        Space::new().width(Fill),
        toggle_button(index, expanded, locale),
    ]
    .align_y(Alignment::Center);

    let meters = row![
        view_meter_bar(locale.get(Key::MeterCpu).to_string(), service.cpu),
        view_meter_bar(locale.get(Key::MeterMemory).to_string(), service.memory),
        view_meter_bar(locale.get(Key::MeterDisk).to_string(), service.disk),
    ]
    .spacing(24);

    let mut body = column![header, Space::new().height(16), meters].width(Fill);

    if expanded {
        let mut details = column![].spacing(6);
        for (key, value) in &service.details {
            details = details.push(
                row![
                    text(key.clone()).size(12).style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
                    Space::new().width(Fill),
                    text(value.clone()).size(12).style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme)),
                    }),
                ]
                .width(260),
            );
        }
        body = body.push(Space::new().height(16)).push(details);
    }

    container(body)
        .width(Fill)
        .padding(18)
        .style(theme::card)
        .into()
}

fn toggle_button<'a>(index: usize, expanded: bool, locale: Locale) -> Element<'a, Message> {
    let (label, chevron) = if expanded {
        (Key::HideDetails, crate::ui::icons::CHEVRON_UP)
    } else {
        (Key::ShowDetails, crate::ui::icons::CHEVRON_DOWN)
    };

    button(
        row![
            text(locale.get(label)).size(12),
            Space::new().width(6),
            svg(svg::Handle::from_memory(chevron.as_bytes()))
                .width(14)
                .height(14)
                .style(|theme: &iced::Theme, _status| svg::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .align_y(Alignment::Center),
    )
    .padding([4, 10])
    .style(theme::text_button)
    .on_press(Message::ServiceDetailsToggled(index))
    .into()
}
