//! Left sidebar navigation component
//! Dark gray panel with logo and the page menu

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

/// Navigation menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Overview,
    Health,
    FanTags,
    MemoryTags,
    Settings,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Overview,
        NavItem::Health,
        NavItem::FanTags,
        NavItem::MemoryTags,
        NavItem::Settings,
    ];

    pub fn i18n_key(&self) -> Key {
        match self {
            NavItem::Overview => Key::NavOverview,
            NavItem::Health => Key::NavHealth,
            NavItem::FanTags => Key::NavFanTags,
            NavItem::MemoryTags => Key::NavMemoryTags,
            NavItem::Settings => Key::NavSettings,
        }
    }

    pub fn icon_svg(&self) -> &'static str {
        match self {
            NavItem::Overview => crate::ui::icons::HOME,
            NavItem::Health => crate::ui::icons::ACTIVITY,
            NavItem::FanTags => crate::ui::icons::TAG,
            NavItem::MemoryTags => crate::ui::icons::BOOKMARK,
            NavItem::Settings => crate::ui::icons::SETTINGS,
        }
    }
}

/// Build the sidebar component
pub fn view(active_nav: NavItem, locale: Locale) -> Element<'static, Message> {
    // Logo section
    let logo = row![
        container(
            svg(svg::Handle::from_memory(
                crate::ui::icons::SPARK.as_bytes()
            ))
            .width(24)
            .height(24)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT),
            })
        )
        .padding(2),
        Space::new().width(10),
        text(locale.get(Key::AppName))
            .size(18)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(8.0).left(10.0));

    let mut menu = column![].spacing(4);
    for item in NavItem::ALL {
        menu = menu.push(nav_button(item, item == active_nav, locale));
    }

    container(
        column![logo, Space::new().height(24), menu]
            .width(Fill)
            .padding(14),
    )
    .width(220)
    .height(Fill)
    .style(theme::sidebar)
    .into()
}

fn nav_button(item: NavItem, active: bool, locale: Locale) -> Element<'static, Message> {
    let icon = svg(svg::Handle::from_memory(item.icon_svg().as_bytes()))
        .width(18)
        .height(18)
        .style(move |theme: &iced::Theme, _status| svg::Style {
            color: Some(if active {
                theme::text_primary(theme)
            } else {
                theme::text_muted(theme)
            }),
        });

    let label = text(locale.get(item.i18n_key()))
        .size(14)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        });

    button(
        row![icon, Space::new().width(12), label]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding(Padding::new(10.0).left(12.0))
    .style(if active {
        theme::nav_item_active
    } else {
        theme::nav_item
    })
    .on_press(Message::Navigate(item))
    .into()
}
