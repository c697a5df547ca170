// src/app/view.rs
//! Application view rendering

use iced::widget::{container, row, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::NavItem;
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;

        let sidebar = components::sidebar::view(self.ui.active_nav, locale);

        let page: Element<'_, Message> = match self.ui.active_nav {
            NavItem::Overview => pages::overview::view(&self.roster, locale),
            NavItem::Health => {
                pages::health::view(&self.roster.services, &self.ui.health.expanded, locale)
            }
            NavItem::FanTags => {
                pages::fan_tags::view(&self.roster.fan_tags, &self.ui.fan_tags.query, locale)
            }
            NavItem::MemoryTags => {
                pages::memory_tags::view(&self.roster.memory_tags, &self.ui.memory_tags, locale)
            }
            NavItem::Settings => pages::settings::view(&self.core.settings, locale),
        };

        let base = row![
            sidebar,
            container(page)
                .width(Fill)
                .height(Fill)
                .style(theme::main_content),
        ];

        let mut layers = stack![container(base).width(Fill).height(Fill)];

        // Celebration overlay sits over the whole window while an instance
        // is alive; its presentation value drives entry and fade rendering.
        if let Some(celebration) = &self.ui.overlay.active {
            layers = layers.push(components::celebration_overlay::view(
                celebration,
                &self.ui.overlay.confetti,
                *self.ui.overlay.card.value(),
            ));
        }

        // Corner notice on top of everything
        if let Some(notice) = &self.ui.notice {
            layers = layers.push(
                container(widgets::view_notice(notice))
                    .width(Fill)
                    .height(Fill)
                    .align_x(Alignment::End)
                    .align_y(Alignment::End)
                    .padding(24),
            );
        }

        layers.into()
    }
}
