//! Fan tag registry page
//!
//! Table of awarded tags with a client-side substring search over the tag
//! name and holder (the filter itself lives in `crate::roster`).

use iced::widget::{Space, column, container, row, scrollable, svg, text, text_input};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::roster::{FanTag, Rarity, filter_fan_tags};
use crate::ui::pages::page_title;
use crate::ui::theme::{self, MEDIUM_WEIGHT};
use crate::ui::widgets::view_chip;

/// Build the fan tag registry page
pub fn view<'a>(tags: &'a [FanTag], query: &str, locale: Locale) -> Element<'a, Message> {
    let search = text_input(locale.get(Key::FanTagSearchPlaceholder), query)
        .on_input(Message::FanTagSearchChanged)
        .size(13)
        .padding([8, 12])
        .style(theme::input_field)
        .width(320);

    let matching = filter_fan_tags(tags, query);

    let table: Element<'a, Message> = if matching.is_empty() {
        container(
            row![
                svg(svg::Handle::from_memory(
                    crate::ui::icons::SEARCH.as_bytes()
                ))
                .width(16)
                .height(16)
                .style(|theme: &iced::Theme, _status| svg::Style {
                    color: Some(theme::text_muted(theme)),
                }),
                Space::new().width(10),
                text(locale.get(Key::NoTagsFound))
                    .size(13)
                    .style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
            ]
            .align_y(Alignment::Center),
        )
        .width(Fill)
        .padding(32)
        .center_x(Fill)
        .style(theme::card)
        .into()
    } else {
        let mut rows = column![header_row(locale)].spacing(2);
        for tag in matching {
            rows = rows.push(tag_row(tag, locale));
        }
        container(rows).width(Fill).padding(10).style(theme::card).into()
    };

    let content = column![
        page_title(locale.get(Key::FanTagsTitle), locale.get(Key::FanTagsSubtitle)),
        Space::new().height(24),
        search,
        Space::new().height(16),
        table,
    ]
    .width(Fill)
    .padding(Padding::new(40.0).right(48.0));

    scrollable(content)
        .style(theme::page_scrollable)
        .width(Fill)
        .height(Fill)
        .into()
}

fn header_row<'a>(locale: Locale) -> Element<'a, Message> {
    let header = |key| {
        text(locale.get(key))
            .size(11)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
    };

    row![
        container(header(Key::ColumnTag)).width(Length::FillPortion(3)),
        container(header(Key::ColumnHolder)).width(Length::FillPortion(3)),
        container(header(Key::ColumnRarity)).width(Length::FillPortion(2)),
        container(header(Key::ColumnAwarded)).width(Length::FillPortion(2)),
        container(header(Key::ColumnStatus)).width(Length::FillPortion(2)),
    ]
    .padding(Padding::new(8.0).left(12.0).right(12.0))
    .into()
}

fn tag_row<'a>(tag: &'a FanTag, locale: Locale) -> Element<'a, Message> {
    let theme_ref = iced::Theme::Dark;
    let (rarity_key, rarity_accent) = match tag.rarity {
        Rarity::Common => (Key::RarityCommon, theme::text_muted(&theme_ref)),
        Rarity::Rare => (Key::RarityRare, theme::info(&theme_ref)),
        Rarity::Epic => (Key::RarityEpic, theme::ACCENT),
        Rarity::Legendary => (Key::RarityLegendary, theme::warning(&theme_ref)),
    };
    let (status_key, status_accent) = if tag.retired {
        (Key::TagRetired, theme::text_muted(&theme_ref))
    } else {
        (Key::TagActive, theme::success(&theme_ref))
    };

    row![
        container(
            text(&tag.name)
                .size(13)
                .font(iced::Font {
                    weight: MEDIUM_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
        )
        .width(Length::FillPortion(3)),
        container(text(&tag.holder).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }))
        .width(Length::FillPortion(3)),
        container(view_chip(locale.get(rarity_key).to_string(), rarity_accent))
            .width(Length::FillPortion(2)),
        container(
            text(tag.awarded.format("%Y-%m-%d").to_string())
                .size(12)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                })
        )
        .width(Length::FillPortion(2)),
        container(view_chip(locale.get(status_key).to_string(), status_accent))
            .width(Length::FillPortion(2)),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(8.0).left(12.0).right(12.0))
    .into()
}
