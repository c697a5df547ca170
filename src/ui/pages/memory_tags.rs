//! Memory tag editor page
//!
//! Master list on the left, draft editor on the right. The draft only
//! touches the roster on Save; Revert reloads it from the saved values.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{MemoryTagsPageState, Message};
use crate::i18n::{Key, Locale};
use crate::roster::MemoryTag;
use crate::ui::pages::page_title;
use crate::ui::theme::{self, MEDIUM_WEIGHT};
use crate::ui::widgets::view_chip;

/// Build the memory tag editor page
pub fn view<'a>(
    tags: &'a [MemoryTag],
    page: &'a MemoryTagsPageState,
    locale: Locale,
) -> Element<'a, Message> {
    let mut list = column![].spacing(4);
    for tag in tags {
        list = list.push(tag_row(tag, page.selected == Some(tag.id), locale));
    }

    let list_card = container(list)
        .width(Fill)
        .padding(10)
        .style(theme::card);

    let editor: Element<'a, Message> = match page.selected {
        Some(_) => editor_card(page, locale),
        None => container(
            text(locale.get(Key::SelectMemoryHint))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .width(Fill)
        .padding(32)
        .center_x(Fill)
        .style(theme::card)
        .into(),
    };

    let content = column![
        page_title(
            locale.get(Key::MemoryTagsTitle),
            locale.get(Key::MemoryTagsSubtitle)
        ),
        Space::new().height(24),
        row![
            container(list_card).width(Fill),
            container(editor).width(Fill),
        ]
        .spacing(20),
    ]
    .width(Fill)
    .padding(Padding::new(40.0).right(48.0));

    scrollable(content)
        .style(theme::page_scrollable)
        .width(Fill)
        .height(Fill)
        .into()
}

fn tag_row<'a>(tag: &'a MemoryTag, selected: bool, locale: Locale) -> Element<'a, Message> {
    let mut labels = row![
        text(&tag.label)
            .size(13)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    ]
    .align_y(Alignment::Center)
    .spacing(8);
    if tag.pinned {
        labels = labels.push(view_chip(
            locale.get(Key::PinnedBadge).to_string(),
            theme::ACCENT,
        ));
    }

    let body = column![
        labels,
        text(&tag.era).size(11).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .spacing(2);

    let pin_label = if tag.pinned {
        Key::UnpinAction
    } else {
        Key::PinAction
    };

    row![
        button(body.width(Fill))
            .padding(Padding::new(8.0).left(12.0))
            .style(if selected {
                theme::nav_item_active
            } else {
                theme::row_button
            })
            .on_press(Message::MemoryTagSelected(tag.id))
            .width(Fill),
        button(text(locale.get(pin_label)).size(11))
            .padding([4, 10])
            .style(theme::text_button)
            .on_press(Message::MemoryPinToggled(tag.id)),
    ]
    .align_y(Alignment::Center)
    .spacing(8)
    .into()
}

fn editor_card<'a>(page: &'a MemoryTagsPageState, locale: Locale) -> Element<'a, Message> {
    let field_label = |key| {
        text(locale.get(key))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
    };

    let body = column![
        field_label(Key::MemoryLabelField),
        text_input("", &page.draft_label)
            .on_input(Message::MemoryLabelChanged)
            .size(13)
            .padding([8, 12])
            .style(theme::input_field),
        Space::new().height(8),
        field_label(Key::MemoryNoteField),
        text_input("", &page.draft_note)
            .on_input(Message::MemoryNoteChanged)
            .size(13)
            .padding([8, 12])
            .style(theme::input_field),
        Space::new().height(16),
        row![
            button(text(locale.get(Key::SaveButton)).size(12))
                .padding([6, 20])
                .style(theme::primary_button)
                .on_press(Message::MemorySave),
            button(text(locale.get(Key::RevertButton)).size(12))
                .padding([6, 20])
                .style(theme::secondary_button)
                .on_press(Message::MemoryRevert),
        ]
        .spacing(10),
    ]
    .spacing(6);

    container(body)
        .width(Fill)
        .padding(18)
        .style(theme::card)
        .into()
}
