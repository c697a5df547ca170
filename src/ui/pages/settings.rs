//! Settings page
//!
//! Display preferences plus a celebration preview; every control saves
//! through its message immediately.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, text, toggler};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Settings;
use crate::features::celebration::{Category, CelebrationRequest, EffectKind};
use crate::i18n::{Key, Language, Locale};
use crate::ui::pages::page_title;
use crate::ui::theme;
use crate::ui::widgets::section_header;

/// Build the settings page
pub fn view<'a>(settings: &'a Settings, locale: Locale) -> Element<'a, Message> {
    let content = column![
        page_title(locale.get(Key::SettingsTitle), ""),
        Space::new().height(24),
        section_header::view(locale.get(Key::SettingsDisplaySection).to_string(), None),
        display_section(settings, locale),
        Space::new().height(24),
        section_header::view(
            locale.get(Key::SettingsCelebrationSection).to_string(),
            None
        ),
        celebration_section(locale),
    ]
    .width(Fill)
    .padding(Padding::new(40.0).right(48.0));

    scrollable(content)
        .style(theme::page_scrollable)
        .width(Fill)
        .height(Fill)
        .into()
}

fn display_section<'a>(settings: &'a Settings, locale: Locale) -> Element<'a, Message> {
    let languages: Vec<String> = [Language::English, Language::Chinese]
        .iter()
        .map(|l| l.display_name().to_string())
        .collect();
    let current_language = Language::from_code(&settings.display.language)
        .display_name()
        .to_string();

    column![
        setting_row(
            locale.get(Key::SettingsDarkMode),
            None,
            toggler(settings.display.dark_mode)
                .on_toggle(Message::UpdateDarkMode)
                .size(24)
                .into()
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsLanguage),
            None,
            styled_pick_list(languages, Some(current_language), |value| {
                let code = if value == Language::Chinese.display_name() {
                    "zh"
                } else {
                    "en"
                };
                Message::UpdateAppLanguage(code.to_string())
            })
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsReduceMotion),
            Some(locale.get(Key::SettingsReduceMotionDesc)),
            toggler(settings.display.reduce_motion)
                .on_toggle(Message::UpdateReduceMotion)
                .size(24)
                .into()
        ),
    ]
    .spacing(0)
    .into()
}

fn celebration_section<'a>(locale: Locale) -> Element<'a, Message> {
    let preview = CelebrationRequest::new(
        Category::Birthday,
        locale.get_with(Key::HappyBirthdayTitle, "Luna"),
    )
    .subtitle(locale.get(Key::HappyBirthdaySubtitle))
    .effect(EffectKind::Stars);

    column![setting_row(
        locale.get(Key::SettingsPreviewCelebration),
        Some(locale.get(Key::SettingsPreviewCelebrationDesc)),
        button(text(locale.get(Key::SettingsPreviewButton)).size(12))
            .padding([6, 20])
            .style(theme::secondary_button)
            .on_press(Message::Celebrate(preview))
            .into()
    )]
    .spacing(0)
    .into()
}

fn setting_row<'a>(
    label: &str,
    description: Option<&str>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label_text = label.to_string();
    let desc_text = description.map(|d| d.to_string());

    let label_section: Element<'a, Message> = if let Some(desc) = desc_text {
        column![
            text(label_text).size(15).style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
            text(desc).size(12).style(|theme| text::Style {
                color: Some(theme::text_muted(theme))
            }),
        ]
        .spacing(4)
        .into()
    } else {
        column![text(label_text).size(15).style(|theme| text::Style {
            color: Some(theme::text_primary(theme))
        })]
        .into()
    };

    container(
        row![label_section, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([16, 0])
    .into()
}

fn divider<'a>() -> Element<'a, Message> {
    container(Space::new().width(Fill).height(1))
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .into()
}

fn styled_pick_list<'a, F>(
    options: Vec<String>,
    selected: Option<String>,
    on_selected: F,
) -> Element<'a, Message>
where
    F: Fn(String) -> Message + 'a,
{
    pick_list(options, selected, on_selected)
        .style(theme::settings_pick_list)
        .menu_style(theme::settings_pick_list_menu)
        .text_size(13)
        .padding([6, 12])
        .into()
}
