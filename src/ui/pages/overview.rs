//! Overview page
//!
//! Landing page: stat cards over demo data, the upcoming-celebrations list
//! with per-row Celebrate buttons, and quick actions covering the overlay
//! modes that have no natural occasion (sticky card, fireworks show).

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::celebration::{Category, CelebrationRequest, EffectKind};
use crate::i18n::{Key, Locale};
use crate::roster::{Occasion, OccasionKind, Roster};
use crate::ui::pages::page_title;
use crate::ui::theme::{self, MEDIUM_WEIGHT};
use crate::ui::widgets::{self, section_header};

/// How many occasions the upcoming list shows
const UPCOMING_LIMIT: usize = 6;

/// Build the overview page
pub fn view<'a>(roster: &'a Roster, locale: Locale) -> Element<'a, Message> {
    let today = chrono::Local::now().date_naive();

    let stats = row![
        widgets::stat_card(
            crate::ui::icons::HOME,
            theme::ACCENT,
            roster.members.len().to_string(),
            locale.get(Key::StatMembers).to_string(),
        ),
        widgets::stat_card(
            crate::ui::icons::ACTIVITY,
            theme::success(&iced::Theme::Dark),
            "1,284".to_string(),
            locale.get(Key::StatActiveFans).to_string(),
        ),
        widgets::stat_card(
            crate::ui::icons::TAG,
            theme::warning(&iced::Theme::Dark),
            roster.fan_tags.len().to_string(),
            locale.get(Key::StatTagsAwarded).to_string(),
        ),
        widgets::stat_card(
            crate::ui::icons::BOOKMARK,
            theme::info(&iced::Theme::Dark),
            "42d".to_string(),
            locale.get(Key::StatUptime).to_string(),
        ),
    ]
    .spacing(16);

    let mut upcoming = column![].spacing(4);
    for occasion in roster.upcoming_occasions(today, UPCOMING_LIMIT) {
        upcoming = upcoming.push(occasion_row(roster, &occasion, locale));
    }

    let upcoming_card = container(upcoming)
        .width(Fill)
        .padding(10)
        .style(theme::card);

    let quick_actions = row![
        quick_action(
            locale.get(Key::QuickStickyCard),
            locale.get(Key::QuickStickyCardDesc),
            locale.get(Key::CelebrateNow),
            CelebrationRequest::new(Category::Custom, locale.get(Key::StickyDemoTitle))
                .subtitle(locale.get(Key::StickyDemoSubtitle))
                .icon("📌")
                .sticky(),
        ),
        quick_action(
            locale.get(Key::QuickFireworks),
            locale.get(Key::QuickFireworksDesc),
            locale.get(Key::CelebrateNow),
            CelebrationRequest::new(Category::Achievement, locale.get(Key::AchievementTitle))
                .subtitle(locale.get(Key::AchievementSubtitle))
                .effect(EffectKind::Fireworks),
        ),
    ]
    .spacing(16);

    let content = column![
        page_title(locale.get(Key::OverviewTitle), locale.get(Key::OverviewSubtitle)),
        Space::new().height(24),
        stats,
        Space::new().height(28),
        section_header::view(locale.get(Key::UpcomingCelebrations).to_string(), None),
        Space::new().height(12),
        upcoming_card,
        Space::new().height(28),
        section_header::view(locale.get(Key::QuickActions).to_string(), None),
        Space::new().height(12),
        quick_actions,
    ]
    .width(Fill)
    .padding(Padding::new(40.0).right(48.0));

    scrollable(content)
        .style(theme::page_scrollable)
        .width(Fill)
        .height(Fill)
        .into()
}

/// One row of the upcoming list with its Celebrate button
fn occasion_row<'a>(
    roster: &'a Roster,
    occasion: &Occasion,
    locale: Locale,
) -> Element<'a, Message> {
    let when = if occasion.days_until == 0 {
        locale.get(Key::OccasionToday).to_string()
    } else {
        locale.get_with(Key::OccasionInDays, &occasion.days_until.to_string())
    };

    let (glyph, request) = match &occasion.kind {
        OccasionKind::Birthday { member_id } => {
            let name = roster
                .member(*member_id)
                .map(|m| m.name.as_str())
                .unwrap_or_default();
            (
                "🎂",
                CelebrationRequest::new(
                    Category::Birthday,
                    locale.get_with(Key::HappyBirthdayTitle, name),
                )
                .subtitle(locale.get(Key::HappyBirthdaySubtitle))
                .effect(EffectKind::Stars),
            )
        }
        OccasionKind::Festival => (
            "🎊",
            CelebrationRequest::new(Category::Festival, occasion.label.clone())
                .subtitle(locale.get(Key::FestivalSubtitle))
                .effect(EffectKind::Fireworks),
        ),
    };

    row![
        text(glyph).size(18),
        Space::new().width(12),
        text(occasion.label.clone())
            .size(14)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        Space::new().width(Fill),
        text(when).size(12).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
        Space::new().width(16),
        button(text(locale.get(Key::CelebrateNow)).size(12))
            .padding([6, 16])
            .style(theme::primary_button)
            .on_press(Message::Celebrate(request)),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(8.0).left(12.0).right(8.0))
    .into()
}

/// Quick action card: title, description, and one trigger button
fn quick_action<'a>(
    title: &str,
    description: &str,
    action: &str,
    request: CelebrationRequest,
) -> Element<'a, Message> {
    let body = column![
        text(title.to_string())
            .size(15)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        text(description.to_string())
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        Space::new().height(14),
        button(text(action.to_string()).size(12))
            .padding([6, 18])
            .style(theme::secondary_button)
            .on_press(Message::Celebrate(request)),
    ]
    .spacing(4);

    container(body)
        .width(Fill)
        .padding(18)
        .style(theme::card)
        .into()
}
