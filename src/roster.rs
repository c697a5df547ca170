//! Demo roster data backing the dashboard pages
//!
//! Everything here is deliberately static: the console ships with a small
//! fictional community so every screen renders without a backend. Only the
//! pure helpers (occasion lookup, tag filtering) carry real logic.

use chrono::{Datelike, NaiveDate};

/// A community member tracked by the console
#[derive(Debug, Clone)]
pub struct Member {
    pub id: u64,
    pub name: String,
    /// Birthday as month/day; the year is irrelevant for celebrations
    pub birthday_month: u32,
    pub birthday_day: u32,
    /// Fan level, 1..=10
    pub level: u8,
}

/// A recurring community festival
#[derive(Debug, Clone)]
pub struct Festival {
    pub name: String,
    pub month: u32,
    pub day: u32,
}

/// What an upcoming occasion celebrates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccasionKind {
    Birthday { member_id: u64 },
    Festival,
}

/// One row of the overview page's "upcoming celebrations" list
#[derive(Debug, Clone)]
pub struct Occasion {
    pub label: String,
    pub kind: OccasionKind,
    /// Days from today until the occasion; 0 means today
    pub days_until: i64,
}

/// Rarity tier of a fan tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// A badge awarded to a member
#[derive(Debug, Clone)]
pub struct FanTag {
    pub id: u64,
    pub name: String,
    pub holder: String,
    pub rarity: Rarity,
    pub awarded: NaiveDate,
    pub retired: bool,
}

/// A scrapbook entry editable on the memory tags page
#[derive(Debug, Clone)]
pub struct MemoryTag {
    pub id: u64,
    pub label: String,
    pub note: String,
    /// Free-form era tag, e.g. "2024 · Spring"
    pub era: String,
    pub pinned: bool,
}

/// Health status of a mock backend service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Down,
}

/// One service card on the system health page
#[derive(Debug, Clone)]
pub struct ServiceHealth {
    pub name: String,
    pub status: ServiceStatus,
    /// Utilization fractions in 0.0..=1.0
    pub cpu: f32,
    pub memory: f32,
    pub disk: f32,
    pub details: Vec<(String, String)>,
}

/// All demo data the console operates on
#[derive(Debug, Clone)]
pub struct Roster {
    pub members: Vec<Member>,
    pub festivals: Vec<Festival>,
    pub fan_tags: Vec<FanTag>,
    pub memory_tags: Vec<MemoryTag>,
    pub services: Vec<ServiceHealth>,
}

impl Roster {
    pub fn demo() -> Self {
        Self {
            members: sample_members(),
            festivals: sample_festivals(),
            fan_tags: sample_fan_tags(),
            memory_tags: sample_memory_tags(),
            services: sample_services(),
        }
    }

    /// Member lookup by id
    pub fn member(&self, id: u64) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Closest birthdays and festivals as of `today`, soonest first
    pub fn upcoming_occasions(&self, today: NaiveDate, limit: usize) -> Vec<Occasion> {
        let mut occasions: Vec<Occasion> = self
            .members
            .iter()
            .map(|m| Occasion {
                label: m.name.clone(),
                kind: OccasionKind::Birthday { member_id: m.id },
                days_until: days_until(today, m.birthday_month, m.birthday_day),
            })
            .chain(self.festivals.iter().map(|f| Occasion {
                label: f.name.clone(),
                kind: OccasionKind::Festival,
                days_until: days_until(today, f.month, f.day),
            }))
            .collect();

        occasions.sort_by_key(|o| o.days_until);
        occasions.truncate(limit);
        occasions
    }
}

/// Days from `today` until the next occurrence of `month`/`day`.
/// Today counts as 0. Feb 29 rolls back to Feb 28 in non-leap years.
pub fn days_until(today: NaiveDate, month: u32, day: u32) -> i64 {
    let in_year = |year: i32| {
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day.saturating_sub(1)))
    };

    let this_year = in_year(today.year());
    let next = match this_year {
        Some(date) if date >= today => Some(date),
        _ => in_year(today.year() + 1),
    };

    next.map(|date| (date - today).num_days()).unwrap_or(0)
}

/// Case-insensitive substring filter over tag name and holder.
/// An empty or whitespace-only query matches everything.
pub fn filter_fan_tags<'a>(tags: &'a [FanTag], query: &str) -> Vec<&'a FanTag> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tags.iter().collect();
    }

    tags.iter()
        .filter(|tag| {
            tag.name.to_lowercase().contains(&needle)
                || tag.holder.to_lowercase().contains(&needle)
        })
        .collect()
}

fn sample_members() -> Vec<Member> {
    let member = |id, name: &str, month, day, level| Member {
        id,
        name: name.to_string(),
        birthday_month: month,
        birthday_day: day,
        level,
    };

    vec![
        member(1, "Luna Qi", 3, 14, 9),
        member(2, "Marco Reyes", 7, 2, 6),
        member(3, "Sakura Ito", 9, 23, 10),
        member(4, "Tom Berger", 1, 30, 4),
        member(5, "Wei Lin", 11, 8, 8),
        member(6, "Ana Sousa", 5, 17, 7),
        member(7, "Priya Nair", 12, 1, 5),
        member(8, "Jonas Falk", 2, 29, 3),
    ]
}

fn sample_festivals() -> Vec<Festival> {
    let festival = |name: &str, month, day| Festival {
        name: name.to_string(),
        month,
        day,
    };

    vec![
        festival("Spring Gala", 2, 10),
        festival("Anniversary Stream", 6, 21),
        festival("Mid-Autumn Watch Party", 9, 29),
        festival("Year-End Countdown", 12, 31),
    ]
}

fn sample_fan_tags() -> Vec<FanTag> {
    let tag = |id, name: &str, holder: &str, rarity, y, m, d, retired| FanTag {
        id,
        name: name.to_string(),
        holder: holder.to_string(),
        rarity,
        awarded: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        retired,
    };

    vec![
        tag(101, "First Light", "Luna Qi", Rarity::Legendary, 2023, 4, 2, false),
        tag(102, "Night Owl", "Marco Reyes", Rarity::Common, 2024, 1, 15, false),
        tag(103, "Clip Artisan", "Sakura Ito", Rarity::Epic, 2024, 3, 8, false),
        tag(104, "Wall of Text", "Tom Berger", Rarity::Rare, 2024, 5, 30, false),
        tag(105, "Marathon Viewer", "Wei Lin", Rarity::Epic, 2024, 8, 19, false),
        tag(106, "Founding Fan", "Ana Sousa", Rarity::Legendary, 2022, 11, 11, true),
        tag(107, "Emote Sommelier", "Priya Nair", Rarity::Rare, 2025, 2, 7, false),
        tag(108, "Quiet Supporter", "Jonas Falk", Rarity::Common, 2025, 4, 22, false),
        tag(109, "Translator Corps", "Wei Lin", Rarity::Epic, 2025, 6, 3, false),
        tag(110, "Archive Diver", "Luna Qi", Rarity::Rare, 2025, 7, 28, false),
    ]
}

fn sample_memory_tags() -> Vec<MemoryTag> {
    let memory = |id, label: &str, note: &str, era: &str, pinned| MemoryTag {
        id,
        label: label.to_string(),
        note: note.to_string(),
        era: era.to_string(),
        pinned,
    };

    vec![
        memory(
            201,
            "First 1k concurrent",
            "The silent stream where chat carried the show for two hours.",
            "2023 · Winter",
            true,
        ),
        memory(
            202,
            "Charity marathon",
            "Twelve hours, four games, one broken chair.",
            "2024 · Spring",
            false,
        ),
        memory(
            203,
            "Offline meetup",
            "Forty fans, one karaoke machine, zero regrets.",
            "2024 · Summer",
            true,
        ),
        memory(
            204,
            "The great rebrand",
            "Old logo retired with a proper send-off montage.",
            "2025 · Spring",
            false,
        ),
        memory(
            205,
            "Collab week",
            "Five guests in five days; scheduling spreadsheet survived.",
            "2025 · Summer",
            false,
        ),
    ]
}

fn sample_services() -> Vec<ServiceHealth> {
    let detail = |k: &str, v: &str| (k.to_string(), v.to_string());

    vec![
        ServiceHealth {
            name: "Chat Relay".to_string(),
            status: ServiceStatus::Healthy,
            cpu: 0.32,
            memory: 0.41,
            disk: 0.18,
            details: vec![
                detail("Region", "eu-central"),
                detail("Connections", "12,408"),
                detail("Last restart", "11 days ago"),
            ],
        },
        ServiceHealth {
            name: "Clip Encoder".to_string(),
            status: ServiceStatus::Degraded,
            cpu: 0.87,
            memory: 0.64,
            disk: 0.71,
            details: vec![
                detail("Region", "us-east"),
                detail("Queue depth", "214"),
                detail("Last restart", "3 hours ago"),
            ],
        },
        ServiceHealth {
            name: "Tag Registry".to_string(),
            status: ServiceStatus::Healthy,
            cpu: 0.12,
            memory: 0.27,
            disk: 0.44,
            details: vec![
                detail("Region", "eu-central"),
                detail("Rows", "58,112"),
                detail("Last restart", "29 days ago"),
            ],
        },
        ServiceHealth {
            name: "Mail Courier".to_string(),
            status: ServiceStatus::Down,
            cpu: 0.0,
            memory: 0.02,
            disk: 0.39,
            details: vec![
                detail("Region", "ap-southeast"),
                detail("Bounce rate", "n/a"),
                detail("Last restart", "8 minutes ago"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_until_counts_today_as_zero() {
        assert_eq!(days_until(date(2026, 3, 14), 3, 14), 0);
    }

    #[test]
    fn days_until_wraps_to_next_year() {
        // Jan 30 birthday seen from Jan 31 is 364 days out in a non-leap span.
        assert_eq!(days_until(date(2026, 1, 31), 1, 30), 364);
    }

    #[test]
    fn days_until_handles_leap_birthday() {
        // 2027 is not a leap year; Feb 29 rolls back to Feb 28.
        assert_eq!(days_until(date(2027, 2, 27), 2, 29), 1);
    }

    #[test]
    fn occasions_sorted_soonest_first() {
        let roster = Roster::demo();
        let occasions = roster.upcoming_occasions(date(2026, 3, 1), 5);
        assert_eq!(occasions.len(), 5);
        for pair in occasions.windows(2) {
            assert!(pair[0].days_until <= pair[1].days_until);
        }
    }

    #[test]
    fn empty_query_matches_all_tags() {
        let tags = sample_fan_tags();
        assert_eq!(filter_fan_tags(&tags, "").len(), tags.len());
        assert_eq!(filter_fan_tags(&tags, "   ").len(), tags.len());
    }

    #[test]
    fn query_matches_name_and_holder_case_insensitively() {
        let tags = sample_fan_tags();

        let by_name = filter_fan_tags(&tags, "night owl");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 102);

        // "wei lin" holds two tags.
        let by_holder = filter_fan_tags(&tags, "WEI");
        assert_eq!(by_holder.len(), 2);
    }

    #[test]
    fn query_without_match_yields_empty() {
        let tags = sample_fan_tags();
        assert!(filter_fan_tags(&tags, "zzz-no-such-tag").is_empty());
    }
}
