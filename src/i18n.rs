//! Internationalization (i18n) support for fandesk
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "简体中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navigation
    NavOverview,
    NavHealth,
    NavFanTags,
    NavMemoryTags,
    NavSettings,

    // Overview
    OverviewTitle,
    OverviewSubtitle,
    StatMembers,
    StatActiveFans,
    StatTagsAwarded,
    StatUptime,
    UpcomingCelebrations,
    CelebrateNow,
    QuickActions,
    QuickStickyCard,
    QuickStickyCardDesc,
    QuickFireworks,
    QuickFireworksDesc,
    OccasionToday,
    OccasionInDays,

    // Celebration copy
    HappyBirthdayTitle,
    HappyBirthdaySubtitle,
    FestivalSubtitle,
    AchievementTitle,
    AchievementSubtitle,
    StickyDemoTitle,
    StickyDemoSubtitle,

    // System health
    HealthTitle,
    HealthSubtitle,
    StatusHealthy,
    StatusDegraded,
    StatusDown,
    MeterCpu,
    MeterMemory,
    MeterDisk,
    ShowDetails,
    HideDetails,

    // Fan tags
    FanTagsTitle,
    FanTagsSubtitle,
    FanTagSearchPlaceholder,
    ColumnTag,
    ColumnHolder,
    ColumnRarity,
    ColumnAwarded,
    ColumnStatus,
    RarityCommon,
    RarityRare,
    RarityEpic,
    RarityLegendary,
    TagActive,
    TagRetired,
    NoTagsFound,

    // Memory tags
    MemoryTagsTitle,
    MemoryTagsSubtitle,
    MemoryLabelField,
    MemoryNoteField,
    SaveButton,
    RevertButton,
    PinAction,
    UnpinAction,
    PinnedBadge,
    MemorySavedNotice,
    SelectMemoryHint,

    // Settings
    SettingsTitle,
    SettingsDisplaySection,
    SettingsDarkMode,
    SettingsLanguage,
    SettingsReduceMotion,
    SettingsReduceMotionDesc,
    SettingsCelebrationSection,
    SettingsPreviewCelebration,
    SettingsPreviewCelebrationDesc,
    SettingsPreviewButton,
    SettingsSaveFailed,
}

/// Get translation for a key in the specified language.
/// Falls back to English, then to a visible placeholder.
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations
        .get(&key)
        .copied()
        .or_else(|| en::translations().get(&key).copied())
        .unwrap_or("—")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Get translation with a single `{}` placeholder substituted
    pub fn get_with(&self, key: Key, value: &str) -> String {
        self.get(key).replacen("{}", value, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chinese_falls_back_to_english_placeholder_last() {
        // Every key present in zh should resolve to a non-placeholder string.
        assert_ne!(t(Language::Chinese, Key::AppName), "—");
        assert_ne!(t(Language::English, Key::NavOverview), "—");
    }

    #[test]
    fn placeholder_substitution() {
        let locale = Locale::new(Language::English);
        let s = locale.get_with(Key::OccasionInDays, "3");
        assert!(s.contains('3'));
        assert!(!s.contains("{}"));
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("anything"), Language::English);
    }
}
