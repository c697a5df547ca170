//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "fandesk");

    // Navigation
    m.insert(Key::NavOverview, "Overview");
    m.insert(Key::NavHealth, "System Health");
    m.insert(Key::NavFanTags, "Fan Tags");
    m.insert(Key::NavMemoryTags, "Memory Tags");
    m.insert(Key::NavSettings, "Settings");

    // Overview
    m.insert(Key::OverviewTitle, "Overview");
    m.insert(Key::OverviewSubtitle, "Community at a glance");
    m.insert(Key::StatMembers, "Members");
    m.insert(Key::StatActiveFans, "Active this week");
    m.insert(Key::StatTagsAwarded, "Tags awarded");
    m.insert(Key::StatUptime, "Console uptime");
    m.insert(Key::UpcomingCelebrations, "Upcoming celebrations");
    m.insert(Key::CelebrateNow, "Celebrate");
    m.insert(Key::QuickActions, "Quick actions");
    m.insert(Key::QuickStickyCard, "Pinned announcement");
    m.insert(
        Key::QuickStickyCardDesc,
        "Sticky card that stays until dismissed",
    );
    m.insert(Key::QuickFireworks, "Launch fireworks");
    m.insert(Key::QuickFireworksDesc, "Full fireworks show for big wins");
    m.insert(Key::OccasionToday, "today");
    m.insert(Key::OccasionInDays, "in {} days");

    // Celebration copy
    m.insert(Key::HappyBirthdayTitle, "Happy birthday, {}!");
    m.insert(
        Key::HappyBirthdaySubtitle,
        "Another year of great memories together",
    );
    m.insert(Key::FestivalSubtitle, "Wishing everyone a wonderful festival");
    m.insert(Key::AchievementTitle, "Milestone unlocked");
    m.insert(Key::AchievementSubtitle, "The community keeps growing");
    m.insert(Key::StickyDemoTitle, "Team announcement");
    m.insert(
        Key::StickyDemoSubtitle,
        "This card stays up until you close it",
    );

    // System health
    m.insert(Key::HealthTitle, "System Health");
    m.insert(Key::HealthSubtitle, "Service status and utilization");
    m.insert(Key::StatusHealthy, "Healthy");
    m.insert(Key::StatusDegraded, "Degraded");
    m.insert(Key::StatusDown, "Down");
    m.insert(Key::MeterCpu, "CPU");
    m.insert(Key::MeterMemory, "Memory");
    m.insert(Key::MeterDisk, "Disk");
    m.insert(Key::ShowDetails, "Show details");
    m.insert(Key::HideDetails, "Hide details");

    // Fan tags
    m.insert(Key::FanTagsTitle, "Fan Tags");
    m.insert(Key::FanTagsSubtitle, "Badges awarded across the community");
    m.insert(Key::FanTagSearchPlaceholder, "Search tags or holders...");
    m.insert(Key::ColumnTag, "Tag");
    m.insert(Key::ColumnHolder, "Holder");
    m.insert(Key::ColumnRarity, "Rarity");
    m.insert(Key::ColumnAwarded, "Awarded");
    m.insert(Key::ColumnStatus, "Status");
    m.insert(Key::RarityCommon, "Common");
    m.insert(Key::RarityRare, "Rare");
    m.insert(Key::RarityEpic, "Epic");
    m.insert(Key::RarityLegendary, "Legendary");
    m.insert(Key::TagActive, "Active");
    m.insert(Key::TagRetired, "Retired");
    m.insert(Key::NoTagsFound, "No tags match your search");

    // Memory tags
    m.insert(Key::MemoryTagsTitle, "Memory Tags");
    m.insert(Key::MemoryTagsSubtitle, "Curate the community scrapbook");
    m.insert(Key::MemoryLabelField, "Label");
    m.insert(Key::MemoryNoteField, "Note");
    m.insert(Key::SaveButton, "Save");
    m.insert(Key::RevertButton, "Revert");
    m.insert(Key::PinAction, "Pin");
    m.insert(Key::UnpinAction, "Unpin");
    m.insert(Key::PinnedBadge, "Pinned");
    m.insert(Key::MemorySavedNotice, "Memory tag saved");
    m.insert(Key::SelectMemoryHint, "Select a memory tag to edit it");

    // Settings
    m.insert(Key::SettingsTitle, "Settings");
    m.insert(Key::SettingsDisplaySection, "Display");
    m.insert(Key::SettingsDarkMode, "Dark mode");
    m.insert(Key::SettingsLanguage, "Language");
    m.insert(Key::SettingsReduceMotion, "Reduce motion");
    m.insert(
        Key::SettingsReduceMotionDesc,
        "Skip confetti effects; overlays still appear and dismiss normally",
    );
    m.insert(Key::SettingsCelebrationSection, "Celebrations");
    m.insert(Key::SettingsPreviewCelebration, "Preview overlay");
    m.insert(
        Key::SettingsPreviewCelebrationDesc,
        "Show a sample celebration with the current theme",
    );
    m.insert(Key::SettingsPreviewButton, "Preview");
    m.insert(Key::SettingsSaveFailed, "Could not save settings");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
