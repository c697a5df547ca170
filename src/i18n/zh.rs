//! Chinese translations (简体中文)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "fandesk");

    // Navigation
    m.insert(Key::NavOverview, "总览");
    m.insert(Key::NavHealth, "系统状态");
    m.insert(Key::NavFanTags, "粉丝标签");
    m.insert(Key::NavMemoryTags, "回忆标签");
    m.insert(Key::NavSettings, "设置");

    // Overview
    m.insert(Key::OverviewTitle, "总览");
    m.insert(Key::OverviewSubtitle, "社区一览");
    m.insert(Key::StatMembers, "成员数");
    m.insert(Key::StatActiveFans, "本周活跃");
    m.insert(Key::StatTagsAwarded, "已授予标签");
    m.insert(Key::StatUptime, "控制台运行时间");
    m.insert(Key::UpcomingCelebrations, "即将到来的庆祝");
    m.insert(Key::CelebrateNow, "庆祝");
    m.insert(Key::QuickActions, "快捷操作");
    m.insert(Key::QuickStickyCard, "置顶公告");
    m.insert(Key::QuickStickyCardDesc, "常驻卡片，手动关闭前一直显示");
    m.insert(Key::QuickFireworks, "放烟花");
    m.insert(Key::QuickFireworksDesc, "为重大时刻燃放整场烟花");
    m.insert(Key::OccasionToday, "今天");
    m.insert(Key::OccasionInDays, "{} 天后");

    // Celebration copy
    m.insert(Key::HappyBirthdayTitle, "{}，生日快乐！");
    m.insert(Key::HappyBirthdaySubtitle, "又是共同回忆满满的一年");
    m.insert(Key::FestivalSubtitle, "祝大家节日快乐");
    m.insert(Key::AchievementTitle, "达成里程碑");
    m.insert(Key::AchievementSubtitle, "社区还在不断成长");
    m.insert(Key::StickyDemoTitle, "团队公告");
    m.insert(Key::StickyDemoSubtitle, "这张卡片会一直显示，直到你关闭它");

    // System health
    m.insert(Key::HealthTitle, "系统状态");
    m.insert(Key::HealthSubtitle, "服务状态与资源占用");
    m.insert(Key::StatusHealthy, "正常");
    m.insert(Key::StatusDegraded, "降级");
    m.insert(Key::StatusDown, "离线");
    m.insert(Key::MeterCpu, "CPU");
    m.insert(Key::MeterMemory, "内存");
    m.insert(Key::MeterDisk, "磁盘");
    m.insert(Key::ShowDetails, "展开详情");
    m.insert(Key::HideDetails, "收起详情");

    // Fan tags
    m.insert(Key::FanTagsTitle, "粉丝标签");
    m.insert(Key::FanTagsSubtitle, "社区内已授予的徽章");
    m.insert(Key::FanTagSearchPlaceholder, "搜索标签或持有者...");
    m.insert(Key::ColumnTag, "标签");
    m.insert(Key::ColumnHolder, "持有者");
    m.insert(Key::ColumnRarity, "稀有度");
    m.insert(Key::ColumnAwarded, "授予日期");
    m.insert(Key::ColumnStatus, "状态");
    m.insert(Key::RarityCommon, "普通");
    m.insert(Key::RarityRare, "稀有");
    m.insert(Key::RarityEpic, "史诗");
    m.insert(Key::RarityLegendary, "传说");
    m.insert(Key::TagActive, "生效中");
    m.insert(Key::TagRetired, "已退役");
    m.insert(Key::NoTagsFound, "没有匹配的标签");

    // Memory tags
    m.insert(Key::MemoryTagsTitle, "回忆标签");
    m.insert(Key::MemoryTagsSubtitle, "整理社区的纪念册");
    m.insert(Key::MemoryLabelField, "标题");
    m.insert(Key::MemoryNoteField, "备注");
    m.insert(Key::SaveButton, "保存");
    m.insert(Key::RevertButton, "撤销修改");
    m.insert(Key::PinAction, "置顶");
    m.insert(Key::UnpinAction, "取消置顶");
    m.insert(Key::PinnedBadge, "已置顶");
    m.insert(Key::MemorySavedNotice, "回忆标签已保存");
    m.insert(Key::SelectMemoryHint, "选择一个回忆标签进行编辑");

    // Settings
    m.insert(Key::SettingsTitle, "设置");
    m.insert(Key::SettingsDisplaySection, "显示");
    m.insert(Key::SettingsDarkMode, "深色模式");
    m.insert(Key::SettingsLanguage, "语言");
    m.insert(Key::SettingsReduceMotion, "减少动态效果");
    m.insert(
        Key::SettingsReduceMotionDesc,
        "跳过彩带粒子效果，弹层仍会正常显示与关闭",
    );
    m.insert(Key::SettingsCelebrationSection, "庆祝弹层");
    m.insert(Key::SettingsPreviewCelebration, "预览弹层");
    m.insert(Key::SettingsPreviewCelebrationDesc, "用当前主题展示一个示例庆祝");
    m.insert(Key::SettingsPreviewButton, "预览");
    m.insert(Key::SettingsSaveFailed, "设置保存失败");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
