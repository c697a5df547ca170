//! Theme system for the operations console
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Radians, Shadow, Theme, gradient};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0e0e13);
    pub const SIDEBAR: Color = color!(0x14141c);
    pub const SURFACE: Color = color!(0x1b1b25);
    pub const SURFACE_LIGHT: Color = color!(0x262634);
    pub const BORDER: Color = color!(0x2c2c3a);
    pub const TEXT_MUTED: Color = color!(0x8a8a9a);
    pub const TEXT_SECONDARY: Color = color!(0xb4b4c2);
    pub const TEXT_PRIMARY: Color = color!(0xf2f2f7);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafafc);
    pub const SIDEBAR: Color = color!(0xf0f0f5);
    pub const SURFACE: Color = color!(0xe9e9f0);
    pub const SURFACE_LIGHT: Color = color!(0xdedee8);
    pub const BORDER: Color = color!(0xd4d4e0);
    pub const TEXT_MUTED: Color = color!(0x72727f);
    pub const TEXT_SECONDARY: Color = color!(0x4c4c58);
    pub const TEXT_PRIMARY: Color = color!(0x17171f);
}

/// Accent color used for primary actions and the active nav item
pub const ACCENT: Color = color!(0x7c5cf0);
/// Accent hover state
pub const ACCENT_HOVER: Color = color!(0x9678f5);

/// Bold font weight for headers
/// - macOS: Semibold (SF Pro looks better with Semibold)
/// - Linux/Windows: Bold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

/// Medium font weight for labels and values
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: iced::font::Weight = iced::font::Weight::Medium;

#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: iced::font::Weight = iced::font::Weight::Normal;

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get sidebar color based on theme
pub fn sidebar_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SIDEBAR
    } else {
        light::SIDEBAR
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Slightly raised surface, used for cards on top of the background
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_LIGHT
    } else {
        light::SURFACE_LIGHT
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background for list rows and nav items
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.06)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

/// Divider line color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Drop shadow color for floating surfaces
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Overlay backdrop color; lighter themes need less dimming
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    let alpha = if is_dark(theme) { opacity } else { opacity * 0.65 };
    Color::from_rgba(0.0, 0.0, 0.0, alpha)
}

/// Success (healthy) accent
pub fn success(_theme: &Theme) -> Color {
    color!(0x22c55e)
}

/// Warning (degraded) accent
pub fn warning(_theme: &Theme) -> Color {
    color!(0xf59e0b)
}

/// Danger (down/destructive) accent
pub fn danger(_theme: &Theme) -> Color {
    color!(0xef4444)
}

/// Informational accent
pub fn info(_theme: &Theme) -> Color {
    color!(0x3b82f6)
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Sidebar container
pub fn sidebar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(sidebar_bg(theme))),
        ..Default::default()
    }
}

/// Standard card on a page
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Linear gradient background for celebration cards, three stops laid
/// diagonally from the top-left corner
pub fn celebration_gradient(stops: [Color; 3]) -> Background {
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(Radians(std::f32::consts::PI * 0.75))
            .add_stop(0.0, stops[0])
            .add_stop(0.5, stops[1])
            .add_stop(1.0, stops[2]),
    ))
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button - filled accent
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 18.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.4,
                ..ACCENT
            })),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 18.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Navigation menu item - inactive
pub fn nav_item(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_muted(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Navigation menu item - active page
pub fn nav_item_active(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Plain text button, accent colored
pub fn text_button(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => ACCENT_HOVER,
            _ => ACCENT,
        },
        border: Border::default(),
        ..Default::default()
    }
}

/// Row button: invisible chrome around list rows (memory tag list)
pub fn row_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Pick List Styles
// ============================================================================

/// Dropdown style for the settings page, built from the shared palette
pub fn settings_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = match status {
        pick_list::Status::Active => surface(theme),
        pick_list::Status::Hovered | pick_list::Status::Opened { .. } => surface_elevated(theme),
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
    }
}

/// Menu half of the dropdown
pub fn settings_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(surface_elevated(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(hover_bg(theme)),
        shadow: Shadow {
            color: shadow_color(theme),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
    }
}

// ============================================================================
// Text Input Styles
// ============================================================================

/// Shared input field style (search bar, memory tag editor)
pub fn input_field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => ACCENT,
        text_input::Status::Hovered => text_muted(theme),
        _ => border_color(theme),
    };

    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color {
            a: 0.35,
            ..ACCENT
        },
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for main content: no rail chrome, just a slim scroller
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 3.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
