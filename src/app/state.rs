// src/app/state.rs
//! Application state definitions

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use iced::time::Instant;
use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::celebration::{self, Celebration, CelebrationRequest};
use crate::i18n::Locale;
use crate::roster::Roster;
use crate::ui::components::NavItem;
use crate::ui::effects::confetti::ConfettiField;
use crate::ui::widgets::Notice;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale)
    pub core: CoreState,
    /// Business data (members, tags, services) - demo constants
    pub roster: Roster,
    /// UI state (navigation, page states, overlay)
    pub ui: UiState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: crate::features::Settings,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(settings: crate::features::Settings, locale: Locale) -> Self {
        Self { settings, locale }
    }
}

/// UI state: navigation plus per-page state
pub struct UiState {
    pub active_nav: NavItem,
    pub overlay: OverlayState,
    pub health: HealthPageState,
    pub fan_tags: FanTagsPageState,
    pub memory_tags: MemoryTagsPageState,
    /// Corner notice for page-level feedback, auto-hidden by a timer
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_nav: NavItem::Overview,
            overlay: OverlayState::new(),
            health: HealthPageState::default(),
            fan_tags: FanTagsPageState::default(),
            memory_tags: MemoryTagsPageState::default(),
            notice: None,
        }
    }
}

/// Celebration overlay runtime state.
///
/// One instance is active at a time; requests arriving meanwhile queue up
/// and are promoted when the active instance completes. The instance id is
/// monotonically increasing so timer messages addressed to a torn-down
/// instance can be recognized and dropped.
pub struct OverlayState {
    pub active: Option<Celebration>,
    pub pending: VecDeque<CelebrationRequest>,
    pub confetti: ConfettiField,
    /// Card presentation value: 0.0 hidden, 1.0 fully shown. Eased up on
    /// entry and back down over the fade duration on dismissal.
    pub card: Animated<f32>,
    /// Previous frame timestamp for stepping the confetti field
    pub last_frame: Instant,
    next_id: u64,
}

impl OverlayState {
    pub fn new() -> Self {
        Self {
            active: None,
            pending: VecDeque::new(),
            confetti: ConfettiField::new(),
            card: Animated::transition(0.0, entry_easing()),
            last_frame: Instant::now(),
            next_id: 0,
        }
    }

    /// Fresh identity for the next overlay instance
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Start the card entry animation from zero
    pub fn animate_entry(&mut self) {
        self.card = Animated::transition(0.0, entry_easing());
        self.card.update(1.0.into());
    }

    /// Ease the card out over the fade duration
    pub fn animate_fade_out(&mut self) {
        let current = *self.card.value();
        self.card = Animated::transition(current, fade_easing());
        self.card.update(0.0.into());
    }

    /// Whether the render loop still has anything to move
    pub fn needs_frames(&self) -> bool {
        self.active.is_some() || !self.confetti.is_idle() || self.card.is_animating()
    }
}

fn entry_easing() -> Easing {
    Easing::EASE_OUT.with_duration(celebration::ENTRY_DURATION)
}

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(celebration::FADE_DURATION)
}

/// System health page state - which service cards are expanded
#[derive(Default)]
pub struct HealthPageState {
    pub expanded: HashSet<usize>,
}

/// Fan tag registry page state
#[derive(Default)]
pub struct FanTagsPageState {
    pub query: String,
}

/// Memory tag editor page state.
///
/// The draft fields buffer edits; they only reach the roster on Save.
/// Selecting a different tag discards the draft.
#[derive(Default)]
pub struct MemoryTagsPageState {
    pub selected: Option<u64>,
    pub draft_label: String,
    pub draft_note: String,
}

impl MemoryTagsPageState {
    /// Load the draft from a saved tag
    pub fn select(&mut self, id: u64, label: &str, note: &str) {
        self.selected = Some(id);
        self.draft_label = label.to_string();
        self.draft_note = note.to_string();
    }
}

/// How long page notices stay up before auto-hiding
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);
