//! Application messages

use crate::features::celebration::CelebrationRequest;
use crate::ui::components::NavItem;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Navigation ============
    /// Navigation menu item selected
    Navigate(NavItem),

    // ============ Celebration overlay ============
    /// Spawn (or queue) a celebration overlay
    Celebrate(CelebrationRequest),
    /// Manual dismissal: backdrop click or close button, identical in effect
    CelebrationDismiss,
    /// Auto-dismiss timer expired for the given instance
    CelebrationAutoDismiss(u64),
    /// Fade timer expired for the given instance
    CelebrationFadeDone(u64),
    /// Recurring effect interval tick (stars / fireworks cycles)
    EffectTick,
    /// Render frame: advance confetti physics and card animation
    AnimationTick,

    // ============ Fan tags ============
    /// Search query changed
    FanTagSearchChanged(String),

    // ============ Memory tags ============
    /// Memory tag selected for editing
    MemoryTagSelected(u64),
    /// Draft label edited
    MemoryLabelChanged(String),
    /// Draft note edited
    MemoryNoteChanged(String),
    /// Commit the draft back to the list
    MemorySave,
    /// Restore the draft from the saved values
    MemoryRevert,
    /// Pin or unpin a memory tag
    MemoryPinToggled(u64),

    // ============ System health ============
    /// Expand or collapse a service card
    ServiceDetailsToggled(usize),

    // ============ Notices ============
    /// Hide the corner notice
    HideNotice,

    // ============ Settings ============
    UpdateDarkMode(bool),
    UpdateAppLanguage(String),
    UpdateReduceMotion(bool),

    // ============ Window ============
    /// Window close requested
    RequestClose,
}
