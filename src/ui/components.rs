//! Business-specific UI components with Message handling
//!
//! Components know about `crate::app::Message` and wire user interactions
//! to it; reusable pieces without business logic live in `widgets`.

pub mod celebration_overlay;
pub mod sidebar;

pub use sidebar::NavItem;
