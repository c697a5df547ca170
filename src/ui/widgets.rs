//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types or callback functions
//! - **Composable**: Build on iced's built-in widgets
//! - **Reusable**: Can be used by multiple components

pub mod chip;
pub mod meter_bar;
mod notice;
pub mod section_header;
pub mod stat_card;

pub use chip::view_chip;
pub use meter_bar::{meter_color, view_meter_bar};
pub use notice::{Notice, Severity, view_notice};
pub use stat_card::view as stat_card;
