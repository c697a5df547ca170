//! UI module for the fan community console
//! Dark mode aesthetic with violet accents
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Effects** (`effects`): Canvas-driven particle rendering
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod effects;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
