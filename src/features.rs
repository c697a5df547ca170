//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod celebration;
pub mod settings;

pub use celebration::{
    AutoDismiss, BurstSink, BurstSpec, CardTheme, Category, Celebration, CelebrationRequest,
    EffectKind, ParticleShape, Phase, StyleExt,
};
pub use settings::Settings;
