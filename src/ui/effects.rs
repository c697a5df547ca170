//! Canvas-driven visual effects
//!
//! Currently a single confetti particle engine; celebrations feed it burst
//! specs and the frame subscription keeps it moving.

pub mod confetti;
