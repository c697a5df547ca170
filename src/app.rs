//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Language, Locale};
pub use message::Message;
pub use state::{
    App, CoreState, FanTagsPageState, HealthPageState, MemoryTagsPageState, OverlayState, UiState,
};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Initialize sub-states
        let core = CoreState::new(settings, locale);
        let roster = crate::roster::Roster::demo();
        let ui = UiState::new();

        let app = Self { core, roster, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1280.0, 840.0),
            min_size: Some(iced::Size::new(960.0, 640.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "fandesk".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        "fandesk".to_string()
    }

    /// Subscriptions for the render loop, effect intervals, and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. Window close
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 2. Render frames (~60fps) while the overlay has anything moving:
        //    a live instance, leftover confetti, or the card easing in/out
        let frame_sub = if self.ui.overlay.needs_frames() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Recurring effect interval, present only while the active
        //    instance is Visible and its effect repeats. Dropping the
        //    subscription on a phase change is what cancels the schedule.
        let effect_state = self
            .ui
            .overlay
            .active
            .as_ref()
            .map(|c| (c.phase(), c.effect()));
        let effect_sub = match subscription_logic::effect_interval(effect_state) {
            Some(interval) => iced::time::every(interval).map(|_| Message::EffectTick),
            None => iced::Subscription::none(),
        };

        iced::Subscription::batch([close_request_sub, frame_sub, effect_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use std::time::Duration;

    use crate::features::celebration::{
        EffectKind, FIREWORKS_INTERVAL, Phase, STARS_INTERVAL,
    };

    /// Whether the frame subscription must run
    pub fn needs_frame_subscription(
        overlay_active: bool,
        confetti_live: bool,
        card_animating: bool,
    ) -> bool {
        overlay_active || confetti_live || card_animating
    }

    /// Repeat interval for the active instance's effect, if any.
    /// `None` the moment the phase leaves `Visible` or there is no instance.
    pub fn effect_interval(state: Option<(Phase, EffectKind)>) -> Option<Duration> {
        match state {
            Some((Phase::Visible, EffectKind::Stars)) => Some(STARS_INTERVAL),
            Some((Phase::Visible, EffectKind::Fireworks)) => Some(FIREWORKS_INTERVAL),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use crate::features::celebration::{
        EffectKind, FIREWORKS_INTERVAL, Phase, STARS_INTERVAL,
    };

    mod property_frame_demand {
        use super::*;

        #[test]
        fn no_frames_when_everything_is_idle() {
            assert!(!needs_frame_subscription(false, false, false));
        }

        #[test]
        fn frames_while_an_instance_is_alive() {
            assert!(needs_frame_subscription(true, false, false));
        }

        #[test]
        fn frames_while_confetti_outlives_the_instance() {
            // Particles keep falling after Dismissed tears the instance down.
            assert!(needs_frame_subscription(false, true, false));
        }

        #[test]
        fn frames_while_the_card_is_still_easing() {
            assert!(needs_frame_subscription(false, false, true));
        }
    }

    mod property_effect_cancellation {
        use super::*;

        #[test]
        fn repeating_effects_tick_only_while_visible() {
            assert_eq!(
                effect_interval(Some((Phase::Visible, EffectKind::Stars))),
                Some(STARS_INTERVAL)
            );
            assert_eq!(
                effect_interval(Some((Phase::Visible, EffectKind::Fireworks))),
                Some(FIREWORKS_INTERVAL)
            );
        }

        #[test]
        fn one_shot_effects_never_tick() {
            assert_eq!(
                effect_interval(Some((Phase::Visible, EffectKind::Basic))),
                None
            );
            assert_eq!(
                effect_interval(Some((Phase::Visible, EffectKind::Custom))),
                None
            );
        }

        #[test]
        fn leaving_visible_cancels_the_interval() {
            for effect in [EffectKind::Stars, EffectKind::Fireworks] {
                assert_eq!(effect_interval(Some((Phase::FadingOut, effect))), None);
                assert_eq!(effect_interval(Some((Phase::Dismissed, effect))), None);
            }
        }

        #[test]
        fn no_instance_means_no_interval() {
            assert_eq!(effect_interval(None), None);
        }
    }
}
