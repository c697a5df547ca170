//! Celebration overlay message handlers
//!
//! The overlay owns its timers through messages: one-shot sleeps for
//! auto-dismiss and fade completion, the effect interval subscription for
//! recurring bursts, and the frame tick for physics. Every timer message
//! carries the instance id it was armed for; ids that no longer match the
//! active instance are dropped so late callbacks never touch a newer card.

use std::time::{Duration, Instant};

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::celebration::{Celebration, CelebrationRequest, FADE_DURATION};

/// Upper bound on one physics step; avoids a particle jump after the frame
/// subscription was paused
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

impl App {
    /// Handle celebration overlay messages
    pub fn handle_celebration(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Celebrate(request) => {
                if self.ui.overlay.active.is_some() {
                    tracing::debug!("Overlay busy, queueing celebration '{}'", request.title);
                    self.ui.overlay.pending.push_back(request.clone());
                    return Some(Task::none());
                }
                Some(self.spawn_celebration(request.clone()))
            }

            // Backdrop click and close button land here identically.
            Message::CelebrationDismiss => {
                let overlay = &mut self.ui.overlay;
                let Some(active) = overlay.active.as_mut() else {
                    return Some(Task::none());
                };
                if !active.begin_dismiss(Instant::now()) {
                    // Already fading or dismissed; repeated clicks are no-ops.
                    return Some(Task::none());
                }
                tracing::debug!(id = active.id(), "Celebration dismissed manually");
                let id = active.id();
                overlay.animate_fade_out();
                Some(fade_timer(id))
            }

            Message::CelebrationAutoDismiss(id) => {
                let overlay = &mut self.ui.overlay;
                let Some(active) = overlay.active.as_mut().filter(|c| c.id() == *id) else {
                    tracing::debug!(id, "Stale auto-dismiss timer ignored");
                    return Some(Task::none());
                };
                if !active.begin_dismiss(Instant::now()) {
                    // A manual dismissal won the race; the timer is a no-op.
                    tracing::debug!(id, "Auto-dismiss after phase already advanced");
                    return Some(Task::none());
                }
                tracing::debug!(id, "Celebration auto-dismissed");
                overlay.animate_fade_out();
                Some(fade_timer(*id))
            }

            Message::CelebrationFadeDone(id) => {
                let overlay = &mut self.ui.overlay;
                let finished = overlay
                    .active
                    .as_mut()
                    .filter(|c| c.id() == *id)
                    .is_some_and(Celebration::finish_dismiss);
                if !finished {
                    tracing::debug!(id, "Stale fade timer ignored");
                    return Some(Task::none());
                }

                // Completion: exactly one per instance. Tear it down and
                // promote the next queued request, if any.
                tracing::info!(id, "Celebration completed");
                overlay.active = None;
                match self.ui.overlay.pending.pop_front() {
                    Some(next) => Some(self.spawn_celebration(next)),
                    None => Some(Task::none()),
                }
            }

            Message::EffectTick => {
                self.emit_due_bursts(Instant::now());
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.emit_due_bursts(now);

                let overlay = &mut self.ui.overlay;
                overlay.card.tick(now);
                let dt = now
                    .saturating_duration_since(overlay.last_frame)
                    .min(MAX_FRAME_STEP);
                overlay.last_frame = now;
                overlay.confetti.advance(dt);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Spawn a fresh instance and arm its auto-dismiss timer
    fn spawn_celebration(&mut self, request: CelebrationRequest) -> Task<Message> {
        let now = Instant::now();
        let overlay = &mut self.ui.overlay;
        let id = overlay.allocate_id();
        tracing::info!(
            id,
            category = ?request.category,
            effect = ?request.effect,
            "Spawning celebration '{}'",
            request.title
        );

        overlay.active = Some(Celebration::spawn(id, request, now));
        overlay.animate_entry();
        overlay.last_frame = now;

        // Mount burst fires in the same breath as the spawn.
        self.emit_due_bursts(now);

        let delay = self
            .ui
            .overlay
            .active
            .as_ref()
            .and_then(Celebration::auto_dismiss);
        match delay {
            Some(delay) => Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |_| Message::CelebrationAutoDismiss(id),
            ),
            None => Task::none(),
        }
    }

    /// Feed every burst that became due into the confetti field. The
    /// reduce-motion setting suppresses spawning only; phases and timers
    /// behave identically with it on.
    fn emit_due_bursts(&mut self, now: Instant) {
        if self.core.settings.display.reduce_motion {
            return;
        }
        let overlay = &mut self.ui.overlay;
        if let Some(active) = overlay.active.as_mut() {
            active.advance_effects(now, &mut rand::rng(), &mut overlay.confetti);
        }
    }
}

fn fade_timer(id: u64) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(FADE_DURATION).await },
        move |_| Message::CelebrationFadeDone(id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CoreState, UiState};
    use crate::features::Settings;
    use crate::features::celebration::{Category, Phase};
    use crate::i18n::Locale;
    use crate::roster::Roster;

    fn app() -> App {
        App {
            core: CoreState::new(Settings::default(), Locale::default()),
            roster: Roster::demo(),
            ui: UiState::new(),
        }
    }

    fn request(title: &str) -> CelebrationRequest {
        CelebrationRequest::new(Category::Custom, title)
    }

    fn active_id(app: &App) -> Option<u64> {
        app.ui.overlay.active.as_ref().map(Celebration::id)
    }

    #[test]
    fn stale_timers_never_touch_a_promoted_instance() {
        let mut app = app();
        let _ = app.update(Message::Celebrate(request("first")));
        let _ = app.update(Message::Celebrate(request("second")));
        assert_eq!(active_id(&app), Some(1));

        let _ = app.update(Message::CelebrationDismiss);
        let _ = app.update(Message::CelebrationFadeDone(1));
        assert_eq!(active_id(&app), Some(2));

        // Both one-shot timers armed for the first instance fire after its
        // teardown; the ids no longer match and the second card stays put.
        let _ = app.update(Message::CelebrationAutoDismiss(1));
        let _ = app.update(Message::CelebrationFadeDone(1));

        let active = app
            .ui
            .overlay
            .active
            .as_ref()
            .expect("second instance stays alive");
        assert_eq!(active.id(), 2);
        assert_eq!(active.phase(), Phase::Visible);
    }

    #[test]
    fn stale_fade_timer_cannot_complete_a_fresh_instance() {
        let mut app = app();
        let _ = app.update(Message::Celebrate(request("only")));
        assert_eq!(active_id(&app), Some(1));

        // A fade timer for an id that was never spawned is dropped.
        let _ = app.update(Message::CelebrationFadeDone(99));
        let active = app.ui.overlay.active.as_ref().expect("still alive");
        assert_eq!(active.phase(), Phase::Visible);
    }

    #[test]
    fn pending_requests_promote_in_arrival_order() {
        let mut app = app();
        let _ = app.update(Message::Celebrate(request("first")));
        let _ = app.update(Message::Celebrate(request("second")));
        let _ = app.update(Message::Celebrate(request("third")));
        assert_eq!(active_id(&app), Some(1));
        assert_eq!(app.ui.overlay.pending.len(), 2);

        let _ = app.update(Message::CelebrationDismiss);
        let _ = app.update(Message::CelebrationFadeDone(1));

        // Completion pops exactly one pending request, oldest first.
        let active = app.ui.overlay.active.as_ref().expect("promoted");
        assert_eq!(active.id(), 2);
        assert_eq!(active.title, "second");
        assert_eq!(active.phase(), Phase::Visible);
        assert_eq!(app.ui.overlay.pending.len(), 1);
        assert_eq!(app.ui.overlay.pending[0].title, "third");
    }
}
