//! Celebration overlay core
//!
//! Lifecycle and effect scheduling for the transient celebration layer.
//! Everything here is driven by explicit `Instant`s and an injected burst
//! sink, so the whole state machine can be tested without a window or a
//! runtime. Rendering, timers and the confetti engine live elsewhere:
//!
//! - the app schedules one-shot timers and forwards their messages here
//! - `advance_effects` turns elapsed visible time into confetti bursts
//! - the overlay view only reads the resolved card fields
//!
//! The phase sequence is strictly `Visible -> FadingOut -> Dismissed`.
//! Whichever dismiss trigger lands first wins; everything after is a no-op.

use std::time::{Duration, Instant};

use iced::Color;
use rand::Rng;

/// Auto-dismiss delay applied when the caller does not choose one
pub const AUTO_DISMISS_DEFAULT: Duration = Duration::from_millis(5000);
/// Fixed fade-out length between `FadingOut` and `Dismissed`
pub const FADE_DURATION: Duration = Duration::from_millis(1000);
/// Entry pop length, purely cosmetic
pub const ENTRY_DURATION: Duration = Duration::from_millis(220);
/// Star shower repeat interval
pub const STARS_INTERVAL: Duration = Duration::from_millis(1200);
/// Fireworks volley repeat interval
pub const FIREWORKS_INTERVAL: Duration = Duration::from_millis(2000);
/// Gap between the sub-bursts of one volley
const VOLLEY_SPACING: Duration = Duration::from_millis(250);
/// Sub-bursts per volley; together they span roughly one second
const VOLLEY_BURSTS: u32 = 4;

/// What the celebration is about; picks the default theme and glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    Birthday,
    Festival,
    Achievement,
    /// Caller-styled card; also the fallback for anything unrecognized
    #[default]
    Custom,
}

impl Category {
    /// Default icon glyph; `Custom` has none unless the caller supplies one
    pub fn default_glyph(self) -> Option<&'static str> {
        match self {
            Category::Birthday => Some("🎂"),
            Category::Festival => Some("🎊"),
            Category::Achievement => Some("🏆"),
            Category::Custom => None,
        }
    }
}

/// Confetti behavior attached to the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectKind {
    /// One celebratory burst on mount
    #[default]
    Basic,
    /// Star burst on mount, repeating while visible
    Stars,
    /// Randomized volleys on mount, repeating while visible
    Fireworks,
    /// No scheduled bursts at all
    Custom,
}

impl EffectKind {
    pub fn repeats(self) -> bool {
        matches!(self, EffectKind::Stars | EffectKind::Fireworks)
    }
}

/// When, if ever, the overlay dismisses itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoDismiss {
    /// Caller made no choice; `AUTO_DISMISS_DEFAULT` applies
    #[default]
    Default,
    After(Duration),
    /// Explicitly sticky; manual dismissal only
    Never,
}

impl AutoDismiss {
    /// Concrete delay, `None` when auto-dismiss is disabled.
    /// A zero duration is the legacy "disabled" encoding and maps to `None`.
    pub fn delay(self) -> Option<Duration> {
        match self {
            AutoDismiss::Default => Some(AUTO_DISMISS_DEFAULT),
            AutoDismiss::After(d) if d.is_zero() => None,
            AutoDismiss::After(d) => Some(d),
            AutoDismiss::Never => None,
        }
    }
}

/// Visual identity of one card: gradient stops plus confetti palette
#[derive(Debug, Clone, PartialEq)]
pub struct CardTheme {
    /// Three gradient stops, laid out top-left to bottom-right
    pub gradient: [Color; 3],
    /// Colors the confetti engine samples from
    pub palette: Vec<Color>,
}

impl CardTheme {
    pub fn for_category(category: Category) -> Self {
        let rgb = Color::from_rgb8;
        match category {
            Category::Birthday => Self {
                gradient: [rgb(0xec, 0x48, 0x99), rgb(0xa8, 0x55, 0xf7), rgb(0x63, 0x66, 0xf1)],
                palette: vec![
                    rgb(0xec, 0x48, 0x99),
                    rgb(0xf9, 0xa8, 0xd4),
                    rgb(0xa8, 0x55, 0xf7),
                    rgb(0x63, 0x66, 0xf1),
                    Color::WHITE,
                ],
            },
            Category::Festival => Self {
                gradient: [rgb(0xef, 0x44, 0x44), rgb(0xfa, 0xcc, 0x15), rgb(0x22, 0xc5, 0x5e)],
                palette: vec![
                    rgb(0xef, 0x44, 0x44),
                    rgb(0xfb, 0x92, 0x3c),
                    rgb(0xfa, 0xcc, 0x15),
                    rgb(0x22, 0xc5, 0x5e),
                ],
            },
            Category::Achievement => Self {
                gradient: [rgb(0xf5, 0x9e, 0x0b), rgb(0xfd, 0xe0, 0x47), rgb(0xd9, 0x77, 0x06)],
                palette: vec![
                    rgb(0xf5, 0x9e, 0x0b),
                    rgb(0xfb, 0xbf, 0x24),
                    rgb(0xfd, 0xe0, 0x47),
                    Color::WHITE,
                ],
            },
            Category::Custom => Self {
                gradient: [rgb(0x3b, 0x82, 0xf6), rgb(0x8b, 0x5c, 0xf6), rgb(0xec, 0x48, 0x99)],
                palette: vec![
                    rgb(0x3b, 0x82, 0xf6),
                    rgb(0x60, 0xa5, 0xfa),
                    rgb(0x8b, 0x5c, 0xf6),
                    rgb(0xec, 0x48, 0x99),
                ],
            },
        }
    }
}

/// Optional per-request tweaks merged over the resolved theme
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleExt {
    pub corner_radius: Option<f32>,
    pub text_color: Option<Color>,
    pub backdrop_opacity: Option<f32>,
}

impl StyleExt {
    /// Clamp out-of-range values instead of rejecting them
    fn sanitized(self) -> Self {
        Self {
            corner_radius: self.corner_radius.map(|r| r.max(0.0)),
            text_color: self.text_color,
            backdrop_opacity: self.backdrop_opacity.map(|o| o.clamp(0.0, 1.0)),
        }
    }
}

/// Everything a caller can say about one celebration
#[derive(Debug, Clone)]
pub struct CelebrationRequest {
    pub category: Category,
    pub title: String,
    pub subtitle: Option<String>,
    pub theme: Option<CardTheme>,
    pub icon: Option<String>,
    pub auto_dismiss: AutoDismiss,
    pub effect: EffectKind,
    pub style: StyleExt,
}

impl CelebrationRequest {
    pub fn new(category: Category, title: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            subtitle: None,
            theme: None,
            icon: None,
            auto_dismiss: AutoDismiss::Default,
            effect: EffectKind::Basic,
            style: StyleExt::default(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn icon(mut self, glyph: impl Into<String>) -> Self {
        self.icon = Some(glyph.into());
        self
    }

    pub fn theme(mut self, theme: CardTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn effect(mut self, effect: EffectKind) -> Self {
        self.effect = effect;
        self
    }

    pub fn auto_dismiss_after(mut self, delay: Duration) -> Self {
        self.auto_dismiss = AutoDismiss::After(delay);
        self
    }

    pub fn sticky(mut self) -> Self {
        self.auto_dismiss = AutoDismiss::Never;
        self
    }

    pub fn style(mut self, style: StyleExt) -> Self {
        self.style = style;
        self
    }
}

/// Overlay lifecycle phase, strictly forward-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    FadingOut,
    Dismissed,
}

/// Shape vocabulary of the confetti engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Square,
    Circle,
    Star,
}

/// One confetti burst, ready for the particle engine.
/// Units follow the classic confetti model: positions are normalized to the
/// overlay, motion is in pixels per tick at a nominal 60 ticks per second.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstSpec {
    pub count: u32,
    /// Launch direction in degrees; 90 points straight up
    pub angle_deg: f32,
    /// Cone width around `angle_deg`
    pub spread_deg: f32,
    /// Initial speed
    pub velocity: f32,
    /// Per-tick velocity multiplier
    pub decay: f32,
    /// Downward pull per tick
    pub gravity: f32,
    /// Sideways pull per tick
    pub drift: f32,
    /// Lifetime in ticks
    pub ttl: u32,
    /// Size multiplier
    pub scalar: f32,
    pub shape: ParticleShape,
    pub colors: Vec<Color>,
    /// Normalized origin within the overlay, (0,0) is top-left
    pub origin: (f32, f32),
}

impl BurstSpec {
    fn base(colors: Vec<Color>) -> Self {
        Self {
            count: 50,
            angle_deg: 90.0,
            spread_deg: 45.0,
            velocity: 45.0,
            decay: 0.9,
            gravity: 1.0,
            drift: 0.0,
            ttl: 200,
            scalar: 1.0,
            shape: ParticleShape::Square,
            colors,
            origin: (0.5, 0.5),
        }
    }
}

/// Consumer of burst specs. The confetti field implements this in
/// production; tests substitute a recording sink.
pub trait BurstSink {
    fn fire(&mut self, spec: BurstSpec);
}

/// One live overlay instance. Spawned in `Visible`, never reused; a new
/// request always gets a fresh instance with a fresh id.
#[derive(Debug)]
pub struct Celebration {
    id: u64,
    pub title: String,
    pub subtitle: Option<String>,
    pub theme: CardTheme,
    pub glyph: Option<String>,
    pub style: StyleExt,
    auto_dismiss: Option<Duration>,
    effect: EffectKind,
    phase: Phase,
    shown_at: Instant,
    fading_since: Option<Instant>,
    bursts_emitted: u32,
    completed: bool,
}

impl Celebration {
    pub fn spawn(id: u64, request: CelebrationRequest, now: Instant) -> Self {
        let mut theme = request
            .theme
            .unwrap_or_else(|| CardTheme::for_category(request.category));
        if theme.palette.is_empty() {
            theme.palette = CardTheme::for_category(request.category).palette;
        }
        let glyph = request
            .icon
            .or_else(|| request.category.default_glyph().map(str::to_string));

        Self {
            id,
            title: request.title,
            subtitle: request.subtitle,
            theme,
            glyph,
            style: request.style.sanitized(),
            auto_dismiss: request.auto_dismiss.delay(),
            effect: request.effect,
            phase: Phase::Visible,
            shown_at: now,
            fading_since: None,
            bursts_emitted: 0,
            completed: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn effect(&self) -> EffectKind {
        self.effect
    }

    /// Delay before the auto-dismiss timer, `None` for sticky cards
    pub fn auto_dismiss(&self) -> Option<Duration> {
        self.auto_dismiss
    }

    /// When the fade started, for rendering the fade-out
    pub fn fading_since(&self) -> Option<Instant> {
        self.fading_since
    }

    /// `Visible -> FadingOut`. Backdrop click, close button and the
    /// auto-dismiss timer all land here; the first one wins and every
    /// later call is a no-op. Returns whether the transition happened.
    pub fn begin_dismiss(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        self.phase = Phase::FadingOut;
        self.fading_since = Some(now);
        true
    }

    /// `FadingOut -> Dismissed`. Returns `true` exactly once per instance;
    /// this is the completion signal the requester reacts to. Calling it
    /// while still `Visible` does nothing, so phases cannot be skipped.
    pub fn finish_dismiss(&mut self) -> bool {
        if self.phase != Phase::FadingOut || self.completed {
            return false;
        }
        self.phase = Phase::Dismissed;
        self.completed = true;
        true
    }

    /// Emit every burst that became due by `now` into `sink`. Bursts exist
    /// only while the phase is `Visible`: the first call after a dismiss
    /// trigger emits nothing, which is what cancels recurring effects.
    pub fn advance_effects<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        sink: &mut impl BurstSink,
    ) {
        if self.phase != Phase::Visible {
            return;
        }

        let elapsed = now.saturating_duration_since(self.shown_at);
        let due = bursts_due(self.effect, elapsed);
        while self.bursts_emitted < due {
            for spec in burst_specs(self.effect, &self.theme.palette, rng) {
                sink.fire(spec);
            }
            self.bursts_emitted += 1;
        }
    }
}

/// How many bursts `effect` owes after `elapsed` visible time.
/// Pure schedule arithmetic; the caller enforces the `Visible` gate.
pub fn bursts_due(effect: EffectKind, elapsed: Duration) -> u32 {
    let ms = elapsed.as_millis() as u64;
    match effect {
        EffectKind::Basic => 1,
        EffectKind::Stars => 1 + (ms / STARS_INTERVAL.as_millis() as u64) as u32,
        EffectKind::Fireworks => {
            let cycle = FIREWORKS_INTERVAL.as_millis() as u64;
            let spacing = VOLLEY_SPACING.as_millis() as u64;
            let complete = (ms / cycle) as u32 * VOLLEY_BURSTS;
            let within = ms % cycle;
            complete + ((within / spacing) as u32 + 1).min(VOLLEY_BURSTS)
        }
        EffectKind::Custom => 0,
    }
}

/// Specs for one scheduled emission. Stars and fireworks pair a large and
/// a small burst per emission, like the classic confetti presets.
fn burst_specs<R: Rng + ?Sized>(
    effect: EffectKind,
    palette: &[Color],
    rng: &mut R,
) -> Vec<BurstSpec> {
    match effect {
        EffectKind::Basic => vec![BurstSpec {
            count: 90,
            spread_deg: 70.0,
            ttl: 150,
            origin: (0.5, 0.62),
            ..BurstSpec::base(palette.to_vec())
        }],
        EffectKind::Stars => vec![
            BurstSpec {
                count: 40,
                spread_deg: 360.0,
                velocity: 32.0,
                decay: 0.94,
                gravity: 0.4,
                ttl: 60,
                scalar: 1.2,
                shape: ParticleShape::Star,
                origin: (0.5, 0.4),
                ..BurstSpec::base(palette.to_vec())
            },
            BurstSpec {
                count: 15,
                spread_deg: 360.0,
                velocity: 24.0,
                decay: 0.94,
                gravity: 0.4,
                ttl: 60,
                scalar: 0.75,
                shape: ParticleShape::Circle,
                origin: (0.5, 0.4),
                ..BurstSpec::base(palette.to_vec())
            },
        ],
        EffectKind::Fireworks => {
            let mut specs = Vec::with_capacity(2);
            for left in [true, false] {
                let x = if left {
                    rng.random_range(0.08..0.35)
                } else {
                    rng.random_range(0.65..0.92)
                };
                specs.push(BurstSpec {
                    count: rng.random_range(28..46),
                    angle_deg: rng.random_range(55.0..125.0),
                    spread_deg: rng.random_range(40.0..70.0),
                    velocity: rng.random_range(38.0..55.0),
                    ttl: 90,
                    shape: ParticleShape::Circle,
                    colors: rotated_palette(palette, rng),
                    origin: (x, rng.random_range(0.15..0.45)),
                    ..BurstSpec::base(palette.to_vec())
                });
            }
            specs
        }
        EffectKind::Custom => Vec::new(),
    }
}

/// Random rotation of the palette so consecutive volleys vary in color
fn rotated_palette<R: Rng + ?Sized>(palette: &[Color], rng: &mut R) -> Vec<Color> {
    if palette.is_empty() {
        return Vec::new();
    }
    let offset = rng.random_range(0..palette.len());
    palette
        .iter()
        .cycle()
        .skip(offset)
        .take(palette.len())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct RecordingSink {
        specs: Vec<BurstSpec>,
    }

    impl BurstSink for RecordingSink {
        fn fire(&mut self, spec: BurstSpec) {
            self.specs.push(spec);
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn spawn(request: CelebrationRequest, now: Instant) -> Celebration {
        Celebration::spawn(1, request, now)
    }

    #[test]
    fn default_themes_follow_the_category_table() {
        let birthday = CardTheme::for_category(Category::Birthday);
        assert_eq!(birthday.gradient[0], Color::from_rgb8(0xec, 0x48, 0x99));
        assert_eq!(birthday.gradient[2], Color::from_rgb8(0x63, 0x66, 0xf1));

        let festival = CardTheme::for_category(Category::Festival);
        assert_eq!(festival.gradient[1], Color::from_rgb8(0xfa, 0xcc, 0x15));

        assert_eq!(Category::Birthday.default_glyph(), Some("🎂"));
        assert_eq!(Category::Festival.default_glyph(), Some("🎊"));
        assert_eq!(Category::Achievement.default_glyph(), Some("🏆"));
        assert_eq!(Category::Custom.default_glyph(), None);
    }

    #[test]
    fn overrides_replace_category_defaults() {
        let theme = CardTheme {
            gradient: [Color::BLACK, Color::WHITE, Color::BLACK],
            palette: vec![Color::WHITE],
        };
        let now = Instant::now();
        let celebration = spawn(
            CelebrationRequest::new(Category::Birthday, "Party")
                .theme(theme.clone())
                .icon("🎈"),
            now,
        );

        assert_eq!(celebration.theme, theme);
        assert_eq!(celebration.glyph.as_deref(), Some("🎈"));
    }

    #[test]
    fn empty_override_palette_degrades_to_category_palette() {
        let now = Instant::now();
        let celebration = spawn(
            CelebrationRequest::new(Category::Festival, "Gala").theme(CardTheme {
                gradient: [Color::BLACK, Color::BLACK, Color::BLACK],
                palette: Vec::new(),
            }),
            now,
        );

        assert_eq!(
            celebration.theme.palette,
            CardTheme::for_category(Category::Festival).palette
        );
    }

    #[test]
    fn auto_dismiss_encodings() {
        assert_eq!(AutoDismiss::Default.delay(), Some(AUTO_DISMISS_DEFAULT));
        assert_eq!(AutoDismiss::After(ms(2000)).delay(), Some(ms(2000)));
        assert_eq!(AutoDismiss::After(Duration::ZERO).delay(), None);
        assert_eq!(AutoDismiss::Never.delay(), None);
    }

    #[test]
    fn style_extension_is_clamped_not_rejected() {
        let now = Instant::now();
        let celebration = spawn(
            CelebrationRequest::new(Category::Custom, "x").style(StyleExt {
                corner_radius: Some(-12.0),
                text_color: None,
                backdrop_opacity: Some(4.0),
            }),
            now,
        );

        assert_eq!(celebration.style.corner_radius, Some(0.0));
        assert_eq!(celebration.style.backdrop_opacity, Some(1.0));
    }

    #[test]
    fn birthday_with_two_second_auto_dismiss_runs_the_full_timeline() {
        let t0 = Instant::now();
        let mut celebration = spawn(
            CelebrationRequest::new(Category::Birthday, "Happy birthday!")
                .auto_dismiss_after(ms(2000)),
            t0,
        );

        assert_eq!(celebration.auto_dismiss(), Some(ms(2000)));
        assert_eq!(celebration.phase(), Phase::Visible);

        // Auto-dismiss timer fires at t=2000.
        assert!(celebration.begin_dismiss(t0 + ms(2000)));
        assert_eq!(celebration.phase(), Phase::FadingOut);
        assert_eq!(celebration.fading_since(), Some(t0 + ms(2000)));

        // Fade timer fires 1000ms later.
        assert!(celebration.finish_dismiss());
        assert_eq!(celebration.phase(), Phase::Dismissed);

        // Completion is signalled exactly once.
        assert!(!celebration.finish_dismiss());
        assert_eq!(celebration.phase(), Phase::Dismissed);
    }

    #[test]
    fn manual_dismiss_beats_the_default_timer_which_then_noops() {
        let t0 = Instant::now();
        let mut celebration = spawn(CelebrationRequest::new(Category::Custom, "Demo"), t0);
        assert_eq!(celebration.auto_dismiss(), Some(AUTO_DISMISS_DEFAULT));

        // Backdrop click at t=100.
        assert!(celebration.begin_dismiss(t0 + ms(100)));
        assert_eq!(celebration.phase(), Phase::FadingOut);

        // Fade completes at t=1100.
        assert!(celebration.finish_dismiss());
        assert_eq!(celebration.phase(), Phase::Dismissed);

        // The 5000ms default timer still fires later; it must change nothing.
        assert!(!celebration.begin_dismiss(t0 + ms(5000)));
        assert_eq!(celebration.phase(), Phase::Dismissed);
        assert!(!celebration.finish_dismiss());
    }

    #[test]
    fn phases_cannot_be_skipped_or_reversed() {
        let t0 = Instant::now();
        let mut celebration = spawn(CelebrationRequest::new(Category::Custom, "x"), t0);

        // Dismissed cannot be reached from Visible directly.
        assert!(!celebration.finish_dismiss());
        assert_eq!(celebration.phase(), Phase::Visible);

        assert!(celebration.begin_dismiss(t0));
        // A second trigger during the fade is a no-op.
        assert!(!celebration.begin_dismiss(t0 + ms(10)));
        assert_eq!(celebration.phase(), Phase::FadingOut);
    }

    #[test]
    fn racing_dismiss_triggers_yield_one_transition_and_one_completion() {
        let t0 = Instant::now();
        let mut celebration = spawn(CelebrationRequest::new(Category::Achievement, "GG"), t0);

        let transitions = [
            celebration.begin_dismiss(t0 + ms(40)),
            celebration.begin_dismiss(t0 + ms(40)),
            celebration.begin_dismiss(t0 + ms(41)),
        ];
        assert_eq!(transitions.iter().filter(|t| **t).count(), 1);

        let completions = [celebration.finish_dismiss(), celebration.finish_dismiss()];
        assert_eq!(completions.iter().filter(|c| **c).count(), 1);
    }

    #[test]
    fn burst_schedule_per_effect() {
        // Basic: exactly one burst, immediately, forever.
        assert_eq!(bursts_due(EffectKind::Basic, ms(0)), 1);
        assert_eq!(bursts_due(EffectKind::Basic, ms(10_000)), 1);

        // Stars: immediate, then every 1200ms.
        assert_eq!(bursts_due(EffectKind::Stars, ms(0)), 1);
        assert_eq!(bursts_due(EffectKind::Stars, ms(1199)), 1);
        assert_eq!(bursts_due(EffectKind::Stars, ms(1200)), 2);
        assert_eq!(bursts_due(EffectKind::Stars, ms(3600)), 4);

        // Fireworks: four sub-bursts across the first second, then the
        // volley repeats every 2000ms.
        assert_eq!(bursts_due(EffectKind::Fireworks, ms(0)), 1);
        assert_eq!(bursts_due(EffectKind::Fireworks, ms(249)), 1);
        assert_eq!(bursts_due(EffectKind::Fireworks, ms(250)), 2);
        assert_eq!(bursts_due(EffectKind::Fireworks, ms(750)), 4);
        assert_eq!(bursts_due(EffectKind::Fireworks, ms(1999)), 4);
        assert_eq!(bursts_due(EffectKind::Fireworks, ms(2000)), 5);
        assert_eq!(bursts_due(EffectKind::Fireworks, ms(4100)), 9);

        // Custom: never.
        assert_eq!(bursts_due(EffectKind::Custom, ms(0)), 0);
        assert_eq!(bursts_due(EffectKind::Custom, ms(60_000)), 0);
    }

    #[test]
    fn basic_effect_fires_once_on_mount_and_never_again() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sink = RecordingSink::default();
        let mut celebration = spawn(CelebrationRequest::new(Category::Birthday, "x"), t0);

        celebration.advance_effects(t0, &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 1);
        assert_eq!(sink.specs[0].count, 90);

        celebration.advance_effects(t0 + ms(4000), &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 1);
    }

    #[test]
    fn stars_repeat_until_the_phase_leaves_visible() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sink = RecordingSink::default();
        let mut celebration = spawn(
            CelebrationRequest::new(Category::Festival, "x").effect(EffectKind::Stars),
            t0,
        );

        // Each star emission pairs a star burst with a small circle burst.
        celebration.advance_effects(t0, &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 2);
        assert_eq!(sink.specs[0].shape, ParticleShape::Star);

        celebration.advance_effects(t0 + ms(1250), &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 4);

        // Dismissal cancels the schedule the moment the phase changes.
        assert!(celebration.begin_dismiss(t0 + ms(1300)));
        celebration.advance_effects(t0 + ms(2600), &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 4);
    }

    #[test]
    fn burst_due_in_the_same_instant_as_dismissal_is_dropped() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sink = RecordingSink::default();
        let mut celebration = spawn(
            CelebrationRequest::new(Category::Festival, "x").effect(EffectKind::Stars),
            t0,
        );

        // The mount burst was never collected; dismissing first drops it.
        assert!(celebration.begin_dismiss(t0));
        celebration.advance_effects(t0, &mut rng, &mut sink);
        assert!(sink.specs.is_empty());
    }

    #[test]
    fn custom_effect_schedules_nothing() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sink = RecordingSink::default();
        let mut celebration = spawn(
            CelebrationRequest::new(Category::Custom, "x").effect(EffectKind::Custom),
            t0,
        );

        celebration.advance_effects(t0 + ms(10_000), &mut rng, &mut sink);
        assert!(sink.specs.is_empty());
    }

    #[test]
    fn fireworks_sub_bursts_are_randomized_pairs() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sink = RecordingSink::default();
        let mut celebration = spawn(
            CelebrationRequest::new(Category::Achievement, "x").effect(EffectKind::Fireworks),
            t0,
        );

        // Mount emission: one sub-burst, two sides.
        celebration.advance_effects(t0, &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 2);

        let left = &sink.specs[0];
        let right = &sink.specs[1];
        assert!(left.origin.0 < 0.5 && right.origin.0 > 0.5);
        assert!(left.origin.1 < 0.5);

        // The full first volley lands within its one second window.
        celebration.advance_effects(t0 + ms(999), &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 8);
    }

    #[test]
    fn late_effect_ticks_catch_up_on_missed_bursts() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sink = RecordingSink::default();
        let mut celebration = spawn(
            CelebrationRequest::new(Category::Festival, "x").effect(EffectKind::Stars),
            t0,
        );

        // A stalled frame at t=3700 owes emissions for t=0,1200,2400,3600.
        celebration.advance_effects(t0 + ms(3700), &mut rng, &mut sink);
        assert_eq!(sink.specs.len(), 8);
    }
}
