//! Confetti particle engine
//!
//! Executes `BurstSpec`s from the celebration core on an iced canvas. The
//! field owns plain particle state plus a step function; the app's frame
//! subscription drives `advance`, and the canvas program only draws. Physics
//! follow the classic confetti model: per-tick velocity decay, gravity and
//! wobble, normalized to 60 ticks per second so frame rate does not change
//! trajectories.

use std::time::Duration;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Theme, mouse};
use rand::Rng;

use crate::features::celebration::{BurstSink, BurstSpec, ParticleShape};

/// Nominal physics rate; `advance` converts wall time into ticks of this rate
const TICK_RATE: f32 = 60.0;
/// Hard particle cap; bursts beyond it are truncated
const MAX_PARTICLES: usize = 1500;

#[derive(Debug, Clone)]
struct Particle {
    /// Normalized anchor within the canvas
    origin: (f32, f32),
    /// Accumulated offset from the anchor, in pixels
    dx: f32,
    dy: f32,
    /// Launch direction in radians, screen coordinates (y grows down)
    angle: f32,
    velocity: f32,
    decay: f32,
    gravity: f32,
    drift: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
    tilt_speed: f32,
    /// Age and lifetime in ticks
    ticks: f32,
    ttl: f32,
    /// Half-extent in pixels
    size: f32,
    shape: ParticleShape,
    color: Color,
}

impl Particle {
    fn step(&mut self, ticks: f32) {
        self.wobble += self.wobble_speed * ticks;
        self.tilt += self.tilt_speed * ticks;
        self.velocity *= self.decay.powf(ticks);
        self.dx += (self.angle.cos() * self.velocity + self.drift) * ticks;
        self.dy += (self.angle.sin() * self.velocity + self.gravity) * ticks;
        self.ticks += ticks;
    }

    fn alive(&self) -> bool {
        self.ticks < self.ttl
    }

    /// Remaining life as 1.0 -> 0.0
    fn life(&self) -> f32 {
        (1.0 - self.ticks / self.ttl).clamp(0.0, 1.0)
    }
}

/// Owns every live particle; implements the celebration core's burst sink
#[derive(Debug, Default)]
pub struct ConfettiField {
    particles: Vec<Particle>,
}

impl ConfettiField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step all particles by `dt` and drop the expired ones
    pub fn advance(&mut self, dt: Duration) {
        if self.particles.is_empty() {
            return;
        }

        let ticks = dt.as_secs_f32() * TICK_RATE;
        for particle in &mut self.particles {
            particle.step(ticks);
        }
        self.particles.retain(Particle::alive);
    }

    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.particles.len()
    }
}

impl BurstSink for ConfettiField {
    fn fire(&mut self, spec: BurstSpec) {
        let mut rng = rand::rng();
        let budget = MAX_PARTICLES.saturating_sub(self.particles.len());
        let count = (spec.count as usize).min(budget);

        let base_angle = spec.angle_deg.to_radians();
        let spread = spec.spread_deg.to_radians();

        for _ in 0..count {
            let deviation = if spread > 0.0 {
                rng.random_range(-spread / 2.0..spread / 2.0)
            } else {
                0.0
            };
            // Screen space points y down, so launch angles flip sign.
            let angle = -(base_angle + deviation);

            let color = if spec.colors.is_empty() {
                Color::WHITE
            } else {
                spec.colors[rng.random_range(0..spec.colors.len())]
            };

            self.particles.push(Particle {
                origin: spec.origin,
                dx: 0.0,
                dy: 0.0,
                angle,
                velocity: spec.velocity * rng.random_range(0.75..1.0),
                decay: spec.decay,
                gravity: spec.gravity,
                drift: spec.drift,
                wobble: rng.random_range(0.0..std::f32::consts::TAU),
                wobble_speed: rng.random_range(0.05..0.12),
                tilt: rng.random_range(0.0..std::f32::consts::TAU),
                tilt_speed: rng.random_range(0.05..0.15),
                ticks: 0.0,
                ttl: spec.ttl as f32 * rng.random_range(0.7..1.0),
                size: 5.0 * spec.scalar * rng.random_range(0.8..1.2),
                shape: spec.shape,
                color,
            });
        }
    }
}

/// Canvas program drawing one field, with an overlay-wide opacity multiplier
struct ConfettiLayer<'a> {
    field: &'a ConfettiField,
    opacity: f32,
}

impl<Message> Program<Message> for ConfettiLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in &self.field.particles {
            let center = Point::new(
                particle.origin.0 * bounds.width + particle.dx,
                particle.origin.1 * bounds.height + particle.dy,
            );
            let alpha = particle.life() * self.opacity;
            if alpha <= 0.01 {
                continue;
            }
            let color = Color {
                a: particle.color.a * alpha,
                ..particle.color
            };

            match particle.shape {
                ParticleShape::Circle => {
                    frame.fill(&Path::circle(center, particle.size * 0.6), color);
                }
                ParticleShape::Square => {
                    frame.fill(&quad_path(particle, center), color);
                }
                ParticleShape::Star => {
                    frame.fill(&star_path(particle, center), color);
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Tilted quad; the wobble squashes one axis so flakes appear to tumble
fn quad_path(particle: &Particle, center: Point) -> Path {
    let w = particle.size * (0.6 + 0.4 * particle.wobble.sin().abs());
    let h = particle.size;
    let (sin, cos) = particle.tilt.sin_cos();

    let corner = |x: f32, y: f32| {
        Point::new(
            center.x + x * cos - y * sin,
            center.y + x * sin + y * cos,
        )
    };

    Path::new(|b| {
        b.move_to(corner(-w, -h));
        b.line_to(corner(w, -h));
        b.line_to(corner(w, h));
        b.line_to(corner(-w, h));
        b.close();
    })
}

/// Five-spiked star rotated by the tilt phase
fn star_path(particle: &Particle, center: Point) -> Path {
    let outer = particle.size;
    let inner = particle.size * 0.45;

    Path::new(|b| {
        for k in 0..10 {
            let radius = if k % 2 == 0 { outer } else { inner };
            let angle = particle.tilt + k as f32 * std::f32::consts::PI / 5.0;
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            if k == 0 {
                b.move_to(point);
            } else {
                b.line_to(point);
            }
        }
        b.close();
    })
}

/// Full-size confetti layer for stacking over the page
pub fn view_confetti<'a, Message: 'a>(
    field: &'a ConfettiField,
    opacity: f32,
) -> Element<'a, Message> {
    Canvas::new(ConfettiLayer { field, opacity })
        .width(Fill)
        .height(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(count: u32, ttl: u32) -> BurstSpec {
        BurstSpec {
            count,
            angle_deg: 90.0,
            spread_deg: 45.0,
            velocity: 45.0,
            decay: 0.9,
            gravity: 1.0,
            drift: 0.0,
            ttl,
            scalar: 1.0,
            shape: ParticleShape::Square,
            colors: vec![Color::WHITE],
            origin: (0.5, 0.5),
        }
    }

    fn ticks(n: u32) -> Duration {
        Duration::from_secs_f32(n as f32 / TICK_RATE)
    }

    #[test]
    fn burst_spawns_exactly_count_particles() {
        let mut field = ConfettiField::new();
        field.fire(spec(80, 100));
        assert_eq!(field.len(), 80);
    }

    #[test]
    fn particles_expire_within_their_ttl() {
        let mut field = ConfettiField::new();
        field.fire(spec(50, 40));

        field.advance(ticks(10));
        assert!(!field.is_idle());

        // Lifetime jitter only shortens lives, never extends them.
        field.advance(ticks(31));
        assert!(field.is_idle());
    }

    #[test]
    fn advancing_an_idle_field_stays_idle() {
        let mut field = ConfettiField::new();
        field.advance(ticks(60));
        assert!(field.is_idle());
    }

    #[test]
    fn straight_up_burst_moves_particles_up() {
        let mut field = ConfettiField::new();
        let mut narrow = spec(30, 100);
        narrow.spread_deg = 0.0;
        narrow.gravity = 0.0;
        field.fire(narrow);

        field.advance(ticks(2));
        assert!(field.particles.iter().all(|p| p.dy < 0.0));
    }

    #[test]
    fn particle_cap_truncates_oversized_bursts() {
        let mut field = ConfettiField::new();
        field.fire(spec(2000, 100));
        field.fire(spec(2000, 100));
        assert_eq!(field.len(), MAX_PARTICLES);
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let mut field = ConfettiField::new();
        let mut colorless = spec(5, 100);
        colorless.colors = Vec::new();
        field.fire(colorless);
        assert!(field.particles.iter().all(|p| p.color == Color::WHITE));
    }
}
