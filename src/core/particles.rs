use super::color::Rgb;
use super::config::FieldConfig;
use super::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Minimal 2D raster API the field renders through.
pub trait DrawSurface {
    fn clear(&mut self, size: Vec2);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    /// Radial gradient from `alpha` at the center to transparent at `radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Base velocity the current velocity relaxes toward.
    pub drift: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub opacity: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2, config: &FieldConfig) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let radius = rng.gen::<f32>() * config.particle_size + MIN_PARTICLE_RADIUS;
        let drift = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.speed,
            (rng.gen::<f32>() - 0.5) * config.speed,
        );
        Self {
            position,
            drift,
            velocity: drift,
            radius,
            color: config.particle_color,
            opacity: config.particle_opacity,
        }
    }

    /// Damp toward drift, integrate, then bounce off the walls of `bounds`.
    pub fn update(&mut self, bounds: Vec2) {
        self.velocity += (self.drift - self.velocity) * VELOCITY_DAMPING;
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
            self.position.x = if self.position.x < 0.0 { 0.0 } else { bounds.x };
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
            self.position.y = if self.position.y < 0.0 { 0.0 } else { bounds.y };
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_disc(self.position, self.radius, self.color, self.opacity);
        surface.fill_glow(
            self.position,
            self.radius * GLOW_RADIUS_FACTOR,
            self.color,
            self.opacity,
        );
    }
}

/// Linear alpha falloff: `peak` at distance 0, nothing at or beyond `range`.
#[inline]
pub fn falloff(distance: f32, range: f32, peak: f32) -> Option<f32> {
    (distance < range).then(|| (peak * (1.0 - distance / range)).max(0.0))
}

/// Velocity impulse pushing a particle at `particle` away from `pointer`.
///
/// Magnitude is `(radius - d) / radius * 0.5`. Coincident points get an
/// impulse along +x, since `atan2(0, 0)` is 0.
#[inline]
pub fn repulsion(particle: Vec2, pointer: Vec2, radius: f32) -> Option<Vec2> {
    let offset = particle - pointer;
    let distance = offset.length();
    if !(distance < radius) {
        return None;
    }
    let angle = offset.y.atan2(offset.x);
    let force = (radius - distance) / radius;
    Some(Vec2::new(angle.cos(), angle.sin()) * force * POINTER_IMPULSE_SCALE)
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
    bounds: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, bounds: Vec2, viewport_width: f32, seed: u64) -> Self {
        Self::with_rng(config, bounds, viewport_width, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: FieldConfig, bounds: Vec2, viewport_width: f32, rng: StdRng) -> Self {
        let mut field = Self {
            config,
            particles: Vec::new(),
            pointer: None,
            bounds,
            rng,
        };
        field.populate(viewport_width);
        field
    }

    /// Replace the whole collection with a fresh batch sized for the viewport.
    pub fn populate(&mut self, viewport_width: f32) {
        let count = self.config.population(viewport_width);
        let bounds = self.bounds;
        let config = &self.config;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, bounds, config))
            .collect();
        log::debug!(
            "[particles] populated {} particles in {:.0}x{:.0}",
            count,
            bounds.x,
            bounds.y
        );
    }

    /// Adopt new canvas bounds. Existing particles are left where they are;
    /// the collection is only rebuilt when it is empty. Returns whether it was.
    pub fn resize(&mut self, bounds: Vec2, viewport_width: f32) -> bool {
        self.bounds = bounds;
        if self.particles.is_empty() {
            self.populate(viewport_width);
            return true;
        }
        false
    }

    /// Ignored unless the field is interactive.
    pub fn set_pointer(&mut self, position: Vec2) {
        if self.config.interactive {
            self.pointer = Some(position);
        }
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Drop every particle at once (teardown).
    pub fn clear(&mut self) {
        self.particles.clear();
        self.pointer = None;
    }

    /// One animation frame: clear, move and draw particles, join neighbours,
    /// then apply the pointer.
    pub fn step<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.bounds);
        for particle in &mut self.particles {
            particle.update(self.bounds);
            particle.draw(surface);
        }
        self.connect(surface);
        if self.config.interactive {
            if let Some(pointer) = self.pointer {
                self.repel(pointer, surface);
            }
        }
    }

    fn connect<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let range = self.config.connect_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if let Some(alpha) = falloff(distance, range, self.config.line_opacity) {
                    surface.stroke_line(
                        a.position,
                        b.position,
                        self.config.line_color,
                        alpha,
                        CONNECTION_LINE_WIDTH,
                    );
                }
            }
        }
    }

    fn repel<S: DrawSurface + ?Sized>(&mut self, pointer: Vec2, surface: &mut S) {
        let radius = self.config.pointer_radius;
        let line_color = self.config.line_color;
        for particle in &mut self.particles {
            let distance = particle.position.distance(pointer);
            let Some(alpha) = falloff(distance, radius, POINTER_LINE_OPACITY) else {
                continue;
            };
            surface.stroke_line(particle.position, pointer, line_color, alpha, POINTER_LINE_WIDTH);
            if let Some(impulse) = repulsion(particle.position, pointer, radius) {
                particle.velocity += impulse;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
