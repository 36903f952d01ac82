use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// A drifting point. Only `position` changes after creation.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    velocity: Vec2,
    size: f32,
    alpha: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, alpha: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            alpha,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        Self {
            position: Vec2::new(
                wrap_coord(rng.gen::<f32>() * bounds.x, bounds.x),
                wrap_coord(rng.gen::<f32>() * bounds.y, bounds.y),
            ),
            velocity: Vec2::new(
                rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
                rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
            ),
            size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            alpha: rng.gen_range(PARTICLE_ALPHA_MIN..PARTICLE_ALPHA_MAX),
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

/// Depth layer multiplier: 1, 2, 3, 1, 2, 3, ...
#[inline]
pub fn depth_multiplier(index: usize) -> f32 {
    (index % DEPTH_LAYERS + 1) as f32
}

/// Wrap a coordinate onto [0, extent).
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Fixed-size particle set on a torus the size of the surface.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let bounds = clamp_bounds(width, height);
        let particles = (0..count).map(|_| Particle::random(rng, bounds)).collect();
        Self { particles, bounds }
    }

    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        let mut field = Self {
            particles,
            bounds: clamp_bounds(width, height),
        };
        field.rewrap();
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = clamp_bounds(width, height);
        self.rewrap();
    }

    /// Advance one tick: drift plus input parallax scaled by depth layer,
    /// then wrap around the edges.
    pub fn step(&mut self, input: Vec2) {
        let bounds = self.bounds;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let parallax = input * depth_multiplier(i) * PARALLAX_GAIN;
            let next = p.position + p.velocity + parallax;
            p.position = Vec2::new(wrap_coord(next.x, bounds.x), wrap_coord(next.y, bounds.y));
        }
    }

    fn rewrap(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.position = Vec2::new(
                wrap_coord(p.position.x, bounds.x),
                wrap_coord(p.position.y, bounds.y),
            );
        }
    }
}

#[inline]
fn clamp_bounds(width: f32, height: f32) -> Vec2 {
    let w = if width.is_finite() { width.max(1.0) } else { 1.0 };
    let h = if height.is_finite() { height.max(1.0) } else { 1.0 };
    Vec2::new(w, h)
}
