//! Spring-damped scalar smoothing.
//!
//! A unit-mass damped oscillator pulled toward a target. Consumers write raw
//! targets whenever input changes and call [`Spring::update`] once per frame;
//! the output never jumps, it accelerates and settles.

use crate::constants::{SPRING_MAX_DT_SEC, SPRING_MAX_STEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(damping: f32, stiffness: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// 1.0 is critical damping; above is overdamped, below oscillates.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    pub config: SpringConfig,
    current: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self::with_value(config, 0.0)
    }

    pub fn with_value(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            current: value,
            velocity: 0.0,
            target: value,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.current == self.target
    }

    /// Advance by `dt_sec`, integrating in fixed substeps (semi-implicit Euler).
    pub fn update(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() || !(dt_sec > 0.0) {
            return self.current;
        }
        let dt = dt_sec.min(SPRING_MAX_DT_SEC);
        let steps = (dt / SPRING_MAX_STEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig {
            damping,
            stiffness,
            mass,
        } = self.config;
        for _ in 0..steps {
            let displacement = self.current - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.current += self.velocity * h;
        }
        if (self.current - self.target).abs() < SPRING_REST_DELTA && self.velocity.abs() < SPRING_REST_SPEED {
            self.current = self.target;
            self.velocity = 0.0;
        }
        self.current
    }
}
