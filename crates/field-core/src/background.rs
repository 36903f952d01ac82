//! The animated particle background as one owned object.
//!
//! Owns the particle set, the link scratch buffer and the frame scheduler.
//! Each tick consumes the latest input vector, finishes the whole simulation
//! step and only then draws, so no half-updated state is ever rendered.

use crate::device::DeviceProfile;
use crate::host::FrameHost;
use crate::particles::ParticleField;
use crate::proximity::Link;
use crate::render::{draw_links, draw_particles};
use crate::scheduler::{FrameScheduler, TickOutcome};
use crate::surface::{FieldStyle, Surface};
use glam::Vec2;
use rand::Rng;

pub struct ParticleBackground {
    profile: DeviceProfile,
    style: FieldStyle,
    field: ParticleField,
    links: Vec<Link>,
    scheduler: FrameScheduler,
}

impl ParticleBackground {
    pub fn new<R: Rng + ?Sized>(profile: DeviceProfile, width: f32, height: f32, rng: &mut R) -> Self {
        let field = ParticleField::new(profile.particle_count, width, height, rng);
        Self::from_field(profile, field)
    }

    pub fn from_field(profile: DeviceProfile, field: ParticleField) -> Self {
        Self {
            profile,
            style: FieldStyle::default(),
            field,
            links: Vec::new(),
            scheduler: FrameScheduler::new(profile.frame_skip),
        }
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Links drawn by the most recent rendered tick.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    pub fn start<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let Err(e) = self.scheduler.start(host) {
            log::warn!("[loop] not started: {e}");
        }
    }

    /// Cancel the loop; true only the first time.
    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.scheduler.cancel(host)
    }

    pub fn tick<S, H>(&mut self, input: Vec2, surface: &mut S, host: &mut H) -> TickOutcome
    where
        S: Surface + ?Sized,
        H: FrameHost + ?Sized,
    {
        let outcome = self.scheduler.begin_tick();
        if outcome == TickOutcome::Rendered {
            self.field.step(input);
            draw_particles(surface, &self.field, &self.style);
            draw_links(
                surface,
                &self.field,
                self.profile.connection_stride,
                self.profile.max_distance,
                &self.style,
                &mut self.links,
            );
        }
        if outcome != TickOutcome::Canceled {
            if let Err(e) = self.scheduler.finish_tick(host) {
                log::warn!("[loop] stopped: {e}");
            }
        }
        outcome
    }
}
