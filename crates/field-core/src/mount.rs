//! One mounted background with everything it owns.
//!
//! A [`FieldMount`] holds the particle background, the shared input sampler,
//! the decorative smoothers, the frame host and the listeners acquired for
//! the profile's input source. Teardown runs once, from [`FieldMount::teardown`]
//! or from `Drop`, so every exit path (unmount, drop, failed attach) leaves no
//! listener and no pending frame behind.

use crate::background::ParticleBackground;
use crate::error::FieldError;
use crate::host::{EventHost, FrameHost};
use crate::input::InputSampler;
use crate::lifecycle::Subscriptions;
use crate::motion::{MotionChange, MotionRig};
use crate::proximity::candidate_pairs;
use crate::scheduler::TickOutcome;
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;

/// What one native frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub outcome: TickOutcome,
    pub motion: MotionChange,
}

pub struct FieldMount<L, H, S>
where
    H: FrameHost,
{
    background: ParticleBackground,
    surface: S,
    sampler: Rc<RefCell<InputSampler>>,
    motion: MotionRig,
    host: H,
    subscriptions: Option<Subscriptions<L>>,
    torn_down: bool,
}

impl<L, H, S> FieldMount<L, H, S>
where
    H: FrameHost,
    S: Surface,
{
    pub fn new(background: ParticleBackground, surface: S, host: H) -> Self {
        let source = background.profile().input_source();
        Self {
            background,
            surface,
            sampler: Rc::new(RefCell::new(InputSampler::new(source))),
            motion: MotionRig::new(source),
            host,
            subscriptions: None,
            torn_down: false,
        }
    }

    /// Subscribe to the profile's input source plus resize, then request the
    /// first frame. On error nothing stays registered.
    pub fn attach<E>(&mut self, events: &mut E) -> Result<(), FieldError>
    where
        E: EventHost<Listener = L>,
    {
        if self.torn_down {
            return Ok(());
        }
        let profile = *self.background.profile();
        let source = profile.input_source();
        self.subscriptions = Some(Subscriptions::acquire(events, source)?);
        self.background.start(&mut self.host);
        log::info!(
            "[field] attached input={:?} pairs_per_frame={}",
            source,
            candidate_pairs(profile.particle_count, profile.connection_stride)
        );
        Ok(())
    }

    /// Handle to the input cache that event listeners write into.
    pub fn sampler(&self) -> Rc<RefCell<InputSampler>> {
        self.sampler.clone()
    }

    pub fn background(&self) -> &ParticleBackground {
        &self.background
    }

    pub fn motion(&self) -> &MotionRig {
        &self.motion
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.as_ref().map_or(0, Subscriptions::len)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// One native frame. The smoothers advance every time; the particle field
    /// follows the profile's frame-skip.
    pub fn frame(&mut self, dt_sec: f32) -> FrameReport {
        let input = self.sampler.borrow().latest();
        let motion = self.motion.update(input, dt_sec);
        let outcome = self.background.tick(input, &mut self.surface, &mut self.host);
        FrameReport { outcome, motion }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.background.resize(width, height);
    }
}

impl<L, H, S> FieldMount<L, H, S>
where
    H: FrameHost,
{
    /// Release listeners and cancel the pending frame. True only the first time.
    pub fn teardown(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        if let Some(mut subs) = self.subscriptions.take() {
            subs.release();
        }
        self.background.stop(&mut self.host);
        log::info!(
            "[field] unmounted after {} frames",
            self.background.scheduler().frame_counter()
        );
        true
    }
}

impl<L, H, S> Drop for FieldMount<L, H, S>
where
    H: FrameHost,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
