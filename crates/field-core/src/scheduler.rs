use crate::error::FieldError;
use crate::host::{FrameHandle, FrameHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Simulation and render ran this frame.
    Rendered,
    /// Frame-skip policy: nothing ran, next frame still requested.
    Skipped,
    /// Loop was canceled; the tick did nothing and requested nothing.
    Canceled,
}

/// Frame counter, cancellation flag and the pending frame token.
#[derive(Debug)]
pub struct FrameScheduler {
    frame_counter: u64,
    frame_skip: u32,
    canceled: bool,
    pending: Option<FrameHandle>,
}

impl FrameScheduler {
    pub fn new(frame_skip: u32) -> Self {
        Self {
            frame_counter: 0,
            frame_skip: frame_skip.max(1),
            canceled: false,
            pending: None,
        }
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Request the first frame. No-op if already running or canceled.
    pub fn start<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> Result<(), FieldError> {
        if self.canceled || self.pending.is_some() {
            return Ok(());
        }
        self.pending = Some(host.request_frame()?);
        Ok(())
    }

    /// Called when a requested frame fires. Decides whether work runs.
    pub fn begin_tick(&mut self) -> TickOutcome {
        self.pending = None;
        self.frame_counter += 1;
        if self.canceled {
            TickOutcome::Canceled
        } else if self.frame_counter % self.frame_skip as u64 == 0 {
            TickOutcome::Rendered
        } else {
            TickOutcome::Skipped
        }
    }

    /// Request the next frame unless canceled.
    pub fn finish_tick<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> Result<(), FieldError> {
        if self.canceled {
            return Ok(());
        }
        self.pending = Some(host.request_frame()?);
        Ok(())
    }

    /// Stop the loop. Returns true only for the call that actually canceled.
    pub fn cancel<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.canceled {
            return false;
        }
        self.canceled = true;
        if let Some(handle) = self.pending.take() {
            host.cancel_frame(handle);
        }
        true
    }
}
