// Instrumented stand-ins for the browser: a draw-call recorder and a host that
// counts live listeners and pending frames.

#![allow(dead_code)]

use field_core::{EventHost, FieldError, FrameHandle, FrameHost, HostEvent, Rgba, Surface};
use glam::Vec2;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Vec2),
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. })).count()
    }

    pub fn lines(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. })).count()
    }

    pub fn clears(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Clear(_))).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        self.calls.push(DrawCall::Clear(size));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(DrawCall::Line { from, to, width, color });
    }
}

#[derive(Default)]
pub struct HostLedger {
    pub live_listeners: Vec<HostEvent>,
    pub pending_frames: HashSet<i32>,
    pub frames_requested: usize,
    pub frames_canceled: usize,
}

/// Removes itself from the ledger when dropped.
pub struct FakeListener {
    event: HostEvent,
    ledger: Rc<RefCell<HostLedger>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        let mut ledger = self.ledger.borrow_mut();
        if let Some(pos) = ledger.live_listeners.iter().position(|e| *e == self.event) {
            ledger.live_listeners.remove(pos);
        }
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub ledger: Rc<RefCell<HostLedger>>,
    pub next_handle: i32,
    pub reject: Option<HostEvent>,
    pub refuse_frames: bool,
}

impl FakeHost {
    pub fn live_listeners(&self) -> usize {
        self.ledger.borrow().live_listeners.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.ledger.borrow().pending_frames.len()
    }

    /// A second host writing into the same ledger.
    pub fn sharing(&self) -> FakeHost {
        FakeHost {
            ledger: self.ledger.clone(),
            ..FakeHost::default()
        }
    }

    /// Simulate the display firing the pending frame.
    pub fn fire(&mut self, handle: FrameHandle) {
        self.ledger.borrow_mut().pending_frames.remove(&handle.0);
    }
}

impl FrameHost for FakeHost {
    fn request_frame(&mut self) -> Result<FrameHandle, FieldError> {
        if self.refuse_frames {
            return Err(FieldError::FrameUnavailable);
        }
        self.next_handle += 1;
        let mut ledger = self.ledger.borrow_mut();
        ledger.pending_frames.insert(self.next_handle);
        ledger.frames_requested += 1;
        Ok(FrameHandle(self.next_handle))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut ledger = self.ledger.borrow_mut();
        ledger.pending_frames.remove(&handle.0);
        ledger.frames_canceled += 1;
    }
}

impl EventHost for FakeHost {
    type Listener = FakeListener;

    fn listen(&mut self, event: HostEvent) -> Result<FakeListener, FieldError> {
        if self.reject == Some(event) {
            return Err(FieldError::ListenerRejected(event));
        }
        self.ledger.borrow_mut().live_listeners.push(event);
        Ok(FakeListener {
            event,
            ledger: self.ledger.clone(),
        })
    }
}
