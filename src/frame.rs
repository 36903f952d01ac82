use crate::canvas::CanvasSurface;
use crate::decor::Decor;
use crate::events::{EventListener, WindowEvents};
use field_core::{FieldError, FieldMount, FrameHandle, FrameHost};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` host. Clones share the same frame callback.
#[derive(Clone)]
pub struct RafHost {
    window: web::Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafHost {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Install the per-frame callback. It holds only a weak reference so the
    /// mount can be dropped while a frame is queued.
    pub fn install(&self, mount: Weak<RefCell<Mount>>) {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(m) = mount.upgrade() {
                if let Ok(mut m) = m.try_borrow_mut() {
                    m.frame();
                }
            }
        }) as Box<dyn FnMut()>);
        *self.callback.borrow_mut() = Some(closure);
    }

    pub fn uninstall(&self) {
        self.callback.borrow_mut().take();
    }
}

impl FrameHost for RafHost {
    fn request_frame(&mut self) -> Result<FrameHandle, FieldError> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref().ok_or(FieldError::FrameUnavailable)?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|_| FieldError::FrameUnavailable)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Browser side of one mounted background: the platform-free mount plus
/// the page decor it drives and the frame clock.
pub struct Mount {
    pub field: FieldMount<EventListener, RafHost, CanvasSurface>,
    decor: Decor,
    last_instant: Instant,
}

impl Mount {
    pub fn new(field: FieldMount<EventListener, RafHost, CanvasSurface>, decor: Decor) -> Self {
        Self {
            field,
            decor,
            last_instant: Instant::now(),
        }
    }

    pub fn attach(&mut self, events: &mut WindowEvents) -> Result<(), FieldError> {
        self.last_instant = Instant::now();
        self.field.attach(events)
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let report = self.field.frame(dt_sec);
        self.decor.apply(self.field.motion(), report.motion);
    }

    pub fn resize(&mut self) {
        let size = self.field.surface_mut().fit_viewport();
        self.field.resize(size.x, size.y);
    }

    /// Release listeners and the pending frame, then drop the frame callback
    /// and the inline transforms. Idempotent.
    pub fn teardown(&mut self) {
        if self.field.teardown() {
            self.field.host().uninstall();
            self.decor.reset();
        }
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.teardown();
    }
}
