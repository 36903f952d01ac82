use crate::dom;
use crate::frame::Mount;
use field_core::{EventHost, FieldError, HostEvent, InputSampler};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A passive DOM listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: Box<dyn FnMut(web::Event)>,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let callback = Closure::wrap(handler);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Window-level listener factory feeding the shared input sampler.
pub struct WindowEvents {
    target: web::EventTarget,
    sampler: Rc<RefCell<InputSampler>>,
    mount: Weak<RefCell<Mount>>,
}

impl WindowEvents {
    pub fn new(
        window: &web::Window,
        sampler: Rc<RefCell<InputSampler>>,
        mount: Weak<RefCell<Mount>>,
    ) -> Self {
        Self {
            target: window.clone().into(),
            sampler,
            mount,
        }
    }
}

impl EventHost for WindowEvents {
    type Listener = EventListener;

    fn listen(&mut self, event: HostEvent) -> Result<EventListener, FieldError> {
        let handler: Box<dyn FnMut(web::Event)> = match event {
            HostEvent::PointerMove => {
                let sampler = self.sampler.clone();
                Box::new(move |ev: web::Event| {
                    if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
                        let (w, h) = dom::viewport_size();
                        sampler
                            .borrow_mut()
                            .on_pointer(m.client_x() as f64, m.client_y() as f64, w, h);
                    }
                })
            }
            HostEvent::DeviceOrientation => {
                let sampler = self.sampler.clone();
                Box::new(move |ev: web::Event| {
                    if let Some(o) = ev.dyn_ref::<web::DeviceOrientationEvent>() {
                        sampler.borrow_mut().on_orientation(o.beta(), o.gamma());
                    }
                })
            }
            HostEvent::Resize => {
                let mount = self.mount.clone();
                Box::new(move |_ev: web::Event| {
                    if let Some(m) = mount.upgrade() {
                        if let Ok(mut m) = m.try_borrow_mut() {
                            m.resize();
                        }
                    }
                })
            }
        };
        EventListener::passive(&self.target, event.dom_name(), handler).map_err(|e| {
            log::warn!("[input] {} listener failed: {:?}", event.dom_name(), e);
            FieldError::ListenerRejected(event)
        })
    }
}
