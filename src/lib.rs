#![cfg(target_arch = "wasm32")]
//! Browser front-end for the parallax particle background.
//!
//! Mounts a click-through canvas behind the page, feeds it pointer or
//! gyroscope input and drives the decorative motion consumers from the same
//! input source.

use anyhow::anyhow;
use field_core::{classify, FieldMount, ParticleBackground};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod decor;
mod dom;
mod events;
mod frame;
mod transform;

thread_local! {
    static AUTO_MOUNT: RefCell<Option<BackgroundHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    let canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::CANVAS_ID))
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    match canvas {
        Some(canvas) => {
            let handle = mount(canvas);
            AUTO_MOUNT.with(|slot| *slot.borrow_mut() = handle);
        }
        None => log::info!("[field] no #{} canvas; waiting for mount()", constants::CANVAS_ID),
    }
    Ok(())
}

/// Tear down the background mounted automatically at start, if any.
#[wasm_bindgen]
pub fn stop() {
    if let Some(handle) = AUTO_MOUNT.with(|slot| slot.borrow_mut().take()) {
        handle.unmount();
    }
}

/// Mount the background on `canvas`. Returns `None` (and renders nothing)
/// when the environment cannot support it.
#[wasm_bindgen]
pub fn mount(canvas: web::HtmlCanvasElement) -> Option<BackgroundHandle> {
    match try_mount(canvas) {
        Ok(mount) => Some(BackgroundHandle { mount }),
        Err(e) => {
            log::warn!("[field] background disabled: {e:#}");
            None
        }
    }
}

fn try_mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<Rc<RefCell<frame::Mount>>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    let profile = classify(&dom::user_agent());
    log::info!(
        "[field] mobile={} particles={} frame_skip={} stride={} max_distance={}",
        profile.is_mobile,
        profile.particle_count,
        profile.frame_skip,
        profile.connection_stride,
        profile.max_distance
    );

    let surface = canvas::CanvasSurface::new(canvas)?;
    dom::style_background_canvas(surface.canvas());
    let size = surface.fit_viewport();

    let mut rng = StdRng::from_entropy();
    let background = ParticleBackground::new(profile, size.x, size.y, &mut rng);
    let host = frame::RafHost::new(window.clone());
    let field = FieldMount::new(background, surface, host.clone());
    let sampler = field.sampler();
    let decor = decor::Decor::discover(&document);

    let mount = Rc::new(RefCell::new(frame::Mount::new(field, decor)));
    host.install(Rc::downgrade(&mount));

    // on failure `mount` drops here and tears down whatever was acquired
    let mut window_events = events::WindowEvents::new(&window, sampler, Rc::downgrade(&mount));
    let attached = mount.borrow_mut().attach(&mut window_events);
    attached?;
    log::info!("[field] mounted, input={:?}", profile.input_source());
    Ok(mount)
}

/// Owner of a mounted background. Dropping it (or calling `unmount`) removes
/// every listener and cancels the pending frame.
#[wasm_bindgen]
pub struct BackgroundHandle {
    mount: Rc<RefCell<frame::Mount>>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    pub fn unmount(self) {
        self.mount.borrow_mut().teardown();
    }

    #[wasm_bindgen(getter)]
    pub fn is_mobile(&self) -> bool {
        self.mount.borrow().field.background().profile().is_mobile
    }

    /// Current smoothed outputs, for page code that styles its own elements.
    pub fn motion(&self) -> MotionOutputs {
        let m = self.mount.borrow();
        let rig = m.field.motion();
        let offset = rig.floating.offset();
        let hero = rig.hero.tilt();
        let about = rig.about.tilt();
        MotionOutputs {
            offset_x: offset.x,
            offset_y: offset.y,
            hero_rotate_x: hero.rotate_x_deg,
            hero_rotate_y: hero.rotate_y_deg,
            about_rotate_x: about.rotate_x_deg,
            about_rotate_y: about.rotate_y_deg,
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionOutputs {
    pub offset_x: f32,
    pub offset_y: f32,
    pub hero_rotate_x: f32,
    pub hero_rotate_y: f32,
    pub about_rotate_x: f32,
    pub about_rotate_y: f32,
}
