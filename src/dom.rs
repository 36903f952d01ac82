use crate::constants::CANVAS_STYLE;
use crate::transform::opacity_css;
use field_core::SURFACE_OPACITY;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels; (0, 0) if unavailable.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    use wasm_bindgen::JsCast;
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Pin the canvas under the page content as a decorative, click-through layer.
pub fn style_background_canvas(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE {
        _ = style.set_property(name, value);
    }
    _ = style.set_property("opacity", &opacity_css(SURFACE_OPACITY));
    _ = canvas.set_attribute("aria-hidden", "true");
}
