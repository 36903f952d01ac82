// CSS transform strings for the decorative motion consumers.
// Kept free of web_sys so host-side tests can include it directly.

use field_core::Tilt;
use glam::Vec2;

#[inline]
pub fn translate_css(offset: Vec2) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0px)", offset.x, offset.y)
}

#[inline]
pub fn tilt_css(tilt: Tilt) -> String {
    format!(
        "rotateX({:.3}deg) rotateY({:.3}deg)",
        tilt.rotate_x_deg, tilt.rotate_y_deg
    )
}

/// `opacity` value for the background surface, e.g. "0.6".
#[inline]
pub fn opacity_css(opacity: f32) -> String {
    format!("{}", opacity.clamp(0.0, 1.0))
}
