//! Drawing seam between the simulation and whatever paints pixels.
//!
//! The browser front-end implements [`Surface`] over a canvas 2D context;
//! tests implement it with a recorder.

use crate::constants::{FIELD_RGB, LINK_BASE_ALPHA, LINK_WIDTH};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface {
    /// Wipe the whole drawable area.
    fn clear(&mut self, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Colors and line weights shared by particles and links.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStyle {
    pub rgb: [u8; 3],
    pub link_base_alpha: f32,
    pub link_width: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            rgb: FIELD_RGB,
            link_base_alpha: LINK_BASE_ALPHA,
            link_width: LINK_WIDTH,
        }
    }
}
