use crate::constants::TILT_DEG_PER_UNIT;
use crate::input::InputSource;
use crate::spring::{Spring, SpringConfig};
use glam::Vec2;

/// Spring parameters plus the raw-target scale for each input source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPreset {
    pub spring: SpringConfig,
    pub pointer_scale: f32,
    pub orientation_scale: f32,
}

impl MotionPreset {
    /// Floating decorative elements: snappier, larger travel.
    pub const FLOATING: MotionPreset = MotionPreset {
        spring: SpringConfig::new(25.0, 150.0),
        pointer_scale: 25.0,
        orientation_scale: 30.0,
    };

    /// 3D tilt of the hero card.
    pub const HERO_TILT: MotionPreset = MotionPreset {
        spring: SpringConfig::new(30.0, 100.0),
        pointer_scale: 15.0,
        orientation_scale: 20.0,
    };

    /// 3D tilt of the about card.
    pub const ABOUT_TILT: MotionPreset = MotionPreset {
        spring: SpringConfig::new(30.0, 100.0),
        pointer_scale: 10.0,
        orientation_scale: 15.0,
    };

    pub fn scale_for(&self, source: InputSource) -> f32 {
        match source {
            InputSource::Pointer => self.pointer_scale,
            InputSource::Orientation => self.orientation_scale,
        }
    }
}

/// Rotation in degrees for a CSS `rotateX`/`rotateY` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    /// Tilt toward the pointer: y drives rotateX, inverted x drives rotateY.
    pub fn from_offset(offset: Vec2) -> Self {
        Self {
            rotate_x_deg: offset.y * TILT_DEG_PER_UNIT,
            rotate_y_deg: -offset.x * TILT_DEG_PER_UNIT,
        }
    }
}

/// One motion consumer: two springs following the shared input vector.
#[derive(Clone, Debug)]
pub struct MotionLayer {
    x: Spring,
    y: Spring,
    scale: f32,
}

impl MotionLayer {
    pub fn new(preset: MotionPreset, source: InputSource) -> Self {
        Self {
            x: Spring::new(preset.spring),
            y: Spring::new(preset.spring),
            scale: preset.scale_for(source),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Chase the scaled input. Returns false when both springs were already
    /// settled on it, so the output did not change.
    pub fn update(&mut self, input: Vec2, dt_sec: f32) -> bool {
        self.x.set_target(input.x * self.scale);
        self.y.set_target(input.y * self.scale);
        if self.is_at_rest() {
            return false;
        }
        self.x.update(dt_sec);
        self.y.update(dt_sec);
        true
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn tilt(&self) -> Tilt {
        Tilt::from_offset(self.offset())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

/// Which layers produced a new output on the last update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionChange {
    pub floating: bool,
    pub hero: bool,
    pub about: bool,
}

impl MotionChange {
    pub fn any(&self) -> bool {
        self.floating || self.hero || self.about
    }
}

/// Every decorative consumer on the page, fed from one input source.
#[derive(Clone, Debug)]
pub struct MotionRig {
    pub floating: MotionLayer,
    pub hero: MotionLayer,
    pub about: MotionLayer,
}

impl MotionRig {
    pub fn new(source: InputSource) -> Self {
        Self {
            floating: MotionLayer::new(MotionPreset::FLOATING, source),
            hero: MotionLayer::new(MotionPreset::HERO_TILT, source),
            about: MotionLayer::new(MotionPreset::ABOUT_TILT, source),
        }
    }

    pub fn update(&mut self, input: Vec2, dt_sec: f32) -> MotionChange {
        MotionChange {
            floating: self.floating.update(input, dt_sec),
            hero: self.hero.update(input, dt_sec),
            about: self.about.update(input, dt_sec),
        }
    }

    /// Translation for a floating element with the given parallax factor.
    pub fn floating_offset(&self, factor: f32) -> Vec2 {
        self.floating.offset() * factor
    }
}
