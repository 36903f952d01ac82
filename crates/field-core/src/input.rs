use crate::constants::ORIENTATION_FULL_TILT_DEG;
use crate::host::HostEvent;
use glam::Vec2;

/// Where the normalized input vector comes from. Chosen once per mount from
/// the device profile and shared by every motion consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Orientation,
}

impl InputSource {
    /// The single host event this source listens to.
    pub fn event(self) -> HostEvent {
        match self {
            InputSource::Pointer => HostEvent::PointerMove,
            InputSource::Orientation => HostEvent::DeviceOrientation,
        }
    }
}

// ---------------- Normalization ----------------
/// Map a client-space pointer position to [-1, 1] on both axes, with the
/// viewport center at the origin. A degenerate viewport yields `None`.
#[inline]
pub fn normalize_pointer(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Option<Vec2> {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return None;
    }
    let x = ((client_x / viewport_w - 0.5) * 2.0).clamp(-1.0, 1.0);
    let y = ((client_y / viewport_h - 0.5) * 2.0).clamp(-1.0, 1.0);
    (x.is_finite() && y.is_finite()).then(|| Vec2::new(x as f32, y as f32))
}

/// Map gyroscope angles to [-1, 1]. `gamma` (left/right) drives x and `beta`
/// (front/back) drives y. A missing reading on either axis discards the sample.
#[inline]
pub fn normalize_orientation(beta: Option<f64>, gamma: Option<f64>) -> Option<Vec2> {
    let (beta, gamma) = (beta?, gamma?);
    if !(beta.is_finite() && gamma.is_finite()) {
        return None;
    }
    let x = (gamma / ORIENTATION_FULL_TILT_DEG).clamp(-1.0, 1.0);
    let y = (beta / ORIENTATION_FULL_TILT_DEG).clamp(-1.0, 1.0);
    Some(Vec2::new(x as f32, y as f32))
}

// ---------------- Sampler ----------------
/// Holds the most recent normalized input vector. Last event wins.
#[derive(Clone, Copy, Debug)]
pub struct InputSampler {
    source: InputSource,
    latest: Vec2,
}

impl InputSampler {
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            latest: Vec2::ZERO,
        }
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    pub fn latest(&self) -> Vec2 {
        self.latest
    }

    /// Returns true when the sample was accepted.
    pub fn on_pointer(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> bool {
        if self.source != InputSource::Pointer {
            return false;
        }
        match normalize_pointer(client_x, client_y, viewport_w, viewport_h) {
            Some(v) => {
                self.latest = v;
                true
            }
            None => false,
        }
    }

    /// Returns true when the sample was accepted. Partial readings keep the
    /// previous vector instead of snapping back to zero.
    pub fn on_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) -> bool {
        if self.source != InputSource::Orientation {
            return false;
        }
        match normalize_orientation(beta, gamma) {
            Some(v) => {
                self.latest = v;
                true
            }
            None => false,
        }
    }
}
