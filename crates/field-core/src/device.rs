use crate::constants::*;
use crate::input::InputSource;

/// Tuning constants selected once from the detected device class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub particle_count: usize,
    pub frame_skip: u32,
    pub connection_stride: usize,
    pub max_distance: f32,
}

impl DeviceProfile {
    pub const DESKTOP: DeviceProfile = DeviceProfile {
        is_mobile: false,
        particle_count: DESKTOP_PARTICLE_COUNT,
        frame_skip: DESKTOP_FRAME_SKIP,
        connection_stride: DESKTOP_CONNECTION_STRIDE,
        max_distance: DESKTOP_MAX_DISTANCE,
    };

    pub const MOBILE: DeviceProfile = DeviceProfile {
        is_mobile: true,
        particle_count: MOBILE_PARTICLE_COUNT,
        frame_skip: MOBILE_FRAME_SKIP,
        connection_stride: MOBILE_CONNECTION_STRIDE,
        max_distance: MOBILE_MAX_DISTANCE,
    };

    /// Mobile devices are driven by the gyroscope, everything else by the pointer.
    pub fn input_source(&self) -> InputSource {
        if self.is_mobile {
            InputSource::Orientation
        } else {
            InputSource::Pointer
        }
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Classify a user-agent style identifier. Unknown or empty input is desktop.
pub fn classify(identifier: &str) -> DeviceProfile {
    if is_mobile_identifier(identifier) {
        DeviceProfile::MOBILE
    } else {
        DeviceProfile::DESKTOP
    }
}

#[inline]
pub fn is_mobile_identifier(identifier: &str) -> bool {
    let lowered = identifier.to_ascii_lowercase();
    MOBILE_TOKENS.iter().any(|token| lowered.contains(token))
}
