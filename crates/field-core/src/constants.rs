// Shared tuning constants for the particle field and the motion consumers.

// Device profiles
pub const DESKTOP_PARTICLE_COUNT: usize = 50;
pub const DESKTOP_FRAME_SKIP: u32 = 1;
pub const DESKTOP_CONNECTION_STRIDE: usize = 1;
pub const DESKTOP_MAX_DISTANCE: f32 = 120.0;

pub const MOBILE_PARTICLE_COUNT: usize = 25;
pub const MOBILE_FRAME_SKIP: u32 = 2; // simulate/render every 2nd native frame
pub const MOBILE_CONNECTION_STRIDE: usize = 3;
pub const MOBILE_MAX_DISTANCE: f32 = 80.0;

// Lower-cased identifier fragments that mark a phone or tablet
pub const MOBILE_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

// Input normalization
pub const ORIENTATION_FULL_TILT_DEG: f64 = 45.0; // beta/gamma that map to +-1

// Particle initialization ranges (half-open)
pub const PARTICLE_SPEED_MAX: f32 = 0.25; // |vx|, |vy| upper bound
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_MAX: f32 = 0.7;

// Parallax
pub const DEPTH_LAYERS: usize = 3;
pub const PARALLAX_GAIN: f32 = 0.02; // px per tick per unit input per depth layer

// Palette
pub const FIELD_RGB: [u8; 3] = [0, 212, 170];
pub const LINK_BASE_ALPHA: f32 = 0.1;
pub const LINK_WIDTH: f32 = 0.5;
pub const SURFACE_OPACITY: f32 = 0.6; // applied by the compositor, not per particle

// Springs (unit mass)
pub const SPRING_REST_DELTA: f32 = 0.01;
pub const SPRING_REST_SPEED: f32 = 0.01;
pub const SPRING_MAX_STEP_SEC: f32 = 1.0 / 120.0; // integration substep
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // longer gaps (tab switch) are truncated

// Motion consumers
pub const TILT_DEG_PER_UNIT: f32 = 0.5;
pub const FLOATING_FACTORS: [f32; 4] = [1.5, -1.0, 0.8, -0.5];
