// DOM hooks and styling used by the web front-end.

// Canvas picked up automatically at start
pub const CANVAS_ID: &str = "particle-canvas";

// Decorative elements driven by the floating motion layer, paired with their
// parallax factor (negative values move against the input)
pub const FLOATING_ELEMENTS: [(&str, f32); 4] = [
    ("float-code", field_core::FLOATING_FACTORS[0]),
    ("float-cpu", field_core::FLOATING_FACTORS[1]),
    ("float-circuit", field_core::FLOATING_FACTORS[2]),
    ("float-terminal", field_core::FLOATING_FACTORS[3]),
];

// Cards tilted in 3D
pub const HERO_TILT_ID: &str = "hero-tilt";
pub const ABOUT_TILT_ID: &str = "about-tilt";

// Background surface: full viewport, beneath content, click-through
pub const CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("inset", "0"),
    ("pointer-events", "none"),
    ("z-index", "0"),
];
