use glam::Vec3;

// Shared quiz and scene tuning constants.

// Quiz
pub const QUESTIONS_PER_GAME: usize = 10;
pub const OPTIONS_PER_QUESTION: usize = 4;

// Rank thresholds (score out of QUESTIONS_PER_GAME)
pub const RANK_POETA_MIN: usize = 10;
pub const RANK_FAN_MIN: usize = 8;
pub const RANK_HABITUAL_MIN: usize = 5;

// Camera
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Fog
pub const FOG_COLOR: u32 = 0x1a0b2e;
pub const FOG_DENSITY: f32 = 0.002;

// Microphone geometry (world units)
pub const HANDLE_RADIUS: f32 = 1.0;
pub const HANDLE_HEIGHT: f32 = 9.0;
pub const HANDLE_CENTER_Y: f32 = -4.5;
pub const HEAD_RADIUS: f32 = 2.8;
pub const INNER_HEAD_RADIUS: f32 = 2.0;
pub const HEAD_CENTER_Y: f32 = 1.5;

// Palette
pub const HANDLE_COLOR: u32 = 0x111111;
pub const HEAD_WIRE_COLOR: u32 = 0x9370db;
pub const INNER_HEAD_COLOR: u32 = 0x4b0082;
pub const DEFAULT_EMISSIVE: u32 = 0x2a004a;
pub const DEFAULT_LIGHT: u32 = 0xbc13fe;
pub const CORRECT_COLOR: u32 = 0x00ff88;
pub const WRONG_COLOR: u32 = 0xff3333;

// Star field
pub const STAR_COUNT: usize = 300;
pub const STAR_SPREAD: f32 = 150.0; // edge of the cube stars are scattered in
pub const STAR_RADIUS: f32 = 0.12;
pub const STAR_SEED: u64 = 0x5EED_57A2;

// Motion
pub const POINTER_TILT: f32 = 0.5; // max rotation (radians) the pointer asks for
pub const ROTATION_EASE: f32 = 0.05; // per-frame fraction toward the pointer target
pub const IDLE_SPIN: f32 = 0.003;
pub const CELEBRATE_SPIN: f32 = 0.03;
pub const LIGHT_RETURN_EASE: f32 = 0.1;

// Inner head pulse: scale = 1 + sin(t_ms * FREQ) * AMP
pub const PULSE_FREQ_PER_MS: f64 = 0.002;
pub const PULSE_AMPLITUDE: f32 = 0.03;

/// Convert a `0xRRGGBB` literal into `[0, 1]` RGB.
#[inline]
pub fn hex_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}
