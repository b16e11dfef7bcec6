//! Visual-side state for the ambient background.
//!
//! These types avoid platform APIs so the motion model can be stepped on the
//! host. The web frontend owns one `AmbientScene`, feeds it pointer positions
//! and moods, steps it once per animation frame and uploads the result.

use crate::constants::*;
use crate::quiz::Mood;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::prelude::*;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed camera looking down -Z at the microphone.
    pub fn facing_mic(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub idle_spin: f32,
    pub celebrate_spin: f32,
    pub pointer_tilt: f32,
    pub rotation_ease: f32,
    pub light_return_ease: f32,
    pub pulse_freq_per_ms: f64,
    pub pulse_amplitude: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            idle_spin: IDLE_SPIN,
            celebrate_spin: CELEBRATE_SPIN,
            pointer_tilt: POINTER_TILT,
            rotation_ease: ROTATION_EASE,
            light_return_ease: LIGHT_RETURN_EASE,
            pulse_freq_per_ms: PULSE_FREQ_PER_MS,
            pulse_amplitude: PULSE_AMPLITUDE,
        }
    }
}

/// Microphone pose, light colours and pulse, stepped once per frame.
#[derive(Clone, Debug)]
pub struct AmbientScene {
    pub params: SceneParams,
    mood: Mood,
    pointer: Vec2,
    /// Euler angles of the microphone group (x = pitch, y = yaw).
    rotation: Vec2,
    spin: f32,
    light_color: Vec3,
    emissive: Vec3,
    inner_scale: f32,
}

impl Default for AmbientScene {
    fn default() -> Self {
        Self::new(SceneParams::default())
    }
}

impl AmbientScene {
    pub fn new(params: SceneParams) -> Self {
        let spin = params.idle_spin;
        Self {
            params,
            mood: Mood::Default,
            pointer: Vec2::ZERO,
            rotation: Vec2::ZERO,
            spin,
            light_color: hex_rgb(DEFAULT_LIGHT),
            emissive: hex_rgb(DEFAULT_EMISSIVE),
            inner_scale: 1.0,
        }
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
        match mood {
            Mood::Correct => {
                self.light_color = hex_rgb(CORRECT_COLOR);
                self.emissive = hex_rgb(CORRECT_COLOR);
                self.spin = self.params.celebrate_spin;
            }
            Mood::Wrong => {
                self.light_color = hex_rgb(WRONG_COLOR);
                self.emissive = hex_rgb(WRONG_COLOR);
                self.spin = self.params.idle_spin;
            }
            // the light drifts back in `step`
            Mood::Default => {
                self.emissive = hex_rgb(DEFAULT_EMISSIVE);
                self.spin = self.params.idle_spin;
            }
        }
    }

    /// Pointer position in normalised device coordinates, `[-1, 1]` with +y up.
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    /// Advance one animation frame. `now_ms` is wall-clock milliseconds.
    pub fn step(&mut self, now_ms: f64) {
        let p = &self.params;
        let target = self.pointer * p.pointer_tilt;
        self.rotation.y += (target.x - self.rotation.y) * p.rotation_ease + self.spin;
        self.rotation.x += (target.y - self.rotation.x) * p.rotation_ease;

        if self.mood == Mood::Default {
            self.light_color = self
                .light_color
                .lerp(hex_rgb(DEFAULT_LIGHT), p.light_return_ease);
        }

        self.inner_scale = 1.0 + (now_ms * p.pulse_freq_per_ms).sin() as f32 * p.pulse_amplitude;
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn light_color(&self) -> Vec3 {
        self.light_color
    }

    pub fn emissive(&self) -> Vec3 {
        self.emissive
    }

    pub fn inner_head_scale(&self) -> f32 {
        self.inner_scale
    }

    /// Model matrix of the microphone group.
    pub fn mic_transform(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

/// Star centres scattered uniformly in a cube of edge `spread` around the
/// origin. Deterministic for a given seed.
pub fn star_field(count: usize, spread: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = spread * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}
