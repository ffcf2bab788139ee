//! Fundamental geometric, timing and input types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Session clock. Only advances while a run is active and unpaused.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames simulated.
    pub tick: u64,
    /// Elapsed session time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// A point on screen in percent of each axis (0..=100, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const CENTER: ScreenPoint = ScreenPoint { x: 50.0, y: 50.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to pixel coordinates in the given viewport.
    pub fn to_pixels(self, viewport: &Viewport) -> Vec2 {
        Vec2::new(
            self.x / 100.0 * viewport.width,
            self.y / 100.0 * viewport.height,
        )
    }
}

impl Default for ScreenPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Output surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Raw input gathered since the previous frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Accumulated scroll wheel delta (positive = dive).
    pub wheel_delta: f64,
    /// Vertical touch drag in pixels (positive = finger moved up = dive).
    pub drag_delta_y: f64,
    /// Virtual joystick deflection. Magnitude is clamped to 1.
    pub joystick: Vec2,
}

impl InputSnapshot {
    pub fn wheel(delta: f64) -> Self {
        Self {
            wheel_delta: delta,
            ..Default::default()
        }
    }

    pub fn drag(delta_y: f64) -> Self {
        Self {
            drag_delta_y: delta_y,
            ..Default::default()
        }
    }

    pub fn joystick(x: f32, y: f32) -> Self {
        Self {
            joystick: Vec2::new(x, y),
            ..Default::default()
        }
    }

    /// Joystick vector with its magnitude clamped to 1.
    pub fn clamped_joystick(&self) -> Vec2 {
        self.joystick.clamp_length_max(1.0)
    }
}
