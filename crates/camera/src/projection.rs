use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective frustum parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_degrees,
            near,
            far,
        }
    }

    /// Right-handed perspective with GL clip depth (-1..1).
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// A pixel rectangle of the window; origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::full(800, 600)
    }
}

impl Viewport {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Width over height. A viewport with no area (minimised window, or a
    /// split of a one-pixel-wide window) reports 1.0.
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Left and right halves of this viewport.
    pub fn split_horizontal(&self) -> (Viewport, Viewport) {
        let left_width = self.width / 2;
        let left = Viewport {
            width: left_width,
            ..*self
        };
        let right = Viewport {
            x: self.x + left_width,
            width: self.width - left_width,
            ..*self
        };
        (left, right)
    }
}
