use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use skyframe_common::Pose;
use skyframe_input::Drag;

/// Orbit camera looking at a target from azimuth/elevation/distance.
///
/// Angles are in degrees. Negative elevation puts the camera above the
/// target. The camera looks down its local -Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub elevation: f32,
    distance: f32,
    min_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 15.0,
            elevation: -45.0,
            distance: 20.0,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
        }
    }
}

impl OrbitCamera {
    pub const DEFAULT_MIN_DISTANCE: f32 = 0.1;

    pub fn new(azimuth: f32, elevation: f32, distance: f32) -> Self {
        let mut cam = Self {
            azimuth,
            elevation,
            ..Self::default()
        };
        cam.set_distance(distance);
        cam
    }

    /// Replace the distance floor and re-clamp the current distance.
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance.max(f32::EPSILON);
        self.set_distance(self.distance);
        self
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        if distance < self.min_distance || distance.is_nan() {
            tracing::debug!(
                requested = distance,
                floor = self.min_distance,
                "orbit distance clamped"
            );
            self.distance = self.min_distance;
        } else {
            self.distance = distance;
        }
    }

    /// Apply one drag step. Returns whether anything changed.
    ///
    /// Primary button: `dy` drives elevation, `dx` drives azimuth. Shift
    /// restricts the drag to azimuth and Ctrl restricts it to elevation.
    /// Secondary button: the dominant axis drives distance (`dx`, or `-dy`
    /// when vertical motion dominates).
    pub fn on_drag(&mut self, drag: &Drag) -> bool {
        let mut changed = false;
        if drag.primary {
            if !drag.modifiers.shift && drag.dy != 0 {
                self.elevation += drag.dy as f32;
                changed = true;
            }
            if !drag.modifiers.ctrl && drag.dx != 0 {
                self.azimuth += drag.dx as f32;
                changed = true;
            }
        }
        if drag.secondary {
            let d = if drag.dx.unsigned_abs() >= drag.dy.unsigned_abs() {
                drag.dx as f32
            } else {
                -(drag.dy as f32)
            };
            if d != 0.0 {
                let before = self.distance;
                self.set_distance(self.distance + d);
                changed |= self.distance != before;
            }
        }
        if changed {
            tracing::debug!(
                azimuth = self.azimuth,
                elevation = self.elevation,
                distance = self.distance,
                "orbit camera moved"
            );
        }
        changed
    }

    fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.azimuth.to_radians())
            * Quat::from_rotation_x(self.elevation.to_radians())
    }

    /// `T(0,0,-d) · Rx(-e) · Ry(-a) · T(-target)`.
    pub fn view_matrix(&self, target: Vec3) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(-self.elevation.to_radians())
            * Mat4::from_rotation_y(-self.azimuth.to_radians())
            * Mat4::from_translation(-target)
    }

    /// The camera's pose in the target's frame; inverse of `view_matrix`.
    pub fn pose(&self, target: Vec3) -> Pose {
        let rotation = self.rotation();
        Pose::new(target + rotation * Vec3::new(0.0, 0.0, self.distance), rotation)
    }

    /// Camera position.
    pub fn eye(&self, target: Vec3) -> Vec3 {
        self.pose(target).position()
    }
}
