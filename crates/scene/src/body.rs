use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use skyframe_common::Pose;

use crate::scene::SceneError;

/// Local axis an articulated part turns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JointAxis {
    X,
    Y,
    Z,
}

impl JointAxis {
    pub fn rotation(self, degrees: f32) -> Mat4 {
        let radians = degrees.to_radians();
        match self {
            Self::X => Mat4::from_rotation_x(radians),
            Self::Y => Mat4::from_rotation_y(radians),
            Self::Z => Mat4::from_rotation_z(radians),
        }
    }
}

/// An articulated sub-object of a body (turret, gun, stabiliser).
///
/// Its transform relative to its parent is `translate(offset) ·
/// rotate(axis, angle)`. The parent is another part of the same body, or the
/// body itself when `parent` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub parent: Option<usize>,
    pub offset: Vec3,
    pub axis: JointAxis,
    angle_degrees: f32,
    limits: Option<(f32, f32)>,
}

impl Part {
    pub fn new(name: impl Into<String>, offset: Vec3, axis: JointAxis, angle_degrees: f32) -> Self {
        Self {
            name: name.into(),
            parent: None,
            offset,
            axis,
            angle_degrees,
            limits: None,
        }
    }

    pub fn with_parent(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Clamp the joint to `[min, max]` degrees.
    pub fn with_limits(mut self, min: f32, max: f32) -> Self {
        self.limits = Some((min.min(max), min.max(max)));
        self.angle_degrees = self.clamp(self.angle_degrees);
        self
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    pub fn limits(&self) -> Option<(f32, f32)> {
        self.limits
    }

    fn clamp(&self, degrees: f32) -> f32 {
        match self.limits {
            Some((min, max)) => degrees.clamp(min, max),
            None => degrees,
        }
    }

    /// Turn by `delta` degrees, respecting limits. Returns whether the angle
    /// changed.
    pub fn rotate(&mut self, delta: f32) -> bool {
        let next = self.clamp(self.angle_degrees + delta);
        let changed = next != self.angle_degrees;
        self.angle_degrees = next;
        changed
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset) * self.axis.rotation(self.angle_degrees)
    }
}

/// A controllable body: a pose plus its articulated parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub pose: Pose,
    parts: Vec<Part>,
}

impl Body {
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            pose,
            parts: Vec::new(),
        }
    }

    /// Attach a part. Its parent, if any, must already be attached.
    pub fn add_part(&mut self, part: Part) -> Result<usize, SceneError> {
        let index = self.parts.len();
        if let Some(parent) = part.parent {
            if parent >= index {
                return Err(SceneError::InvalidParent {
                    part: part.name,
                    parent,
                });
            }
        }
        self.parts.push(part);
        Ok(index)
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    pub fn part_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.get_mut(index)
    }

    /// Each part's transform relative to the body frame, in part order.
    ///
    /// Parents always precede their children, so one forward pass suffices.
    pub fn part_matrices(&self) -> Vec<Mat4> {
        let mut out: Vec<Mat4> = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            let parent = part.parent.map_or(Mat4::IDENTITY, |p| out[p]);
            out.push(parent * part.local_matrix());
        }
        out
    }
}
