use glam::{Mat4, Quat, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::command::{Command, Step};

/// Rotation length drift tolerated before `to_matrix` renormalises.
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-5;

/// Tolerance used when deciding whether a matrix is a rigid transform.
const RIGID_TOLERANCE: f32 = 1e-4;

/// Errors from converting general matrices into poses.
#[derive(Debug, thiserror::Error)]
pub enum PoseError {
    #[error("matrix contains non-finite values")]
    NonFinite,
    #[error("bottom row {0:?} is not [0, 0, 0, 1]")]
    NotAffine([f32; 4]),
    #[error("matrix has scale {0:?} or shear; only rotation + translation is allowed")]
    NotRigid([f32; 3]),
}

/// Rigid transform from a body's local frame to its parent frame.
///
/// `world = rotation * local + position`. The rotation is kept unit length:
/// every constructor and every composition renormalises it.
///
/// # Composition order
/// Increments edit the pose in its own frame, so they multiply on the right:
/// `pose = pose ∘ increment`. A view is built by multiplying on the left,
/// walking from the world down the hierarchy:
/// `camera⁻¹ ∘ body ∘ part`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PoseRepr")]
pub struct Pose {
    position: Vec3,
    rotation: Quat,
}

#[derive(Deserialize)]
struct PoseRepr {
    position: Vec3,
    rotation: Quat,
}

impl From<PoseRepr> for Pose {
    fn from(r: PoseRepr) -> Self {
        Pose::new(r.position, r.rotation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Build a pose, renormalising `rotation`.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation: rotation.normalize(),
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self::new(Vec3::ZERO, rotation)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    /// Apply one command as a local-frame increment (`self = self ∘ increment`).
    ///
    /// `Command::Noop` leaves the pose untouched.
    pub fn apply(&mut self, command: Command, step: Step) {
        if command == Command::Noop {
            return;
        }
        *self = self.compose(&command.increment(step));
        tracing::trace!(
            ?command,
            position = ?self.position,
            rotation = ?self.rotation,
            "pose updated"
        );
    }

    /// `self ∘ other`: `other` is expressed in `self`'s frame.
    pub fn compose(&self, other: &Pose) -> Pose {
        Pose {
            position: self.rotation * other.position + self.position,
            rotation: (self.rotation * other.rotation).normalize(),
        }
    }

    /// The exact inverse: `(q⁻¹, -(q⁻¹ · p))`.
    pub fn inverse(&self) -> Pose {
        let rotation = self.rotation.conjugate();
        Pose {
            position: -(rotation * self.position),
            rotation,
        }
    }

    /// Homogeneous 4×4 matrix, column-major as glam stores it.
    ///
    /// The bottom row is exactly `[0, 0, 0, 1]`.
    pub fn to_matrix(&self) -> Mat4 {
        // Constructors normalise; this catches drift accumulated by `compose`.
        let rotation = if (self.rotation.length() - 1.0).abs() > ORTHONORMAL_TOLERANCE {
            self.rotation.normalize()
        } else {
            self.rotation
        };
        Mat4::from_rotation_translation(rotation, self.position)
    }

    /// Recover a pose from a matrix that must be rigid.
    pub fn try_from_matrix(m: Mat4) -> Result<Pose, PoseError> {
        if !m.is_finite() {
            return Err(PoseError::NonFinite);
        }
        let bottom = m.row(3);
        if !bottom.abs_diff_eq(Vec4::W, RIGID_TOLERANCE) {
            return Err(PoseError::NotAffine(bottom.to_array()));
        }
        let (scale, rotation, translation) = m.to_scale_rotation_translation();
        let rebuilt = Mat4::from_rotation_translation(rotation, translation);
        if !scale.abs_diff_eq(Vec3::ONE, RIGID_TOLERANCE)
            || !rebuilt.abs_diff_eq(m, RIGID_TOLERANCE)
        {
            return Err(PoseError::NotRigid(scale.to_array()));
        }
        Ok(Pose::new(translation, rotation))
    }

    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.position
    }

    pub fn transform_vector(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Local +Z expressed in the parent frame.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Local +Y expressed in the parent frame.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Axis and angle (degrees) of the rotation, the form fixed-function
    /// `rotate(angle, axis)` calls take.
    pub fn axis_angle_degrees(&self) -> (Vec3, f32) {
        let (axis, angle) = self.rotation.to_axis_angle();
        (axis, angle.to_degrees())
    }

    pub fn is_normalized(&self) -> bool {
        (self.rotation.length() - 1.0).abs() <= 1e-6
    }

    /// Approximate equality; `q` and `-q` are the same rotation.
    pub fn abs_diff_eq(&self, other: &Pose, max_abs_diff: f32) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && (self.rotation.abs_diff_eq(other.rotation, max_abs_diff)
                || self.rotation.abs_diff_eq(-other.rotation, max_abs_diff))
    }
}
