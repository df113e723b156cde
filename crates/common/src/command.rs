use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::pose::Pose;

/// A discrete directional intent produced by one key press.
///
/// Every command is an increment expressed in the body's *local* frame:
/// forward is local +Z, left is local +X and up is local +Y. Rotations are
/// right-hand positive about the named local axis (roll = Z, pitch = X,
/// yaw = Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    TranslateForward,
    TranslateBackward,
    TranslateLeft,
    TranslateRight,
    TranslateUp,
    TranslateDown,
    RollPositive,
    RollNegative,
    PitchPositive,
    PitchNegative,
    YawPositive,
    YawNegative,
    /// Bound to nothing. Applying it leaves a pose untouched.
    Noop,
}

impl Command {
    /// Every command that moves a pose.
    pub const MOTIONS: [Command; 12] = [
        Command::TranslateForward,
        Command::TranslateBackward,
        Command::TranslateLeft,
        Command::TranslateRight,
        Command::TranslateUp,
        Command::TranslateDown,
        Command::RollPositive,
        Command::RollNegative,
        Command::PitchPositive,
        Command::PitchNegative,
        Command::YawPositive,
        Command::YawNegative,
    ];

    /// The command whose increment cancels this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::TranslateForward => Self::TranslateBackward,
            Self::TranslateBackward => Self::TranslateForward,
            Self::TranslateLeft => Self::TranslateRight,
            Self::TranslateRight => Self::TranslateLeft,
            Self::TranslateUp => Self::TranslateDown,
            Self::TranslateDown => Self::TranslateUp,
            Self::RollPositive => Self::RollNegative,
            Self::RollNegative => Self::RollPositive,
            Self::PitchPositive => Self::PitchNegative,
            Self::PitchNegative => Self::PitchPositive,
            Self::YawPositive => Self::YawNegative,
            Self::YawNegative => Self::YawPositive,
            Self::Noop => Self::Noop,
        }
    }

    /// Re-targets the command at a body that looks down local -Z.
    ///
    /// Cameras face -Z, so "forward" for a camera is a -Z translation.
    /// Every other command is unchanged.
    pub fn facing_neg_z(self) -> Self {
        match self {
            Self::TranslateForward => Self::TranslateBackward,
            Self::TranslateBackward => Self::TranslateForward,
            other => other,
        }
    }

    /// The local-frame increment this command stands for.
    pub fn increment(self, step: Step) -> Pose {
        let d = step.linear;
        let a = step.angular;
        match self {
            Self::TranslateForward => Pose::from_position(Vec3::Z * d),
            Self::TranslateBackward => Pose::from_position(Vec3::NEG_Z * d),
            Self::TranslateLeft => Pose::from_position(Vec3::X * d),
            Self::TranslateRight => Pose::from_position(Vec3::NEG_X * d),
            Self::TranslateUp => Pose::from_position(Vec3::Y * d),
            Self::TranslateDown => Pose::from_position(Vec3::NEG_Y * d),
            Self::RollPositive => Pose::from_rotation(Quat::from_rotation_z(a)),
            Self::RollNegative => Pose::from_rotation(Quat::from_rotation_z(-a)),
            Self::PitchPositive => Pose::from_rotation(Quat::from_rotation_x(a)),
            Self::PitchNegative => Pose::from_rotation(Quat::from_rotation_x(-a)),
            Self::YawPositive => Pose::from_rotation(Quat::from_rotation_y(a)),
            Self::YawNegative => Pose::from_rotation(Quat::from_rotation_y(-a)),
            Self::Noop => Pose::IDENTITY,
        }
    }
}

/// Magnitudes used for one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StepDegrees", into = "StepDegrees")]
pub struct Step {
    /// Distance per translation command, in world units.
    pub linear: f32,
    /// Angle per rotation command, in radians.
    pub angular: f32,
}

impl Step {
    pub const DEFAULT_LINEAR: f32 = 1.0;
    pub const DEFAULT_ANGULAR_DEGREES: f32 = 5.0;

    pub fn from_degrees(linear: f32, angular_degrees: f32) -> Self {
        Self {
            linear,
            angular: angular_degrees.to_radians(),
        }
    }

    pub fn angular_degrees(&self) -> f32 {
        self.angular.to_degrees()
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::from_degrees(Self::DEFAULT_LINEAR, Self::DEFAULT_ANGULAR_DEGREES)
    }
}

/// On-disk form of [`Step`]: angles are written in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
struct StepDegrees {
    linear: f32,
    angular_degrees: f32,
}

impl Default for StepDegrees {
    fn default() -> Self {
        Self {
            linear: Step::DEFAULT_LINEAR,
            angular_degrees: Step::DEFAULT_ANGULAR_DEGREES,
        }
    }
}

impl From<StepDegrees> for Step {
    fn from(s: StepDegrees) -> Self {
        Step::from_degrees(s.linear, s.angular_degrees)
    }
}

impl From<Step> for StepDegrees {
    fn from(s: Step) -> Self {
        Self {
            linear: s.linear,
            angular_degrees: s.angular_degrees(),
        }
    }
}
