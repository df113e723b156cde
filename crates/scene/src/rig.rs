use serde::{Deserialize, Serialize};
use skyframe_camera::OrbitCamera;
use skyframe_common::{Command, Pose, Step};

/// How a camera slot is parameterised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraRig {
    /// A pose driven by key commands. Looks down local -Z.
    Free { pose: Pose },
    /// A pose that never changes (e.g. a top-down overview).
    Fixed { pose: Pose },
    /// Orbits the world origin, or a body's origin when anchored.
    Orbit {
        orbit: OrbitCamera,
        anchor: Option<usize>,
    },
}

impl CameraRig {
    pub fn free(pose: Pose) -> Self {
        Self::Free { pose }
    }

    pub fn fixed(pose: Pose) -> Self {
        Self::Fixed { pose }
    }

    pub fn orbit(orbit: OrbitCamera) -> Self {
        Self::Orbit {
            orbit,
            anchor: None,
        }
    }

    pub fn anchored_orbit(orbit: OrbitCamera, body: usize) -> Self {
        Self::Orbit {
            orbit,
            anchor: Some(body),
        }
    }

    /// Apply a key command. Only free cameras respond.
    pub fn drive(&mut self, command: Command, step: Step) -> bool {
        match self {
            Self::Free { pose } => {
                pose.apply(command.facing_neg_z(), step);
                command != Command::Noop
            }
            Self::Fixed { .. } | Self::Orbit { .. } => false,
        }
    }

    pub fn orbit_mut(&mut self) -> Option<&mut OrbitCamera> {
        match self {
            Self::Orbit { orbit, .. } => Some(orbit),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<usize> {
        match self {
            Self::Orbit { anchor, .. } => *anchor,
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Free { .. } => "free",
            Self::Fixed { .. } => "fixed",
            Self::Orbit { anchor: None, .. } => "orbit",
            Self::Orbit { anchor: Some(_), .. } => "anchored-orbit",
        }
    }
}
