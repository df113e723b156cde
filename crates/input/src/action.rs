use serde::{Deserialize, Serialize};
use skyframe_common::Command;

/// What a driven command is aimed at.
///
/// Written as `{ body: 0 }` or `{ camera: 1 }` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TargetRepr", into = "TargetRepr")]
pub enum Target {
    /// A controllable body, by index in the scene.
    Body(usize),
    /// A camera slot, by index in the scene.
    Camera(usize),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    camera: Option<usize>,
}

impl TryFrom<TargetRepr> for Target {
    type Error = String;

    fn try_from(r: TargetRepr) -> Result<Self, Self::Error> {
        match (r.body, r.camera) {
            (Some(b), None) => Ok(Target::Body(b)),
            (None, Some(c)) => Ok(Target::Camera(c)),
            _ => Err("target needs exactly one of `body` or `camera`".into()),
        }
    }
}

impl From<Target> for TargetRepr {
    fn from(t: Target) -> Self {
        match t {
            Target::Body(b) => Self {
                body: Some(b),
                camera: None,
            },
            Target::Camera(c) => Self {
                body: None,
                camera: Some(c),
            },
        }
    }
}

/// A high-level action a key can be bound to.
///
/// The scene consumes bindings, never raw key codes, so key layouts stay
/// configuration rather than behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Binding {
    /// Apply a local-frame command to a body or camera pose.
    Drive { target: Target, command: Command },
    /// Turn an articulated part of a body by one angular step.
    Articulate {
        body: usize,
        part: usize,
        /// +1 or -1.
        direction: i8,
    },
    /// Switch which camera the view is rendered from.
    CycleViewCamera,
    /// Switch which camera pointer drags control.
    CycleControlCamera,
}

impl Binding {
    pub fn drive_body(body: usize, command: Command) -> Self {
        Self::Drive {
            target: Target::Body(body),
            command,
        }
    }

    pub fn drive_camera(camera: usize, command: Command) -> Self {
        Self::Drive {
            target: Target::Camera(camera),
            command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_helpers_build_targets() {
        let b = Binding::drive_body(1, Command::RollPositive);
        assert!(matches!(
            b,
            Binding::Drive {
                target: Target::Body(1),
                command: Command::RollPositive
            }
        ));
        let c = Binding::drive_camera(0, Command::TranslateForward);
        assert!(matches!(
            c,
            Binding::Drive {
                target: Target::Camera(0),
                ..
            }
        ));
    }

    #[test]
    fn binding_yaml_shape() {
        let b: Binding = serde_yaml::from_str(
            "{ action: drive, target: { body: 0 }, command: translate-forward }",
        )
        .unwrap();
        assert_eq!(b, Binding::drive_body(0, Command::TranslateForward));

        let cycle: Binding = serde_yaml::from_str("action: cycle-view-camera").unwrap();
        assert_eq!(cycle, Binding::CycleViewCamera);
    }

    #[test]
    fn articulate_yaml_shape() {
        let b: Binding =
            serde_yaml::from_str("{ action: articulate, body: 0, part: 2, direction: -1 }")
                .unwrap();
        assert_eq!(
            b,
            Binding::Articulate {
                body: 0,
                part: 2,
                direction: -1
            }
        );
    }

    #[test]
    fn target_needs_exactly_one_index() {
        assert!(serde_json::from_str::<Target>(r#"{ "body": 1, "camera": 2 }"#).is_err());
        assert!(serde_json::from_str::<Target>("{}").is_err());
        assert_eq!(
            serde_json::from_str::<Target>(r#"{ "camera": 2 }"#).unwrap(),
            Target::Camera(2)
        );
    }

    #[test]
    fn binding_round_trips_through_json() {
        let b = Binding::drive_camera(1, Command::PitchNegative);
        let text = serde_json::to_string(&b).unwrap();
        assert!(text.contains(r#""action":"drive""#));
        assert_eq!(serde_json::from_str::<Binding>(&text).unwrap(), b);
    }
}
