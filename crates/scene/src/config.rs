use std::path::Path;

use serde::{Deserialize, Serialize};
use skyframe_camera::OrbitCamera;
use skyframe_common::Step;
use skyframe_input::Keymap;

use crate::scene::{Scene, SceneError};

/// Errors from loading or applying a scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("key {key:?}: {source}")]
    Binding {
        key: char,
        #[source]
        source: SceneError,
    },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Which built-in scene to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    DualView,
    #[default]
    Hierarchy,
}

impl Preset {
    pub fn scene(self) -> Scene {
        match self {
            Self::DualView => Scene::dual_view(),
            Self::Hierarchy => Scene::hierarchy(),
        }
    }

    pub fn keymap(self) -> Keymap {
        match self {
            Self::DualView => Keymap::dual_view(),
            Self::Hierarchy => Keymap::hierarchy(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Startup configuration: preset, step sizes, window and key layout.
///
/// ```yaml
/// preset: hierarchy
/// step: { linear: 1.0, angular_degrees: 5.0 }
/// min_distance: 0.1
/// window: { width: 800, height: 600 }
/// bindings:
///   "1": { action: cycle-view-camera }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub preset: Preset,
    pub step: Step,
    /// Floor for every orbit camera's distance.
    pub min_distance: f32,
    pub window: WindowSize,
    /// Replaces the preset's keymap entirely when present.
    pub keymap: Option<Keymap>,
    /// Layered over the (preset or replaced) keymap.
    pub bindings: Keymap,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            step: Step::default(),
            min_distance: OrbitCamera::DEFAULT_MIN_DISTANCE,
            window: WindowSize::default(),
            keymap: None,
            bindings: Keymap::new(),
        }
    }
}

impl SceneConfig {
    pub fn for_preset(preset: Preset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from disk. `.json` files are read as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_yaml_str(&text)?
        };
        tracing::info!(path = %path.display(), preset = ?config.preset, "loaded scene config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = |field: &'static str, v: f32| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{v} is not a positive number"),
                })
            }
        };
        positive("step.linear", self.step.linear)?;
        positive("step.angular_degrees", self.step.angular_degrees())?;
        positive("min_distance", self.min_distance)?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "window",
                reason: format!("{}x{} has no area", self.window.width, self.window.height),
            });
        }
        Ok(())
    }

    /// Build the scene and keymap this configuration describes.
    ///
    /// Every binding is checked against the scene, so a bad index fails here
    /// rather than being silently ignored at runtime.
    pub fn build(&self) -> Result<(Scene, Keymap), ConfigError> {
        self.validate()?;

        let mut scene = self.preset.scene();
        scene.set_step(self.step);
        scene.set_min_distance(self.min_distance);
        scene.resize(self.window.width, self.window.height);

        let mut keymap = self
            .keymap
            .clone()
            .unwrap_or_else(|| self.preset.keymap());
        keymap.merge(&self.bindings);

        for (key, binding) in keymap.iter() {
            scene
                .validate_binding(binding)
                .map_err(|source| ConfigError::Binding { key, source })?;
        }
        tracing::debug!(bindings = keymap.len(), "keymap ready");
        Ok((scene, keymap))
    }
}
