use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use skyframe_camera::Viewport;

/// What a draw item stands for. The renderer picks geometry by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawKind {
    WorldFrame,
    Body,
    Part,
    CameraFrame,
}

/// One object to draw, with its fully composed model-view matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    pub label: String,
    pub kind: DrawKind,
    pub model_view: Mat4,
}

impl DrawItem {
    /// The item's origin in camera space.
    pub fn view_origin(&self) -> Vec3 {
        self.model_view.w_axis.truncate()
    }
}

/// Everything needed to draw one viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Index of the camera this view looks through.
    pub camera: usize,
    pub viewport: Viewport,
    pub projection: Mat4,
    pub view: Mat4,
    pub items: Vec<DrawItem>,
}

impl View {
    pub fn item(&self, label: &str) -> Option<&DrawItem> {
        self.items.iter().find(|i| i.label == label)
    }
}

/// The output of one redraw: one view per viewport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub views: Vec<View>,
}

impl Frame {
    pub fn item_count(&self) -> usize {
        self.views.iter().map(|v| v.items.len()).sum()
    }
}
