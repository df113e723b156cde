use skyframe_scene::Frame;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a composed frame and produces output. Matrices arrive
/// fully composed, so a renderer never walks the scene itself.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Human-readable listing of each view and where its items sit in camera
/// space. Used for CLI output and logging.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (views={}, items={}) ===\n",
            frame.views.len(),
            frame.item_count()
        ));

        for (i, view) in frame.views.iter().enumerate() {
            let vp = view.viewport;
            out.push_str(&format!(
                "View {i}: camera={} viewport=({}, {}) {}x{}\n",
                view.camera, vp.x, vp.y, vp.width, vp.height
            ));
            for item in &view.items {
                let p = item.view_origin();
                out.push_str(&format!(
                    "  {:<24} {:<12} at ({:.2}, {:.2}, {:.2})\n",
                    item.label,
                    format!("{:?}", item.kind),
                    p.x,
                    p.y,
                    p.z
                ));
            }
        }

        out
    }
}
