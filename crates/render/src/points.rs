use glam::{Vec2, Vec4};
use skyframe_scene::{DrawItem, DrawKind, Frame, View};

use crate::framebuffer::{FrameBuffer, Rgb};
use crate::renderer::Renderer;

/// Colour a [`PointRenderer`] uses for each kind of item.
pub fn kind_color(kind: DrawKind) -> Rgb {
    match kind {
        DrawKind::WorldFrame => FrameBuffer::WHITE,
        DrawKind::Body => FrameBuffer::YELLOW,
        DrawKind::Part => FrameBuffer::CYAN,
        DrawKind::CameraFrame => FrameBuffer::RED,
    }
}

/// Where an item's origin lands in window pixels (origin bottom-left), or
/// `None` when it falls outside the view frustum.
pub fn project_origin(view: &View, item: &DrawItem) -> Option<Vec2> {
    let clip = view.projection * item.model_view * Vec4::W;
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || ndc.z.abs() > 1.0 {
        return None;
    }
    let vp = view.viewport;
    Some(Vec2::new(
        vp.x as f32 + (ndc.x + 1.0) * 0.5 * vp.width as f32,
        vp.y as f32 + (ndc.y + 1.0) * 0.5 * vp.height as f32,
    ))
}

/// Rasterises each item's origin as a small square marker.
///
/// Stands in for the wireframe models: enough to see where the hierarchy put
/// every body, part and camera without a GPU.
#[derive(Debug, Clone)]
pub struct PointRenderer {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// Marker half-size in pixels; 0 plots single pixels.
    pub marker_radius: u32,
}

impl PointRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: FrameBuffer::BLACK,
            marker_radius: 1,
        }
    }

    fn plot_marker(&self, fb: &mut FrameBuffer, view: &View, center: Vec2, color: Rgb) {
        let vp = view.viewport;
        let r = i64::from(self.marker_radius);
        let (cx, cy) = (center.x.floor() as i64, center.y.floor() as i64);
        // Markers are clipped to their own viewport so split views don't bleed.
        let x_min = (cx - r).max(i64::from(vp.x));
        let x_max = (cx + r).min(i64::from(vp.x + vp.width) - 1).min(i64::from(fb.width()) - 1);
        let y_min = (cy - r).max(i64::from(vp.y));
        let y_max = (cy + r).min(i64::from(vp.y + vp.height) - 1).min(i64::from(fb.height()) - 1);
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                if let Err(e) = fb.set_pixel(x as u32, y as u32, color) {
                    tracing::trace!(error = %e, "marker pixel skipped");
                }
            }
        }
    }
}

impl Renderer for PointRenderer {
    type Output = FrameBuffer;

    fn render(&self, frame: &Frame) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width, self.height);
        fb.clear(self.background);
        for view in &frame.views {
            let mut plotted = 0;
            for item in &view.items {
                if let Some(p) = project_origin(view, item) {
                    self.plot_marker(&mut fb, view, p, kind_color(item.kind));
                    plotted += 1;
                }
            }
            tracing::debug!(camera = view.camera, plotted, total = view.items.len(), "view rasterised");
        }
        fb
    }
}
