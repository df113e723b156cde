use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use skyframe_scene::{DrawItem, View};

/// A matrix as the 16 floats a GL-style `LoadMatrix` expects, column-major.
pub fn gl_matrix(m: &Mat4) -> [f32; 16] {
    m.to_cols_array()
}

/// The same 16 floats as native-endian bytes, ready for a buffer upload.
pub fn gl_matrix_bytes(m: &Mat4) -> Vec<u8> {
    bytemuck::cast_slice(&gl_matrix(m)).to_vec()
}

/// Per-item uniform block: projection then model-view.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GlMatrices {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
}

impl GlMatrices {
    pub fn for_item(view: &View, item: &DrawItem) -> Self {
        Self {
            projection: view.projection.to_cols_array_2d(),
            model_view: item.model_view.to_cols_array_2d(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use skyframe_scene::Scene;

    #[test]
    fn gl_matrix_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let cols = gl_matrix(&m);
        // Translation occupies elements 12..15, as in glLoadMatrixf.
        assert_eq!(&cols[12..16], &[1.0_f32, 2.0, 3.0, 1.0]);
        assert_eq!(cols[0], 1.0);
        assert_eq!(cols[1], 0.0);
    }

    #[test]
    fn gl_matrix_bytes_match_floats() {
        let m = Mat4::from_scale(Vec3::splat(2.0));
        let bytes = gl_matrix_bytes(&m);
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[0..4], &2.0_f32.to_ne_bytes());
    }

    #[test]
    fn uniform_block_packs_both_matrices() {
        let scene = Scene::dual_view();
        let frame = scene.frame();
        let view = &frame.views[0];
        let item = view.item("plane").unwrap();
        let block = GlMatrices::for_item(view, item);
        assert_eq!(block.as_bytes().len(), 128);
        assert_eq!(block.model_view[3][2], item.model_view.w_axis.z);
        assert_eq!(block.projection, view.projection.to_cols_array_2d());
    }
}
