//! Camera for the Pong playfield
//!
//! Orthographic, in pixel space, with y growing downward to match the
//! simulation's coordinates.

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Pixel-space camera over a `width` x `height` field, origin at the
    /// top-left.
    pub fn pixel_space(width: f32, height: f32) -> Self {
        // Top and bottom swapped so +y points down the screen.
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // pad to 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_y_axis_points_down() {
        let camera = Camera::pixel_space(800.0, 600.0);
        let view_proj = camera.projection * camera.view;
        let top_left = view_proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let bottom_left = view_proj * Vec4::new(0.0, 600.0, 0.0, 1.0);
        assert!(
            top_left.y > bottom_left.y,
            "Pixel y = 0 must map above pixel y = 600 in clip space"
        );
    }

    #[test]
    fn test_field_fills_clip_space() {
        let camera = Camera::pixel_space(800.0, 600.0);
        let view_proj = camera.projection * camera.view;
        let center = view_proj * Vec4::new(400.0, 300.0, 0.0, 1.0);
        assert!(center.x.abs() < 1e-6 && center.y.abs() < 1e-6);
    }
}
