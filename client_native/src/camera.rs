//! Camera for the arena
//!
//! Orthographic projection in pixel units with the origin at the top-left
//! corner and y pointing down, so game coordinates go to the GPU unchanged.

use glam::{Mat4, Vec4};

pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Arena is `width` x `height` pixels
    pub fn pixels(width: f32, height: f32) -> Self {
        // bottom/top swapped to flip y
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Clip-space position of a game point; used by tests
    pub fn project(&self, x: f32, y: f32) -> Vec4 {
        self.view_proj() * Vec4::new(x, y, 0.0, 1.0)
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
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec4, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 1e-5 && (a.y - y).abs() < 1e-5
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::pixels(1280.0, 960.0);
        assert!(close(camera.project(0.0, 0.0), -1.0, 1.0), "top-left");
        assert!(close(camera.project(1280.0, 960.0), 1.0, -1.0), "bottom-right");
        assert!(close(camera.project(640.0, 480.0), 0.0, 0.0), "centre");
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
