use crate::camera::{Camera, CameraUniform};
use crate::glyphs;
use crate::palette::Rgb;
use game_core::{Aabb, GameMap, Params, Side, Snapshot};
use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Paddles, centre line, ball and room for long scores
pub const MAX_INSTANCES: usize = 256;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn rect(aabb: &Aabb, tint: [f32; 4]) -> Self {
        let c = aabb.center();
        let s = aabb.size();
        Self {
            transform: [c.x, c.y, s.x, s.y],
            tint,
        }
    }

    pub fn disc(center: Vec2, radius: f32, tint: [f32; 4]) -> Self {
        Self {
            transform: [center.x, center.y, radius * 2.0, radius * 2.0],
            tint,
        }
    }
}

/// One frame's instances: rects first, the ball last
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInstances {
    pub instances: Vec<InstanceData>,
    pub rect_count: u32,
}

impl FrameInstances {
    pub fn ball_index(&self) -> u32 {
        self.rect_count
    }

    pub fn has_ball(&self) -> bool {
        self.instances.len() > self.rect_count as usize
    }
}

/// Lay out everything visible in a snapshot
pub fn build_instances(snapshot: &Snapshot, map: &GameMap, color: Rgb) -> FrameInstances {
    if !snapshot.court_visible {
        return FrameInstances {
            instances: Vec::new(),
            rect_count: 0,
        };
    }

    let tint = color.to_linear();
    let mut instances = vec![
        InstanceData::rect(&snapshot.center_line, tint),
        InstanceData::rect(&snapshot.left_paddle, tint),
        InstanceData::rect(&snapshot.right_paddle, tint),
    ];

    for side in [Side::Left, Side::Right] {
        let anchor = map.score_anchor(side);
        let value = snapshot.score.get(side);
        instances.extend(
            glyphs::number_rects(value, anchor, Params::SCORE_GLYPH_HEIGHT)
                .iter()
                .map(|r| InstanceData::rect(r, tint)),
        );
    }

    // keep the ball slot even when scores overflow the buffer
    instances.truncate(MAX_INSTANCES - 1);
    let rect_count = instances.len() as u32;
    instances.push(InstanceData::disc(
        snapshot.ball_pos,
        snapshot.ball_radius,
        tint,
    ));

    FrameInstances {
        instances,
        rect_count,
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
    }
}
