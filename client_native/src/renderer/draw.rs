use super::resources::{build_instances, FrameInstances};
use super::Renderer;
use crate::error::ClientError;
use crate::palette::{CORAL_PINK, TEAL_GREEN};
use game_core::{GameMap, Snapshot};
use tracing::{debug, warn};
use wgpu::*;

pub fn draw_frame(
    renderer: &mut Renderer,
    snapshot: &Snapshot,
    map: &GameMap,
) -> Result<(), ClientError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            debug!("surface lost or outdated, reconfiguring");
            renderer.reconfigure();
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            warn!("surface timed out, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let frame = build_instances(snapshot, map, TEAL_GREEN);
    if !frame.instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&frame.instances),
        );
    }

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(CORAL_PINK.to_wgpu()),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, &frame);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, frame: &FrameInstances) {
    if frame.instances.is_empty() {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    // Rects (centre line, paddles, score segments)
    let (rect, circle) = &renderer.meshes;
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..rect.index_count, 0, 0..frame.rect_count);

    if !frame.has_ball() {
        return;
    }

    // Circle (ball)
    let ball = frame.ball_index();
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..circle.index_count, 0, ball..ball + 1);
}
