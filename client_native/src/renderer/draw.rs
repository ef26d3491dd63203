use wgpu::*;

use super::resources::{MAX_CIRCLE_INSTANCES, MAX_RECT_INSTANCES};
use super::{PendingFrame, Renderer};
use crate::scene::FrameBatch;

/// Record one frame's commands from the batch: clear to black, rects
/// (paddles, dashes, score segments), then the ball. Nothing is submitted
/// here; presentation happens in a separate step.
pub fn record_frame(renderer: &Renderer, batch: &FrameBatch) -> Result<PendingFrame, SurfaceError> {
    let rect_count = batch.rects.len().min(MAX_RECT_INSTANCES as usize);
    let circle_count = batch.circles.len().min(MAX_CIRCLE_INSTANCES as usize);

    if rect_count > 0 {
        renderer.queue.write_buffer(
            &renderer.buffers.rects,
            0,
            bytemuck::cast_slice(&batch.rects[..rect_count]),
        );
    }
    if circle_count > 0 {
        renderer.queue.write_buffer(
            &renderer.buffers.circles,
            0,
            bytemuck::cast_slice(&batch.circles[..circle_count]),
        );
    }

    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.main_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Rects: paddles, dashes, score segments
        let rect_mesh = &renderer.meshes.0;
        pass.set_vertex_buffer(0, rect_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..rect_mesh.index_count, 0, 0..rect_count as u32);

        // Circle: the ball
        let circle_mesh = &renderer.meshes.1;
        pass.set_vertex_buffer(0, circle_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
        pass.draw_indexed(0..circle_mesh.index_count, 0, 0..circle_count as u32);
    }

    Ok(PendingFrame {
        output,
        commands: encoder.finish(),
    })
}
