pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::scene::FrameBatch;
use resources::FrameBuffers;

/// A recorded but not yet presented frame. The game loop records the frame
/// before running physics and presents it afterwards, preserving the
/// draw -> update -> present tick order.
pub struct PendingFrame {
    pub output: SurfaceTexture,
    pub commands: CommandBuffer,
}

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub camera: Camera,
    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: FrameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        field_width: f32,
        field_height: f32,
    ) -> anyhow::Result<Self> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::pixel_space(field_width, field_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 32);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
        }
    }

    /// Record this tick's draw commands.
    pub fn record_frame(&mut self, batch: &FrameBatch) -> Result<PendingFrame, SurfaceError> {
        draw::record_frame(self, batch)
    }

    /// Submit and present a recorded frame.
    pub fn present_frame(&mut self, frame: PendingFrame) {
        self.queue.submit(std::iter::once(frame.commands));
        frame.output.present();
    }
}
