//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The shape pipeline and its per-frame vertex upload
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use caterpillar_core::{GlobalRotation, Shape};
use caterpillar_render::{
    context::{ContextError, RenderContext},
    pipeline::{ShapePipeline, INITIAL_VERTEX_CAPACITY},
    FrameGeometry,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
    geometry: FrameGeometry,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        log::info!("Surface format: {:?}", context.config.format);

        let mut pipeline = ShapePipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        let geometry = FrameGeometry::with_capacity(context.viewport(), INITIAL_VERTEX_CAPACITY);

        Ok(Self {
            context,
            pipeline,
            geometry,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.resize(size.width, size.height);
    }

    /// Tessellate and upload a frame's shapes
    ///
    /// The figure turns with the scene rotation. Canvas shapes are drawn
    /// screen-aligned, after the figure, in the same vertex list.
    pub fn prepare_frame(&mut self, figure: &[Shape], canvas: &[Shape], rotation: &GlobalRotation) {
        self.geometry.clear();
        self.geometry.set_viewport(self.context.viewport());
        self.geometry.add_shapes_with_view(figure, rotation.matrix());
        self.geometry.add_shapes(canvas);
        self.pipeline.upload_vertices(
            &self.context.device,
            &self.context.queue,
            &self.geometry.vertices,
        );
    }

    /// Encode, submit and present the prepared frame
    pub fn submit_frame(&mut self) -> Result<(), RenderError> {
        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.render_config.clear_color());

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
