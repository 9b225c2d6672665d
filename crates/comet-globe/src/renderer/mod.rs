//! The main rendering orchestrator. Owns the GPU context, the depth target,
//! the Earth and marker pipelines and the egui renderer.

pub mod context;
pub mod pipelines;
pub mod targets;

use self::{
    context::GfxContext,
    pipelines::{earth::EarthPipeline, markers::MarkerPipeline},
    targets::DepthTarget,
};
use crate::scene::Scene;
use std::sync::Arc;
use winit::window::Window;

/// Background behind the globe.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Owns all rendering-related state.
pub struct Renderer {
    pub gfx: GfxContext,
    pub depth: DepthTarget,
    pub earth: EarthPipeline,
    pub markers: MarkerPipeline,
    pub egui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, scene: &Scene) -> anyhow::Result<Self> {
        let gfx = GfxContext::new(window).await?;
        let color_fmt = gfx.config.format;

        let depth = DepthTarget::new(&gfx.device, gfx.size);
        let earth = EarthPipeline::new(&gfx.device, color_fmt, depth.format, scene);
        let markers = MarkerPipeline::new(&gfx.device, color_fmt, depth.format);
        let egui_renderer = egui_wgpu::Renderer::new(&gfx.device, color_fmt, None, 1);

        Ok(Self {
            gfx,
            depth,
            earth,
            markers,
            egui_renderer,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.gfx.resize(new_size);
            self.depth.resize(&self.gfx.device, new_size);
        }
    }

    /// Draws Earth and the markers into `swap_view`.
    pub fn render(&mut self, swap_view: &wgpu::TextureView, scene: &Scene) {
        self.earth.prepare(&self.gfx.queue, scene);
        self.markers
            .prepare(&self.gfx.device, &self.gfx.queue, scene);

        let mut encoder = self
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Globe Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: swap_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.earth.draw(&mut pass);
            self.markers.draw(&mut pass);
        }

        self.gfx.queue.submit(std::iter::once(encoder.finish()));
    }
}
