use crate::{
    globe::Globe,
    net::FetchOutcome,
    presenter::HudPresenter,
    renderer::Renderer,
    ui,
};
use anyhow::Result;
use crossbeam_channel::{Receiver, TryRecvError};
use rand::rngs::StdRng;
use std::sync::Arc;
use winit::{event::WindowEvent, window::Window};

pub struct App {
    pub renderer: Renderer,
    pub globe: Globe<HudPresenter>,
    pub egui_ctx: egui::Context,
    pub egui_state: egui_winit::State,
    /// Pending one-shot fetch; dropped once its outcome arrives.
    fetch_rx: Option<Receiver<FetchOutcome>>,
}

impl App {
    pub async fn new(
        window: Arc<Window>,
        rng: StdRng,
        fetch_rx: Receiver<FetchOutcome>,
    ) -> Result<Self> {
        let size = window.inner_size();
        let globe = Globe::new(HudPresenter::default(), (size.width, size.height), rng);
        let renderer = Renderer::new(window.clone(), &globe.scene).await?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &*window,
            None,
            None,
        );

        Ok(Self {
            renderer,
            globe,
            egui_ctx,
            egui_state,
            fetch_rx: Some(fetch_rx),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.renderer.resize(new_size);
            self.globe.on_resize(new_size.width, new_size.height);
        }
    }

    /// Returns `true` when the HUD consumed the event.
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        if let WindowEvent::Resized(physical_size) = event {
            self.resize(*physical_size);
        }

        let response = self.egui_state.on_window_event(window, event);
        if response.consumed {
            return true;
        }

        self.globe.on_pointer_event(event);
        false
    }

    /// Delivers the fetch outcome to the globe once it is available.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = self.fetch_rx.as_ref() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.globe.on_fetch_result(outcome);
                self.fetch_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("Fetch thread exited without a result");
                self.fetch_rx = None;
            }
        }
    }

    /// One frame: advance the scene, draw it, then draw the HUD on top.
    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        self.globe.tick();

        let frame = self.renderer.gfx.surface.get_current_texture()?;
        let swap_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(&swap_view, &self.globe.scene);

        let egui_input = self.egui_state.take_egui_input(window);
        self.egui_ctx.begin_frame(egui_input);

        ui::draw_hud(&self.egui_ctx, &self.globe.presenter);
        let apply = ui::draw_filter_panel(
            &self.egui_ctx,
            &mut self.globe.filter,
            self.globe.scene.markers.len(),
        );

        let egui_output = self.egui_ctx.end_frame();
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output);

        // Takes effect in the next frame's instance upload.
        if apply {
            self.globe.apply_filter();
        }

        let shapes = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.renderer.gfx.config.width,
                self.renderer.gfx.config.height,
            ],
            pixels_per_point: self.egui_ctx.pixels_per_point(),
        };

        let mut encoder = self
            .renderer
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("HUD Encoder"),
            });

        for (id, delta) in &egui_output.textures_delta.set {
            self.renderer.egui_renderer.update_texture(
                &self.renderer.gfx.device,
                &self.renderer.gfx.queue,
                *id,
                delta,
            );
        }

        self.renderer.egui_renderer.update_buffers(
            &self.renderer.gfx.device,
            &self.renderer.gfx.queue,
            &mut encoder,
            &shapes,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("HUD Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &swap_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer
                .egui_renderer
                .render(&mut render_pass, &shapes, &screen_descriptor);
        }

        for id in &egui_output.textures_delta.free {
            self.renderer.egui_renderer.free_texture(id);
        }

        self.renderer
            .gfx
            .queue
            .submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}
