// Renders the reference sphere with a single ambient + point light (Phong).

use crate::{
    data::{mesh::uv_sphere, EarthUniform, MeshVertex},
    scene::Scene,
};
use wgpu::util::DeviceExt;

/// Surface colour is procedural: ocean, noisy land bands and polar ice.
const EARTH_WGSL: &str = r#"
struct EarthUniform {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    light_pos: vec3<f32>,
    ambient: f32,
    camera_pos: vec3<f32>,
    light_intensity: f32,
};

@group(0) @binding(0) var<uniform> u: EarthUniform;

struct VsIn {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(input: VsIn) -> VsOut {
    let world = u.model * vec4<f32>(input.position, 1.0);
    var out: VsOut;
    out.clip = u.view_proj * world;
    out.world_pos = world.xyz;
    out.normal = (u.model * vec4<f32>(input.normal, 0.0)).xyz;
    out.uv = input.uv;
    return out;
}

fn surface_color(uv: vec2<f32>) -> vec3<f32> {
    let ocean = vec3<f32>(0.015, 0.08, 0.30);
    let land = vec3<f32>(0.08, 0.28, 0.07);
    let ice = vec3<f32>(0.85, 0.88, 0.92);

    let n = sin(uv.x * 37.0) * sin(uv.y * 23.0) + 0.5 * sin(uv.x * 91.0 + uv.y * 13.0);
    let base = select(ocean, land, n > 0.55);

    let lat = abs(0.5 - uv.y) * 3.14159265;
    return mix(base, ice, smoothstep(1.20, 1.35, lat));
}

@fragment
fn fs_main(input: VsOut) -> @location(0) vec4<f32> {
    let n = normalize(input.normal);
    let l = normalize(u.light_pos - input.world_pos);
    let v = normalize(u.camera_pos - input.world_pos);
    let h = normalize(l + v);

    let diffuse = max(dot(n, l), 0.0) * u.light_intensity;
    let specular = pow(max(dot(n, h), 0.0), 30.0) * 0.07 * u.light_intensity;

    let color = surface_color(input.uv) * (u.ambient + diffuse) + vec3<f32>(specular);
    return vec4<f32>(color, 1.0);
}
"#;

pub struct EarthPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl EarthPipeline {
    pub fn new(
        device: &wgpu::Device,
        color_fmt: wgpu::TextureFormat,
        depth_fmt: wgpu::TextureFormat,
        scene: &Scene,
    ) -> Self {
        let earth = &scene.earth;
        let mesh = uv_sphere(earth.radius, earth.width_segments, earth.height_segments);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Earth VB"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Earth IB"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Earth Uniform Buffer"),
            size: std::mem::size_of::<EarthUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Earth BGL"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<EarthUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Earth Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Earth WGSL"),
            source: wgpu::ShaderSource::Wgsl(EARTH_WGSL.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Earth Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Earth Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3, // position
                        1 => Float32x3, // normal
                        2 => Float32x2, // uv
                    ],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_fmt,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_fmt,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Self {
            pipeline,
            bind_group,
            uniform_buffer,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    /// Uploads this frame's camera, spin and lighting.
    pub fn prepare(&self, queue: &wgpu::Queue, scene: &Scene) {
        let lights = &scene.lights;
        let uniform = EarthUniform {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            model: scene.earth.transform().to_cols_array_2d(),
            light_pos: lights.point.position.to_array(),
            ambient: lights.ambient.intensity,
            camera_pos: scene.camera.position().to_array(),
            light_intensity: lights.point.intensity,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
