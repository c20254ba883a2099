use anyhow::Result;
use glam::Mat4;
use std::path::PathBuf;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::config::AppConfig;
use crate::core::{GpuContext, WindowDimensions};
use crate::lighting::SceneLights;
use crate::loaders::{load_texture_or_fallback, TextureData};
use crate::scenes::{create_stairwell_scene, lamp_cube, lamp_instances, CLEAR_COLOR};
use crate::types::{FrameUniforms, LampInstance, LightingUniform, Vertex};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Mid-grey specular used when no specular map is configured
const DEFAULT_SPECULAR: [u8; 4] = [128, 128, 128, 255];

/// What the renderer needs from the app configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub vsync: bool,
    pub show_ui: bool,
    pub diffuse_map: Option<PathBuf>,
    pub specular_map: Option<PathBuf>,
}

impl From<&AppConfig> for RenderSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            vsync: config.render.vsync,
            show_ui: config.render.show_ui,
            diffuse_map: config.textures.diffuse.clone(),
            specular_map: config.textures.specular.clone(),
        }
    }
}

/// Values shown in the stats overlay
#[derive(Debug, Clone, Copy)]
struct OverlayStats {
    fps: f32,
    position: [f32; 3],
    yaw: f32,
    pitch: f32,
    zoom: f32,
    resolution: (u32, u32),
    lights: usize,
}

/// egui FPS/camera overlay drawn on top of the scene
struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Overlay {
    fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer =
            egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self {
            ctx,
            state,
            renderer,
        }
    }

    fn draw(
        &mut self,
        gpu: &GpuContext,
        window: &Window,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        stats: OverlayStats,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            egui::Window::new("Stairwell")
                .title_bar(false)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .show(ctx, |ui| {
                    ui.heading(
                        egui::RichText::new(format!("{:.0} FPS", stats.fps))
                            .size(24.0)
                            .color(egui::Color32::from_rgb(74, 158, 255)),
                    );
                    let frame_time_ms = if stats.fps > 0.0 { 1000.0 / stats.fps } else { 0.0 };
                    ui.label(
                        egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                            .color(egui::Color32::GRAY),
                    );
                    ui.separator();
                    ui.monospace(format!(
                        "Pos: ({:.2}, {:.2}, {:.2})",
                        stats.position[0], stats.position[1], stats.position[2]
                    ));
                    ui.monospace(format!("Yaw: {:.1}° Pitch: {:.1}°", stats.yaw, stats.pitch));
                    ui.monospace(format!("FOV: {:.1}°", stats.zoom));
                    ui.separator();
                    ui.monospace(format!(
                        "{}x{}, {} lamps",
                        stats.resolution.0, stats.resolution.1, stats.lights
                    ));
                });
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(gpu.device(), gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [stats.resolution.0, stats.resolution.1],
            pixels_per_point: full_output.pixels_per_point,
        };

        let callbacks = self.renderer.update_buffers(
            gpu.device(),
            gpu.queue(),
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        callbacks
    }
}

/// Forward renderer for the lit stairwell and its lamps
pub struct SceneRenderer {
    gpu: GpuContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    size: WindowDimensions,
    depth_view: wgpu::TextureView,
    scene_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    lighting_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    material_bind_group: wgpu::BindGroup,
    scene_vertex_buffer: wgpu::Buffer,
    scene_vertex_count: u32,
    lamp_vertex_buffer: wgpu::Buffer,
    lamp_vertex_count: u32,
    lamp_instance_buffer: wgpu::Buffer,
    lamp_instance_count: u32,
    scene_model: Mat4,
    lights: SceneLights,
    clear_color: wgpu::Color,
    overlay: Option<Overlay>,
}

impl SceneRenderer {
    pub async fn new(
        window: Arc<Window>,
        camera: &Camera,
        settings: &RenderSettings,
    ) -> Result<Self> {
        let size = WindowDimensions::from(window.inner_size());
        let (gpu, surface) = GpuContext::for_window(window.clone()).await?;

        let config = gpu.surface_config(&surface, size, settings.vsync)?;
        surface.configure(gpu.device(), &config);

        let device = gpu.device();
        let depth_view = create_depth_view(device, size);

        let scene = create_stairwell_scene();
        let lights = SceneLights::new(&scene.lamp_positions, camera);
        let cube = lamp_cube();
        let instances = lamp_instances(&scene.lamp_positions);

        let scene_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Vertices"),
            contents: bytemuck::cast_slice(&scene.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let lamp_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lamp Vertices"),
            contents: bytemuck::cast_slice(&cube),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let lamp_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lamp Instances"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let frame_uniform = camera.to_uniform(size.aspect_ratio(), scene.model);
        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniforms"),
            contents: bytemuck::cast_slice(&[frame_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lighting_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Lighting Uniforms"),
            contents: bytemuck::cast_slice(&[lights.to_uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_layout = create_frame_layout(device);
        let material_layout = create_material_layout(device);

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: frame_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lighting_buffer.as_entire_binding(),
                },
            ],
            label: Some("frame_bind_group"),
        });

        let diffuse = load_texture_or_fallback(
            settings.diffuse_map.as_deref(),
            TextureData::checkerboard(256, 8, [200, 200, 200, 255], [90, 90, 90, 255]),
        );
        let specular = load_texture_or_fallback(
            settings.specular_map.as_deref(),
            TextureData::solid(DEFAULT_SPECULAR),
        );
        let diffuse_view = upload_texture(
            &gpu,
            &diffuse,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            "Diffuse Map",
        );
        let specular_view =
            upload_texture(&gpu, &specular, wgpu::TextureFormat::Rgba8Unorm, "Specular Map");

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Material Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &material_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&specular_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some("material_bind_group"),
        });

        let scene_pipeline =
            create_scene_pipeline(device, &frame_layout, &material_layout, config.format);
        let lamp_pipeline = create_lamp_pipeline(device, &frame_layout, config.format);

        let overlay = settings
            .show_ui
            .then(|| Overlay::new(&window, device, config.format));

        log::info!(
            "Renderer ready: {} scene vertices, {} lamps, {}x{}",
            scene.vertices.len(),
            instances.len(),
            size.width,
            size.height
        );

        Ok(Self {
            clear_color: clear_color(config.format),
            gpu,
            surface,
            config,
            size,
            depth_view,
            scene_pipeline,
            lamp_pipeline,
            frame_buffer,
            lighting_buffer,
            frame_bind_group,
            material_bind_group,
            scene_vertex_count: scene.vertex_count(),
            scene_vertex_buffer,
            lamp_vertex_buffer,
            lamp_vertex_count: cube.len() as u32,
            lamp_instance_buffer,
            lamp_instance_count: instances.len() as u32,
            scene_model: scene.model,
            lights,
            overlay,
        })
    }

    /// Zero sizes (minimised windows) are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = WindowDimensions::new(width, height);
        if size.is_empty() || size == self.size {
            return;
        }

        self.size = size;
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
        self.depth_view = create_depth_view(self.gpu.device(), size);
        log::debug!("Resized to {}x{}", width, height);
    }

    /// Re-apply the current configuration after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(self.gpu.device(), &self.config);
    }

    /// Feed a window event to the overlay. The overlay has no interactive
    /// widgets, so the event is never withheld from camera input.
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) {
        if let Some(overlay) = &mut self.overlay {
            let _ = overlay.state.on_window_event(window, event);
        }
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        window: &Window,
        fps: f32,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        if self.size.is_empty() {
            return Ok(());
        }

        let frame_uniform: FrameUniforms =
            camera.to_uniform(self.size.aspect_ratio(), self.scene_model);
        self.gpu.queue().write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::cast_slice(&[frame_uniform]),
        );

        self.lights.spot.follow(camera);
        let lighting: LightingUniform = self.lights.to_uniform();
        self.gpu.queue().write_buffer(
            &self.lighting_buffer,
            0,
            bytemuck::cast_slice(&[lighting]),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.scene_pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            render_pass.set_bind_group(1, &self.material_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.scene_vertex_buffer.slice(..));
            render_pass.draw(0..self.scene_vertex_count, 0..1);

            render_pass.set_pipeline(&self.lamp_pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.lamp_vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.lamp_instance_buffer.slice(..));
            render_pass.draw(0..self.lamp_vertex_count, 0..self.lamp_instance_count);
        }

        let mut command_buffers = Vec::new();
        if let Some(overlay) = &mut self.overlay {
            let stats = OverlayStats {
                fps,
                position: camera.position().to_array(),
                yaw: camera.yaw(),
                pitch: camera.pitch(),
                zoom: camera.zoom(),
                resolution: (self.size.width, self.size.height),
                lights: self.lights.points.len(),
            };
            command_buffers = overlay.draw(&self.gpu, window, &mut encoder, &view, stats);
        }

        command_buffers.push(encoder.finish());
        self.gpu.queue().submit(command_buffers);
        output.present();

        Ok(())
    }
}

/// The clear colour is authored in display space; sRGB targets expect linear
pub fn clear_color(format: wgpu::TextureFormat) -> wgpu::Color {
    let channel = |c: f64| {
        if format.is_srgb() {
            srgb_to_linear(c)
        } else {
            c
        }
    };

    wgpu::Color {
        r: channel(CLEAR_COLOR[0]),
        g: channel(CLEAR_COLOR[1]),
        b: channel(CLEAR_COLOR[2]),
        a: 1.0,
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn create_depth_view(device: &wgpu::Device, size: WindowDimensions) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Uploads the texture with a CPU-built mip chain
fn upload_texture(
    gpu: &GpuContext,
    data: &TextureData,
    format: wgpu::TextureFormat,
    label: &str,
) -> wgpu::TextureView {
    let levels = data.mip_chain();

    let texture = gpu.device().create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: levels.len() as u32,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (mip_level, level) in levels.iter().enumerate() {
        gpu.queue().write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: mip_level as u32,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &level.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * level.width),
                rows_per_image: Some(level.height),
            },
            wgpu::Extent3d {
                width: level.width,
                height: level.height,
                depth_or_array_layers: 1,
            },
        );
    }

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

/// Group 0: per-frame transforms and lights
fn create_frame_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            uniform_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT),
            uniform_entry(1, wgpu::ShaderStages::FRAGMENT),
        ],
        label: Some("frame_bind_group_layout"),
    })
}

/// Group 1: diffuse map, specular map, sampler
fn create_material_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            texture_entry(0),
            texture_entry(1),
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("material_bind_group_layout"),
    })
}

fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

fn primitive_state() -> wgpu::PrimitiveState {
    // Quads are visible from both sides
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

fn create_scene_pipeline(
    device: &wgpu::Device,
    frame_layout: &wgpu::BindGroupLayout,
    material_layout: &wgpu::BindGroupLayout,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Lighting Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/lighting.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Scene Pipeline Layout"),
        bind_group_layouts: &[frame_layout, material_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Scene Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: primitive_state(),
        depth_stencil: Some(depth_stencil_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_lamp_pipeline(
    device: &wgpu::Device,
    frame_layout: &wgpu::BindGroupLayout,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Lamp Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/lamp.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Lamp Pipeline Layout"),
        bind_group_layouts: &[frame_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Lamp Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::position_layout(), LampInstance::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: primitive_state(),
        depth_stencil: Some(depth_stencil_state()),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_config() {
        let mut config = AppConfig::default();
        config.render.show_ui = false;
        config.textures.specular = Some(PathBuf::from("spec.png"));

        let settings = RenderSettings::from(&config);
        assert!(!settings.show_ui);
        assert!(settings.vsync);
        assert_eq!(settings.specular_map, Some(PathBuf::from("spec.png")));
        assert_eq!(settings.diffuse_map, config.textures.diffuse);
    }

    #[test]
    fn test_clear_color_linearised_for_srgb() {
        let linear = clear_color(wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(linear.r, 0.1);

        let srgb = clear_color(wgpu::TextureFormat::Bgra8UnormSrgb);
        assert!((srgb.r - 0.010_022_8).abs() < 1e-5);
        assert_eq!(srgb.a, 1.0);
    }

    #[test]
    fn test_srgb_curve_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
        assert!(srgb_to_linear(0.5) < 0.5);
    }
}
