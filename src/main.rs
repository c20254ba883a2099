use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use stairwell::camera::Camera;
use stairwell::cli::Cli;
use stairwell::config::AppConfig;
use stairwell::controls::{self, InputSnapshot};
use stairwell::core::{Clock, FpsCounter, WinitController};
use stairwell::renderer::{RenderSettings, SceneRenderer};

struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: Camera,
    controller: WinitController,
    clock: Clock,
    fps: FpsCounter,
    cursor_grab: Option<CursorGrabMode>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            camera: Camera::from_config(&config.camera),
            config,
            window: None,
            renderer: None,
            controller: WinitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::default(),
            cursor_grab: None,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let window = event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        )?;
        Ok(Arc::new(window))
    }

    /// Hide the cursor and keep it inside the window. Confined is preferred so
    /// cursor positions keep flowing; Locked is the fallback on platforms that
    /// only support that.
    fn grab_cursor(window: &Window) -> Option<CursorGrabMode> {
        window.set_cursor_visible(false);

        [CursorGrabMode::Confined, CursorGrabMode::Locked]
            .into_iter()
            .find(|&mode| match window.set_cursor_grab(mode) {
                Ok(()) => true,
                Err(e) => {
                    log::debug!("Cursor grab {:?} unavailable: {}", mode, e);
                    false
                }
            })
    }

    /// Keep a confined cursor away from the window edges
    fn recentre_cursor(&mut self, window: &Window) {
        if self.cursor_grab != Some(CursorGrabMode::Confined) {
            return;
        }

        let size = window.inner_size();
        let (x, y) = (size.width as f32 / 2.0, size.height as f32 / 2.0);
        if window
            .set_cursor_position(PhysicalPosition::new(x as f64, y as f64))
            .is_ok()
        {
            self.controller.warp_cursor(x, y);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta_time = self.clock.tick();
        if let Some(fps) = self.fps.tick(delta_time) {
            let p = self.camera.position();
            log::info!(
                "{:.0} FPS | pos ({:.2}, {:.2}, {:.2}) | fov {:.1}",
                fps,
                p.x,
                p.y,
                p.z,
                self.camera.zoom()
            );
        }

        let snapshot = InputSnapshot::from_controller(&self.controller);
        controls::apply(&mut self.camera, &snapshot, delta_time);
        self.controller.reset_deltas();

        let Some(window) = self.window.clone() else {
            return;
        };

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&self.camera, &window, self.fps.fps()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("Surface lost or outdated, reconfiguring");
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {}", e),
            }
        }

        self.recentre_cursor(&window);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let settings = RenderSettings::from(&self.config);
        let renderer =
            match pollster::block_on(SceneRenderer::new(window.clone(), &self.camera, &settings)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

        self.cursor_grab = Self::grab_cursor(&window);
        if self.cursor_grab.is_none() {
            log::warn!("Cursor could not be grabbed; mouse look stops at the window edge");
        }

        self.clock.reset();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui sees every event first; camera input is processed afterwards
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            renderer.handle_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    self.cursor_grab = Self::grab_cursor(window);
                }
            }
            other => self.controller.process_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.cursor_grab != Some(CursorGrabMode::Locked) {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.controller.mouse_motion(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("Stairwell - Controls: WASD/arrows move, mouse looks, wheel zooms, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
