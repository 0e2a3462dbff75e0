//! Caterpillar
//!
//! An animated figure built from unit cubes, with click-to-place primitives.

use std::process::ExitCode;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use caterpillar::config::AppConfig;
use caterpillar::input::{InputAction, InputMapper};
use caterpillar::systems::{FrameStats, FrameTimer, RenderError, RenderSystem, WindowSystem};
use caterpillar_core::{
    build_caterpillar, AnimationClock, Brush, Canvas, CaterpillarParams, GlobalRotation, Shape,
};
use caterpillar_input::CanvasController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    timer: FrameTimer,
    clock: AnimationClock,
    rotation: GlobalRotation,
    params: CaterpillarParams,
    /// Figure shapes, rebuilt every frame
    figure: Vec<Shape>,
    brush: Brush,
    canvas: Canvas,
    controller: CanvasController,
    /// Set when startup or rendering failed fatally
    failed: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let params = config.figure.to_params();
        let brush = config.brush.to_brush();

        let controller = CanvasController::new()
            .with_rotation_speed(config.animation.rotation_speed)
            .with_scroll_step(config.animation.scroll_step)
            .with_size_step(config.brush.size_step);

        log::info!(
            "Figure: {} segments, brush: {} size {}",
            params.segment_count, brush.kind, brush.size
        );

        Self {
            clock: AnimationClock::new(config.animation.enabled),
            rotation: GlobalRotation::new(config.animation.rotation_angle),
            figure: Vec::new(),
            window: None,
            render: None,
            timer: FrameTimer::new(),
            params,
            brush,
            canvas: Canvas::new(),
            controller,
            failed: false,
            config,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, message: &str, err: &dyn std::error::Error) {
        log::error!("{}: {}", message, err);
        self.failed = true;
        event_loop.exit();
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleAnimation => {
                let enabled = self.clock.toggle();
                log::info!("Animation: {}", if enabled { "ON" } else { "OFF" });
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ClearCanvas => {
                log::info!("Cleared {} placed shapes", self.canvas.len());
                self.canvas.clear();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.timer.tick();
        self.controller.update(&mut self.brush, &mut self.rotation, dt);
        self.clock.advance(dt);

        let start = Instant::now();
        self.figure = build_caterpillar(self.clock.seconds(), &self.params);

        let Some(render) = &mut self.render else {
            return;
        };
        render.prepare_frame(&self.figure, self.canvas.shapes(), &self.rotation);
        // Surface acquire blocks on vsync, so it is left out of the stats
        let stats = FrameStats::from_duration(start.elapsed());

        match render.submit_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                render.reconfigure();
            }
            Err(e @ RenderError::OutOfMemory) => {
                self.fail(event_loop, "Rendering stopped", &e);
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {}", e);
            }
        }

        if let Some(window) = &self.window {
            if self.config.debug.show_frame_stats {
                window.update_title(&stats, !self.clock.is_enabled());
            }
            // Request next frame
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, "Failed to create window", &e),
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => return self.fail(event_loop, "Failed to initialize GPU", &e),
        };

        let (width, height) = render.size();
        self.controller.set_viewport(width, height);

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.controller.set_viewport(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(action) => self.handle_action(event_loop, action),
                        // Pass to controller for brush and rotation keys
                        None => {
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.controller.process_cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(position) = self.controller.process_mouse_button(button, state) {
                    // Apply brush edits made since the last frame first
                    self.controller.update(&mut self.brush, &mut self.rotation, 0.0);
                    self.canvas.place(&self.brush, position);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(lines);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() -> ExitCode {
    // Logging is configured from the config file, so load it first
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Caterpillar");

    // Create event loop
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    if app.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
