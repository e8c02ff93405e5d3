use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use flycam::camera::{CameraController, TickOutcome};
use flycam::cli::Cli;
use flycam::config::FlyConfig;
use flycam::core::{Clock, Throttled, WinitController};
use flycam::traits::ViewProvider;
use flycam::window::Window;

// === Constants ===

const STATUS_INTERVAL: f64 = 1.0;

// === Application ===

struct App {
    config: FlyConfig,
    window: Option<Window>,
    camera: CameraController,
    input: WinitController,
    clock: Clock,
    status: Throttled,
    shown: bool,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: FlyConfig) -> Self {
        Self {
            camera: CameraController::new(&config),
            config,
            window: None,
            input: WinitController::new(),
            clock: Clock::new(),
            status: Throttled::new(STATUS_INTERVAL),
            shown: false,
            error: None,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Window> {
        let attributes = WinitWindow::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ))
            // Shown after the first tick so the first frame is never stale
            .with_visible(false);

        let window = event_loop
            .create_window(attributes)
            .context("Failed to create window")?;
        Ok(Window::new(Arc::new(window)))
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        let elapsed = self.clock.tick();
        let input = self.input.snapshot();

        if self.camera.tick(&input, window, elapsed) == TickOutcome::Quit {
            event_loop.exit();
            return;
        }

        if !self.shown {
            window.show();
            self.shown = true;
        }

        if let Some(fps) = self.status.try_tick(elapsed) {
            let state = self.camera.state();
            log::debug!(
                "fps {:.1} position {} yaw {:.3} pitch {:.3} captured {}",
                fps,
                self.camera.position(),
                state.orientation.yaw(),
                state.orientation.pitch(),
                self.camera.is_captured()
            );
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(window) => {
                self.camera.set_viewport(window.viewport());
                self.window = Some(window);
                log::info!("Initialized, now running main loop");
                self.frame(event_loop);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.camera.set_viewport(size.into()),
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&event);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    log::info!(
        "Controls: click to capture mouse, WASD/arrows move, R/Space up, F/Shift down, Escape release, Q quit"
    );
    let mut app = App::new(config);
    event_loop.run_app(&mut app).context("Event loop failed")?;

    if let Some(e) = app.error.take() {
        return Err(e);
    }

    log::info!("Terminating");
    Ok(())
}
