//! The game loop shell: window, input events, and one simulation tick per
//! redraw, throttled to the configured tick rate.

use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use game_core::{Config, Events, GameState};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Icon, Window, WindowId};

use crate::audio::SoundBank;
use crate::clock::TickClock;
use crate::fsm::{LoopAction, LoopFsm, LoopState};
use crate::input::Keyboard;
use crate::renderer::Renderer;
use crate::scene::{self, FrameBatch};
use crate::settings::Settings;

/// Window and gpu state; only exists once the event loop has resumed.
struct Gfx {
    window: Arc<Window>,
    renderer: Renderer,
}

/// The session context: owns the simulation, all host resources and the
/// loop state machine for the whole process lifetime. Constructed once and
/// handed to the event loop; no globals.
pub struct App {
    settings: Settings,
    config: Config,
    fsm: LoopFsm,
    keyboard: Keyboard,
    game: GameState,
    events: Events,
    batch: FrameBatch,
    clock: TickClock,
    audio: SoundBank,
    gfx: Option<Gfx>,
    fatal: Option<anyhow::Error>,
}

impl App {
    /// Acquire everything that does not need a window: simulation state
    /// and the audio device. Failures here are fatal by design.
    pub fn new(settings: Settings, config: Config) -> anyhow::Result<Self> {
        let audio = SoundBank::load(&settings.bounce_sound)?;
        Ok(Self {
            game: GameState::new(&config),
            events: Events::new(),
            batch: FrameBatch::new(),
            clock: TickClock::new(config.tick_rate),
            fsm: LoopFsm::new(),
            keyboard: Keyboard::new(),
            audio,
            gfx: None,
            fatal: None,
            settings,
            config,
        })
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(&mut self)
            .context("event loop failed")?;
        match self.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init_gfx(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Gfx> {
        let icon = load_icon(&self.settings.icon)?;
        let attrs = Window::default_attributes()
            .with_title(self.settings.caption.to_uppercase())
            .with_inner_size(LogicalSize::new(
                self.config.field_width as f64,
                self.config.field_height as f64,
            ))
            .with_resizable(false)
            .with_window_icon(Some(icon));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            self.config.field_width as f32,
            self.config.field_height as f32,
        ))?;
        Ok(Gfx { window, renderer })
    }

    /// One tick: key state, input, record frame, physics and scoring,
    /// sound, present, throttle. Quit is only observed between ticks.
    fn run_tick(&mut self) {
        if self.fsm.is_stopped() {
            return;
        }
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        let keys = self.keyboard.snapshot();
        self.events.clear();
        self.game.apply_inputs(&keys);

        // The frame shows the pre-physics state; it is presented after the
        // update so direction changes land in the same tick.
        scene::build_frame(&self.game, &mut self.batch);
        let frame = match gfx.renderer.record_frame(&self.batch) {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = gfx.window.inner_size();
                gfx.renderer.resize(size.width, size.height);
                return;
            }
            Err(err) => {
                log::error!("skipping frame: {err}");
                return;
            }
        };

        self.game.advance(&mut self.events);

        if self.events.ball_hit_paddle {
            self.audio.play_bounce();
        }
        if self.events.left_scored || self.events.right_scored {
            log::info!(
                "score: {} - {}",
                self.game.left.score,
                self.game.right.score
            );
        }

        gfx.renderer.present_frame(frame);

        if self.fsm.state() == LoopState::Starting {
            // Deliberate pause after the very first frame, then steady ticks.
            thread::sleep(Duration::from_millis(self.config.start_delay_ms));
            self.fsm.transition(LoopAction::FirstFrameDrawn);
            self.clock.restart();
        } else {
            self.clock.wait();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.init_gfx(event_loop) {
            Ok(gfx) => {
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
            }
            Err(err) => {
                self.fatal = Some(err);
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
        match event {
            WindowEvent::CloseRequested => {
                self.fsm.transition(LoopAction::Quit);
                log::info!(
                    "quit: final score {} - {}",
                    self.game.left.score,
                    self.game.right.score
                );
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.keyboard
                        .handle_key(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => self.run_tick(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.fsm.is_stopped() {
            return;
        }
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }
}

fn load_icon(path: &Path) -> anyhow::Result<Icon> {
    let image = image::open(path)
        .with_context(|| format!("failed to load icon {}", path.display()))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height).context("invalid icon image")
}
