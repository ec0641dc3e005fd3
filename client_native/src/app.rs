//! Window and event loop
//!
//! [`App`] drives one [`Session`] from winit's event loop. The window, GPU
//! renderer and audio stream live together in a [`GameContext`] created on
//! `resumed` and dropped when the loop exits.

use std::sync::Arc;
use std::time::Instant;

use game_core::{InputEvent, Session};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::audio::AudioCues;
use crate::cli::Options;
use crate::error::ClientError;
use crate::frame::FrameClock;
use crate::input;
use crate::renderer::Renderer;

pub const WINDOW_TITLE: &str = "EEG Pong";

/// Everything tied to the open window
pub struct GameContext {
    pub window: Arc<Window>,
    pub renderer: Renderer,
    pub audio: Option<AudioCues>,
    pub session: Session,
    pub clock: FrameClock,
}

impl GameContext {
    fn create(event_loop: &ActiveEventLoop, options: &Options) -> Result<Self, ClientError> {
        let config = options.config.clone();

        // Load sounds before opening the window so a bad asset fails fast
        let audio = if config.audio {
            AudioCues::open(&options.assets)?
        } else {
            None
        };

        let attributes = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.arena_width, config.arena_height))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let session = Session::new(config);
        let renderer = pollster::block_on(Renderer::new(window.clone(), session.map()))?;
        let clock = FrameClock::new(session.config().target_fps, Instant::now());

        Ok(Self {
            window,
            renderer,
            audio,
            session,
            clock,
        })
    }

    /// Run one frame if its deadline has passed
    fn frame(&mut self, now: Instant) -> Result<(), ClientError> {
        if !self.clock.is_due(now) {
            return Ok(());
        }
        self.clock.advance(now);

        let events = self.session.tick().clone();
        if let Some(audio) = &self.audio {
            audio.play_events(&events);
        }

        let snapshot = self.session.snapshot();
        self.renderer.draw(&snapshot, self.session.map())
    }
}

pub struct App {
    options: Options,
    context: Option<GameContext>,
    error: Option<ClientError>,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            context: None,
            error: None,
        }
    }

    /// The error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ClientError) {
        error!("{}", err);
        self.error = Some(err);
        self.context = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() {
            return;
        }
        match GameContext::create(event_loop, &self.options) {
            Ok(context) => {
                info!(
                    fps = context.session.config().target_fps,
                    audio = context.audio.is_some(),
                    "window opened"
                );
                context.window.request_redraw();
                self.context = Some(context);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(context) = self.context.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                context.session.handle_input(InputEvent::CloseRequested);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = input::translate(&event) {
                    context.session.handle_input(input);
                }
            }
            WindowEvent::Resized(size) => {
                context.renderer.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = context.frame(Instant::now()) {
                    self.fail(event_loop, e);
                    return;
                }
            }
            _ => {}
        }

        if !context.session.is_running() {
            info!(
                left = context.session.score().left,
                right = context.session.score().right,
                "game over"
            );
            self.context = None;
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(context) = &self.context {
            if context.clock.is_due(Instant::now()) {
                context.window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(context.clock.deadline()));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.context = None;
    }
}
