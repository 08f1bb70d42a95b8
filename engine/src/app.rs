use std::error::Error;
use std::time::Instant;

use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::clock::TickClock;
use crate::graphics::Renderer2d;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;

pub struct AppConfig {
    pub title: String,
    /// Native framebuffer resolution.
    pub buffer_size: SurfaceSize,
    /// Integer window multiplier applied to `buffer_size`.
    pub scale: u32,
    pub vsync: bool,
}

pub struct AppContext {
    pub window: Window,
    pub renderer: PixelsRenderer2d,
}

/// Keys observed since the previous tick.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Keys that went down, in arrival order. OS auto-repeat is not included.
    pub keys_pressed: Vec<VirtualKeyCode>,
    /// Set when the host asked the window to close.
    pub close_requested: bool,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.close_requested = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

pub trait GameApp {
    type State;

    fn init_state(&mut self, ctx: &mut AppContext) -> Self::State;

    /// Advances one fixed tick. `dt_ms` is the wall-clock time since the previous tick.
    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        dt_ms: u32,
        ctx: &mut AppContext,
    ) -> AppControl;

    fn render(&mut self, state: &Self::State, renderer: &mut dyn Renderer2d);
}

/// Tracks which keys are physically held so OS key-repeat presses can be dropped.
#[derive(Debug, Default)]
pub struct KeyLatch {
    held: Vec<VirtualKeyCode>,
}

impl KeyLatch {
    /// Returns true only for the first press of a key since it was last released.
    pub fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => {
                if self.held.contains(&key) {
                    return false;
                }
                self.held.push(key);
                true
            }
            ElementState::Released => {
                self.held.retain(|&k| k != key);
                false
            }
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

pub fn run_game<G: GameApp + 'static>(
    config: AppConfig,
    mut game: G,
) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let window_size = config.buffer_size.scaled(config.scale);
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(window_size.width, window_size.height))
        .with_min_inner_size(PhysicalSize::new(
            config.buffer_size.width,
            config.buffer_size.height,
        ))
        .build(&event_loop)?;

    let inner = window.inner_size();
    let surface_texture = SurfaceTexture::new(inner.width, inner.height, &window);
    let pixels = PixelsBuilder::new(
        config.buffer_size.width,
        config.buffer_size.height,
        surface_texture,
    )
    .enable_vsync(config.vsync)
    .build()?;

    let renderer = PixelsRenderer2d::new(pixels, config.buffer_size);
    let mut ctx = AppContext { window, renderer };
    let mut state = game.init_state(&mut ctx);
    let mut input = InputFrame::default();
    let mut latch = KeyLatch::default();
    let mut clock = TickClock::new(Instant::now());

    event_loop.run(move |event, _, control_flow| {
        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    input.close_requested = true;
                }
                WindowEvent::Resized(size) => {
                    let size = SurfaceSize::new(size.width, size.height);
                    if let Err(err) = ctx.renderer.resize_surface(size) {
                        log::warn!("resize failed: {err}");
                    }
                }
                WindowEvent::Focused(false) => latch.release_all(),
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if latch.on_key(*key, *key_state) {
                        input.keys_pressed.push(*key);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if clock.is_due(now) || input.close_requested {
                    let dt_ms = clock.tick(now);
                    let control = game.update_state(&mut state, &input, dt_ms, &mut ctx);
                    input.clear();
                    if control == AppControl::Exit {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    ctx.window.request_redraw();
                }
                *control_flow = ControlFlow::WaitUntil(clock.next_tick());
            }
            Event::RedrawRequested(_) => {
                ctx.renderer.draw_frame(|gfx| game.render(&state, gfx));
                if let Err(err) = ctx.renderer.present() {
                    log::warn!("present failed: {err}");
                }
            }
            _ => {}
        }
    });
}
