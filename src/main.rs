// Copyright (c) 2024, Stack Visualizer Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Desktop window for the stack visualizer.

use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use softbuffer::{Context, Surface};
use stack_visualizer::events::{Event, Key, MouseButton, Point, Size};
use stack_visualizer::settings::SETTINGS_FILE;
use stack_visualizer::{Frame, PixelRenderer, Settings};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton as WinitButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key as WinitKey, NamedKey};
use winit::window::{Window, WindowId};

/// The window together with its presentation surface.
struct Gfx {
    window: Arc<Window>,
    // Kept alive for as long as the surface.
    _context: Context<Arc<Window>>,
    surface: Surface<Arc<Window>, Arc<Window>>,
}

struct StackGui {
    settings: Settings,
    frame: Frame,
    renderer: PixelRenderer,
    cursor: Point,
    gfx: Option<Gfx>,
}

impl StackGui {
    fn open_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Gfx> {
        let window_attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ));
        let window = Arc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(window.clone())
            .map_err(|err| anyhow::anyhow!("creating softbuffer context: {err}"))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|err| anyhow::anyhow!("creating softbuffer surface: {err}"))?;
        Ok(Gfx {
            window,
            _context: context,
            surface,
        })
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(gfx) = self.gfx.as_mut() else {
            return Ok(());
        };
        let size = gfx.window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        gfx.surface
            .resize(width, height)
            .map_err(|err| anyhow::anyhow!("resizing surface: {err}"))?;

        let size = Size::new(size.width, size.height);
        self.frame.resize(size);
        self.renderer.resize(size);
        self.frame.render(&mut self.renderer)?;

        let mut buffer = gfx
            .surface
            .buffer_mut()
            .map_err(|err| anyhow::anyhow!("mapping surface buffer: {err}"))?;
        self.renderer.copy_to_xrgb(&mut buffer);
        buffer
            .present()
            .map_err(|err| anyhow::anyhow!("presenting frame: {err}"))?;
        Ok(())
    }

    fn dispatch(&mut self, event: &Event) {
        if self.frame.handle_event(event) {
            if let Some(gfx) = &self.gfx {
                gfx.window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for StackGui {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.open_window(event_loop) {
            Ok(gfx) => {
                tracing::info!(title = %self.settings.title, "window opened");
                gfx.window.request_redraw();
                self.gfx = Some(gfx);
            }
            Err(err) => {
                tracing::error!("failed to open window: {err:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) => {
                if let Some(gfx) = &self.gfx {
                    gfx.window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as i32, position.y as i32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                let event = Event::click(self.cursor, translate_button(button));
                self.dispatch(&event);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                for event in translate_key(&event) {
                    self.dispatch(&event);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    tracing::error!("render error: {err:#}");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

fn translate_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(code) => MouseButton::Other(code),
    }
}

fn translate_key(event: &KeyEvent) -> Vec<Event> {
    if event.state != ElementState::Pressed {
        return Vec::new();
    }
    match &event.logical_key {
        WinitKey::Named(NamedKey::Enter) => vec![Event::key_press(Key::Enter)],
        WinitKey::Named(NamedKey::Escape) => vec![Event::key_press(Key::Escape)],
        WinitKey::Named(NamedKey::Backspace) => vec![Event::key_press(Key::Backspace)],
        _ => event
            .text
            .as_deref()
            .map(|text| text.chars().map(Event::char).collect())
            .unwrap_or_default(),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE))
        .with_context(|| format!("loading {SETTINGS_FILE}"))?;
    let renderer = PixelRenderer::from_settings(&settings).context("loading font")?;
    let frame = Frame::from_settings(&settings);
    tracing::info!(capacity = settings.capacity, "starting stack visualizer");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = StackGui {
        settings,
        frame,
        renderer,
        cursor: Point::zero(),
        gfx: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
