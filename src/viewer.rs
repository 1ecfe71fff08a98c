//! Interactive minifb window around the scene renderer.
//!
//! Drag to pan, scroll to zoom, click a character to select it.
//! Space pauses the demo population, C recentres, Escape exits.

use std::cell::RefCell;
use std::rc::Rc;

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use tracing::{debug, info};

use crate::assets::PixelAssets;
use crate::config::ViewerConfig;
use crate::demo::DemoTown;
use crate::error::RenderError;
use crate::render::SceneRenderer;
use crate::scene::compose;
use crate::surface::{Color, Framebuffer, Surface, SurfaceSpec, ViewTransform};
use crate::world::Location;
use crate::worldgen::WorldGenerator;

/// A window presenting a software framebuffer.
pub struct WindowSurface {
    window: Window,
    frame: Framebuffer,
    buffer: Vec<u32>,
}

impl WindowSurface {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Push the framebuffer to the screen and poll input.
    pub fn present(&mut self) -> Result<(), RenderError> {
        let (w, h) = (self.frame.width() as usize, self.frame.height() as usize);
        if w == 0 || h == 0 {
            // Minimised; keep the event loop alive
            self.window.update();
            return Ok(());
        }
        self.frame.write_argb(&mut self.buffer);
        self.window.update_with_buffer(&self.buffer, w, h)?;
        Ok(())
    }
}

impl Surface for WindowSurface {
    fn acquire(spec: &SurfaceSpec) -> Result<Self, RenderError> {
        let frame = Framebuffer::new(spec.width, spec.height)?;
        let window = Window::new(
            &spec.title,
            spec.width as usize,
            spec.height as usize,
            WindowOptions {
                resize: true,
                scale: minifb::Scale::X1,
                ..WindowOptions::default()
            },
        )?;
        Ok(Self {
            window,
            frame,
            buffer: Vec::new(),
        })
    }

    fn width(&self) -> u32 {
        self.frame.width()
    }

    fn height(&self) -> u32 {
        self.frame.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.frame.resize(width, height);
    }

    fn clear(&mut self, color: Color) {
        self.frame.clear(color);
    }

    fn set_transform(&mut self, transform: ViewTransform) {
        self.frame.set_transform(transform);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.frame.fill_rect(x, y, width, height, color);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color, dash: Option<f32>) {
        self.frame.stroke_line(from, to, width, color, dash);
    }
}

/// Run the interactive town viewer until the window closes.
pub fn run_viewer(config: &ViewerConfig, locations: &[Location]) -> Result<(), RenderError> {
    let mut generator = WorldGenerator::new(config.generator.clone());
    let world = generator.generate(locations, config.demo.characters);
    let map = config.generator.coord_map();

    let seed = config.demo.seed.unwrap_or_else(rand::random);
    info!(seed, characters = config.demo.characters, "starting demo population");
    let mut town = DemoTown::new(locations, config.demo.characters, seed, config.demo.chat_chance);

    let mut renderer = SceneRenderer::<WindowSurface>::new(&config.render_settings(), Box::new(PixelAssets))?;
    renderer
        .surface_mut()
        .window_mut()
        .set_target_fps(config.window.target_fps);
    let (cx, cy) = world.center();
    renderer.set_camera(cx, cy, Some(config.window.zoom));

    // Clicking a character selects it; clicking it again clears the selection
    let selected: Rc<RefCell<Option<String>>> = Rc::default();
    let handler_selection = Rc::clone(&selected);
    renderer.set_click_handler(move |id| {
        let mut current = handler_selection.borrow_mut();
        *current = if current.as_deref() == Some(id) {
            None
        } else {
            Some(id.to_string())
        };
    });

    let mut composed_for: Option<(u64, Option<String>)> = None;
    let mut paused = false;
    let mut was_down = false;
    let mut frames: u32 = 0;
    renderer.start();

    while renderer.surface().window().is_open() && !renderer.surface().window().is_key_down(Key::Escape) {
        let window = renderer.surface().window();
        let (w, h) = window.get_size();
        let pause_pressed = window.is_key_pressed(Key::Space, KeyRepeat::No);
        let recentre_pressed = window.is_key_pressed(Key::C, KeyRepeat::No);
        let mouse = window.get_mouse_pos(MouseMode::Discard);
        let down = window.get_mouse_down(MouseButton::Left);
        let scroll = window.get_scroll_wheel();
        renderer.set_size(w as u32, h as u32);

        if pause_pressed {
            paused = !paused;
            info!(paused, "demo toggled");
        }

        match mouse {
            Some((mx, my)) => {
                if down && !was_down {
                    renderer.pointer_down(mx, my);
                } else if down {
                    renderer.pointer_move(mx, my);
                } else if was_down {
                    renderer.pointer_up(mx, my);
                }
                if let Some((_, dy)) = scroll {
                    // minifb reports scrolling away from the user as positive
                    if dy != 0.0 {
                        renderer.wheel(mx, my, -dy);
                    }
                }
                was_down = down;
            }
            None => {
                if was_down {
                    renderer.pointer_leave();
                }
                was_down = false;
            }
        }

        if !paused {
            frames += 1;
            if frames >= config.demo.frames_per_tick.max(1) {
                frames = 0;
                town.step();
            }
        }

        let selection = selected.borrow().clone();
        if recentre_pressed {
            let target = selection
                .as_deref()
                .and_then(|id| town.characters().iter().find(|c| c.id == id))
                .map(|c| map.sim_to_world(c.x, c.y))
                .unwrap_or_else(|| world.center());
            renderer.center_on(target.0, target.1);
        }

        let key = (town.tick(), selection);
        if composed_for.as_ref() != Some(&key) {
            debug!(tick = key.0, selected = ?key.1, "recomposing scene");
            renderer.set_sprites(compose(
                &world,
                town.characters(),
                key.1.as_deref(),
                town.messages(),
                town.tick(),
                &map,
            ));
            composed_for = Some(key);
        }

        renderer.tick();
        renderer.surface_mut().present()?;
    }

    renderer.destroy();
    info!("viewer closed");
    Ok(())
}
