//! The scene renderer: camera, input and the per-frame draw.

use image::Rgba;
use tracing::{debug, info};

use crate::assets::{paint_sprite, SpriteAssets};
use crate::error::RenderError;
use crate::sprite::Sprite;
use crate::surface::{Color, Surface, SurfaceSpec};

use super::camera::Camera;
use super::clock::{FrameClock, ANIMATION_FRAME_DIVISOR};
use super::input::{PointerState, PointerTracker, Release};

/// Renderer tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub surface: SurfaceSpec,
    /// Pointer travel in screen px (either axis) before a press becomes a drag
    pub drag_threshold: f32,
    /// World px added around the viewport before culling
    pub cull_margin: f32,
    /// Zoom multiplier per wheel step towards the scene
    pub zoom_in_factor: f32,
    /// Zoom multiplier per wheel step away from the scene
    pub zoom_out_factor: f32,
    pub frame_divisor: u32,
    pub background: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            surface: SurfaceSpec::default(),
            drag_threshold: 4.0,
            cull_margin: 64.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            frame_divisor: ANIMATION_FRAME_DIVISOR,
            background: Rgba([0x1a, 0x1a, 0x2e, 255]),
        }
    }
}

/// What one frame did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
}

type ClickHandler = Box<dyn FnMut(&str)>;

/// Draws a sprite list through a camera onto a surface.
///
/// The sprite list is replaced wholesale with [`set_sprites`](Self::set_sprites)
/// and never mutated by the renderer. Paint order is layer ascending, then
/// top edge ascending, stable for ties.
pub struct SceneRenderer<S: Surface> {
    surface: S,
    assets: Box<dyn SpriteAssets>,
    settings: RenderSettings,
    camera: Camera,
    clock: FrameClock,
    pointer: PointerTracker,
    sprites: Vec<Sprite>,
    on_click: Option<ClickHandler>,
    running: bool,
}

impl<S: Surface> SceneRenderer<S> {
    /// Acquire a surface and build an idle renderer.
    pub fn new(settings: &RenderSettings, assets: Box<dyn SpriteAssets>) -> Result<Self, RenderError> {
        let surface = S::acquire(&settings.surface)?;
        info!(
            width = surface.width(),
            height = surface.height(),
            "renderer ready"
        );
        Ok(Self {
            surface,
            assets,
            settings: settings.clone(),
            camera: Camera::default(),
            clock: FrameClock::new(settings.frame_divisor),
            pointer: PointerTracker::new(settings.drag_threshold),
            sprites: Vec::new(),
            on_click: None,
            running: false,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        if width != self.surface.width() || height != self.surface.height() {
            debug!(width, height, "surface resized");
            self.surface.resize(width, height);
        }
    }

    /// Replace the sprite list.
    pub fn set_sprites(&mut self, mut sprites: Vec<Sprite>) {
        sprites.sort_by(|a, b| a.layer.cmp(&b.layer).then(a.y().total_cmp(&b.y())));
        self.sprites = sprites;
    }

    /// Sprites in paint order.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn set_camera(&mut self, x: f32, y: f32, zoom: Option<f32>) {
        self.camera.look_at(x, y);
        if let Some(zoom) = zoom {
            self.camera.set_zoom(zoom);
        }
    }

    pub fn center_on(&mut self, x: f32, y: f32) {
        self.camera.look_at(x, y);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Called with the sprite id whenever a click lands on a clickable sprite.
    pub fn set_click_handler(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    pub fn start(&mut self) {
        if !self.running {
            info!(sprites = self.sprites.len(), "render loop started");
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            info!(frames = self.clock.raw(), "render loop stopped");
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One display refresh: draws a frame only while running.
    pub fn tick(&mut self) -> Option<FrameStats> {
        if self.running {
            Some(self.render_frame())
        } else {
            None
        }
    }

    /// Draw the current sprite list once and advance the clock.
    pub fn render_frame(&mut self) -> FrameStats {
        let (w, h) = self.view_size();
        self.surface.clear(self.settings.background);
        self.surface.set_transform(self.camera.view_transform(w, h));

        let view = self.camera.visible_rect(w, h).expand(self.settings.cull_margin);
        let frame = self.clock.frame();
        let mut stats = FrameStats::default();
        for sprite in &self.sprites {
            if view.intersects(&sprite.bounds) {
                paint_sprite(sprite, &mut self.surface, self.assets.as_ref(), frame);
                stats.drawn += 1;
            } else {
                stats.culled += 1;
            }
        }

        self.clock.advance();
        stats
    }

    /// Stop and hand back the surface. The click handler is dropped.
    pub fn destroy(mut self) -> S {
        self.stop();
        self.on_click = None;
        debug!("renderer destroyed");
        self.surface
    }

    pub fn screen_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        let (w, h) = self.view_size();
        self.camera.screen_to_world(sx, sy, w, h)
    }

    pub fn world_to_screen(&self, wx: f32, wy: f32) -> (f32, f32) {
        let (w, h) = self.view_size();
        self.camera.world_to_screen(wx, wy, w, h)
    }

    /// Topmost clickable sprite under a screen point.
    ///
    /// Walks the paint order backwards, so higher layers and lower-on-screen
    /// sprites win.
    pub fn hit_test(&self, sx: f32, sy: f32) -> Option<&str> {
        let (wx, wy) = self.screen_to_world(sx, sy);
        self.sprites
            .iter()
            .rev()
            .filter(|s| s.bounds.contains(wx, wy))
            .find_map(|s| s.id.as_deref())
    }

    pub fn pointer_down(&mut self, sx: f32, sy: f32) {
        self.pointer.press(sx, sy, (self.camera.x, self.camera.y));
    }

    pub fn pointer_move(&mut self, sx: f32, sy: f32) {
        if let Some(pan) = self.pointer.track(sx, sy) {
            self.camera.pan_from(pan.camera_start, pan.dx, pan.dy);
        }
    }

    /// Finish a gesture. Fires the click handler only if the pointer never
    /// left the drag threshold and a clickable sprite is under it.
    pub fn pointer_up(&mut self, sx: f32, sy: f32) {
        // The release point counts as the last move of the gesture
        self.pointer_move(sx, sy);
        if self.pointer.release() != Release::Click {
            return;
        }
        let Some(id) = self.hit_test(sx, sy).map(str::to_owned) else {
            return;
        };
        debug!(%id, "sprite clicked");
        if let Some(handler) = self.on_click.as_mut() {
            handler(&id);
        }
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer.state()
    }

    /// The pointer left the surface: end the gesture with no click.
    pub fn pointer_leave(&mut self) {
        self.pointer.cancel();
    }

    /// Zoom one step around the pointer. Positive `delta_y` zooms out.
    pub fn wheel(&mut self, sx: f32, sy: f32, delta_y: f32) {
        let factor = if delta_y > 0.0 {
            self.settings.zoom_out_factor
        } else {
            self.settings.zoom_in_factor
        };
        let (w, h) = self.view_size();
        self.camera.zoom_at(sx, sy, factor, w, h);
    }

    fn view_size(&self) -> (f32, f32) {
        (self.surface.width() as f32, self.surface.height() as f32)
    }
}
