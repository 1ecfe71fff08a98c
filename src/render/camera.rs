//! Pan/zoom camera.

use crate::coords::{TILE_WORLD_PX, WORLD_TILES};
use crate::sprite::Rect;
use crate::surface::ViewTransform;

/// Closest zoom-out allowed.
pub const MIN_ZOOM: f32 = 0.5;

/// Closest zoom-in allowed.
pub const MAX_ZOOM: f32 = 3.0;

/// World point at the centre of the view, plus a magnification.
///
/// `zoom` is private so every update goes through the clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    zoom: f32,
}

impl Default for Camera {
    /// Centre of the stock world at zoom 1.
    fn default() -> Self {
        let half = WORLD_TILES as f32 * TILE_WORLD_PX / 2.0;
        Self::new(half, half, 1.0)
    }
}

impl Camera {
    pub fn new(x: f32, y: f32, zoom: f32) -> Self {
        let mut camera = Self { x, y, zoom: 1.0 };
        camera.set_zoom(zoom);
        camera
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn look_at(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Place the camera as if dragged by `(dx, dy)` screen pixels from `origin`.
    pub fn pan_from(&mut self, origin: (f32, f32), dx: f32, dy: f32) {
        self.x = origin.0 - dx / self.zoom;
        self.y = origin.1 - dy / self.zoom;
    }

    pub fn screen_to_world(&self, sx: f32, sy: f32, view_w: f32, view_h: f32) -> (f32, f32) {
        (
            (sx - view_w / 2.0) / self.zoom + self.x,
            (sy - view_h / 2.0) / self.zoom + self.y,
        )
    }

    pub fn world_to_screen(&self, wx: f32, wy: f32, view_w: f32, view_h: f32) -> (f32, f32) {
        (
            (wx - self.x) * self.zoom + view_w / 2.0,
            (wy - self.y) * self.zoom + view_h / 2.0,
        )
    }

    /// Multiply the zoom by `factor`, keeping the world point under
    /// `(sx, sy)` fixed on screen.
    pub fn zoom_at(&mut self, sx: f32, sy: f32, factor: f32, view_w: f32, view_h: f32) {
        let before = self.screen_to_world(sx, sy, view_w, view_h);
        self.set_zoom(self.zoom * factor);
        let after = self.screen_to_world(sx, sy, view_w, view_h);
        self.x += before.0 - after.0;
        self.y += before.1 - after.1;
    }

    /// Transform handed to the surface: translate to centre, scale, then
    /// translate by the negated camera position.
    pub fn view_transform(&self, view_w: f32, view_h: f32) -> ViewTransform {
        ViewTransform {
            scale: self.zoom,
            tx: view_w / 2.0 - self.x * self.zoom,
            ty: view_h / 2.0 - self.y * self.zoom,
        }
    }

    /// World rectangle currently on screen.
    pub fn visible_rect(&self, view_w: f32, view_h: f32) -> Rect {
        let w = view_w / self.zoom;
        let h = view_h / self.zoom;
        Rect::new(self.x - w / 2.0, self.y - h / 2.0, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn test_default_is_world_centre() {
        let camera = Camera::default();
        assert_eq!((camera.x, camera.y, camera.zoom()), (1280.0, 1280.0, 1.0));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new(0.0, 0.0, 10.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
        camera.set_zoom(0.01);
        assert_eq!(camera.zoom(), MIN_ZOOM);
        camera.set_zoom(f32::NAN);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_screen_world_round_trip() {
        let camera = Camera::new(300.0, 200.0, 2.0);
        let world = camera.screen_to_world(10.0, 470.0, 800.0, 600.0);
        assert!(approx(world, (300.0 - 195.0, 200.0 + 85.0)));
        assert!(approx(camera.world_to_screen(world.0, world.1, 800.0, 600.0), (10.0, 470.0)));

        // The transform agrees with world_to_screen
        let t = camera.view_transform(800.0, 600.0);
        assert!(approx(t.apply(world.0, world.1), (10.0, 470.0)));
    }

    #[test]
    fn test_zoom_at_keeps_pointer_anchor() {
        let mut camera = Camera::default();
        let before = camera.screen_to_world(100.0, 50.0, 640.0, 480.0);
        camera.zoom_at(100.0, 50.0, 1.1, 640.0, 480.0);
        let after = camera.screen_to_world(100.0, 50.0, 640.0, 480.0);
        assert!(approx(before, after));
        assert!((camera.zoom() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_pan_divides_by_zoom() {
        let mut camera = Camera::new(500.0, 500.0, 2.0);
        camera.pan_from((500.0, 500.0), 40.0, -20.0);
        assert_eq!((camera.x, camera.y), (480.0, 510.0));
    }

    #[test]
    fn test_visible_rect() {
        let camera = Camera::new(1000.0, 800.0, 2.0);
        assert_eq!(camera.visible_rect(400.0, 200.0), Rect::new(900.0, 750.0, 200.0, 100.0));
    }
}
