//! Drawing surfaces.
//!
//! A [`Surface`] is the raster target the renderer paints on. It exposes a
//! handful of primitives in world space; the current [`ViewTransform`] maps
//! them to surface pixels. [`Framebuffer`] is the software implementation
//! backed by an `image::RgbaImage`, shared by the window host and the PNG
//! exporter.

use image::{Rgba, RgbaImage};

use crate::error::RenderError;

/// RGBA colour used by every drawing primitive.
pub type Color = Rgba<u8>;

/// Largest surface edge we are willing to allocate.
pub const MAX_SURFACE_EDGE: u32 = 16_384;

/// Affine world-to-surface transform: `screen = world * scale + (tx, ty)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub tx: f32,
    pub ty: f32,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale + self.tx, y * self.scale + self.ty)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What to ask for when acquiring a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self {
            title: "Pixel Town".to_string(),
            width: 960,
            height: 640,
        }
    }
}

/// A raster target the renderer can paint on.
pub trait Surface {
    /// Acquire a surface. Failing here fails renderer construction.
    fn acquire(spec: &SurfaceSpec) -> Result<Self, RenderError>
    where
        Self: Sized;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Resize the pixel area. Never fails; a zero-sized surface draws nothing.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the whole surface, ignoring the transform.
    fn clear(&mut self, color: Color);

    fn set_transform(&mut self, transform: ViewTransform);

    /// Fill a world-space rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Stroke a world-space segment. `dash` is the on/off length in world px.
    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
        dash: Option<f32>,
    );
}

/// Software surface backed by an RGBA image.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    image: RgbaImage,
    transform: ViewTransform,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || width > MAX_SURFACE_EDGE || height > MAX_SURFACE_EDGE {
            return Err(RenderError::SurfaceUnavailable { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
            transform: ViewTransform::IDENTITY,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.image.width() && y < self.image.height() {
            Some(*self.image.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Copy pixels into a `0RGB` buffer as expected by minifb.
    pub fn write_argb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.image.pixels().map(|p| {
            let [r, g, b, _] = p.0;
            (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        }));
    }

    /// Fill an already-transformed rectangle, clipped to the surface.
    fn fill_screen(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let w = self.image.width() as f32;
        let h = self.image.height() as f32;
        let left = x0.round().clamp(0.0, w) as u32;
        let right = x1.round().clamp(0.0, w) as u32;
        let top = y0.round().clamp(0.0, h) as u32;
        let bottom = y1.round().clamp(0.0, h) as u32;

        for py in top..bottom {
            for px in left..right {
                blend(self.image.get_pixel_mut(px, py), color);
            }
        }
    }
}

impl Surface for Framebuffer {
    fn acquire(spec: &SurfaceSpec) -> Result<Self, RenderError> {
        Framebuffer::new(spec.width, spec.height)
    }

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        let width = width.min(MAX_SURFACE_EDGE);
        let height = height.min(MAX_SURFACE_EDGE);
        if width != self.image.width() || height != self.image.height() {
            self.image = RgbaImage::new(width, height);
        }
    }

    fn clear(&mut self, color: Color) {
        for p in self.image.pixels_mut() {
            *p = color;
        }
    }

    fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let (x0, y0) = self.transform.apply(x, y);
        let (x1, y1) = self.transform.apply(x + width, y + height);
        self.fill_screen(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1), color);
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
        dash: Option<f32>,
    ) {
        let (x0, y0) = self.transform.apply(from.0, from.1);
        let (x1, y1) = self.transform.apply(to.0, to.1);
        let thickness = (width * self.transform.scale).max(1.0);
        let half = thickness / 2.0;
        let dash_px = dash.map(|d| (d * self.transform.scale).max(1.0));

        // Walk the segment one pixel at a time, stamping a square brush
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            if let Some(dash_px) = dash_px {
                if (i as f32 / dash_px) as u32 % 2 == 1 {
                    continue;
                }
            }
            let t = i as f32 / steps as f32;
            let px = x0 + (x1 - x0) * t;
            let py = y0 + (y1 - y0) * t;
            self.fill_screen(px - half, py - half, px + half, py + half, color);
        }
    }
}

/// Source-over alpha blend of `src` onto `dst`.
fn blend(dst: &mut Color, src: Color) {
    let alpha = src.0[3];
    if alpha == 255 {
        *dst = src;
        return;
    }
    if alpha == 0 {
        return;
    }
    let a = f32::from(alpha) / 255.0;
    for c in 0..3 {
        let mixed = f32::from(src.0[c]) * a + f32::from(dst.0[c]) * (1.0 - a);
        dst.0[c] = mixed.round() as u8;
    }
    let out_alpha = f32::from(alpha) + f32::from(dst.0[3]) * (1.0 - a);
    dst.0[3] = out_alpha.round().min(255.0) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_zero_sized_surface_is_unavailable() {
        assert!(matches!(
            Framebuffer::new(0, 10),
            Err(RenderError::SurfaceUnavailable { width: 0, height: 10 })
        ));
        assert!(Framebuffer::acquire(&SurfaceSpec { width: 4, height: 4, ..Default::default() }).is_ok());
    }

    #[test]
    fn test_fill_rect_respects_transform() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.set_transform(ViewTransform { scale: 2.0, tx: 1.0, ty: 1.0 });
        fb.fill_rect(0.0, 0.0, 2.0, 2.0, RED);

        // World (0,0)-(2,2) covers surface (1,1)-(5,5)
        assert_eq!(fb.pixel(1, 1), Some(RED));
        assert_eq!(fb.pixel(4, 4), Some(RED));
        assert_eq!(fb.pixel(5, 5), Some(Rgba([0, 0, 0, 0])));
        assert_eq!(fb.pixel(0, 0), Some(Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_fill_rect_clips_offscreen() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.fill_rect(-100.0, -100.0, 104.0, 104.0, RED);
        assert_eq!(fb.pixel(3, 3), Some(RED));
        assert_eq!(fb.pixel(4, 4), Some(Rgba([0, 0, 0, 0])));
        fb.fill_rect(500.0, 500.0, 10.0, 10.0, RED);
    }

    #[test]
    fn test_alpha_blend() {
        let mut fb = Framebuffer::new(2, 2).unwrap();
        fb.clear(Rgba([0, 0, 0, 255]));
        fb.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba([255, 255, 255, 128]));
        let p = fb.pixel(0, 0).unwrap();
        assert!(p.0[0] > 120 && p.0[0] < 135);
        assert_eq!(p.0[3], 255);
    }

    #[test]
    fn test_line_reaches_both_ends() {
        let mut fb = Framebuffer::new(16, 16).unwrap();
        fb.stroke_line((2.0, 2.0), (12.0, 12.0), 1.0, RED, None);
        assert_eq!(fb.pixel(2, 2), Some(RED));
        assert_eq!(fb.pixel(11, 11), Some(RED));
    }

    #[test]
    fn test_write_argb() {
        let mut fb = Framebuffer::new(2, 1).unwrap();
        fb.clear(Rgba([0x12, 0x34, 0x56, 255]));
        let mut out = Vec::new();
        fb.write_argb(&mut out);
        assert_eq!(out, vec![0x123456, 0x123456]);
    }
}
