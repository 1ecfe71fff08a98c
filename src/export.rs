//! Headless snapshots of a generated town.
//!
//! Renders through the same [`SceneRenderer`] the viewer uses, onto an
//! off-screen [`Framebuffer`] sized to fit the whole world.

use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::assets::{PixelAssets, SpriteAssets};
use crate::error::ExportError;
use crate::render::{RenderSettings, SceneRenderer, MAX_ZOOM, MIN_ZOOM};
use crate::sprite::Sprite;
use crate::surface::{Framebuffer, SurfaceSpec};
use crate::world::WorldData;

/// Render the whole world plus `overlays` into an image.
///
/// `zoom` is clamped like the interactive camera; the image is
/// `world_px * zoom` pixels square.
pub fn render_world_image(
    world: &WorldData,
    overlays: &[Sprite],
    zoom: f32,
    assets: Box<dyn SpriteAssets>,
) -> Result<RgbaImage, ExportError> {
    let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    let edge = (world.world_px * zoom).round() as u32;
    let settings = RenderSettings {
        surface: SurfaceSpec {
            title: "export".to_string(),
            width: edge,
            height: edge,
        },
        ..RenderSettings::default()
    };

    let mut renderer = SceneRenderer::<Framebuffer>::new(&settings, assets)?;
    let (cx, cy) = world.center();
    renderer.set_camera(cx, cy, Some(zoom));
    renderer.set_sprites(world.static_sprites().chain(overlays).cloned().collect());
    let stats = renderer.render_frame();
    info!(edge, drawn = stats.drawn, culled = stats.culled, "world rendered off-screen");

    Ok(renderer.destroy().into_image())
}

/// Render the world with the placeholder art and save it as a PNG.
pub fn export_world_png(world: &WorldData, overlays: &[Sprite], zoom: f32, path: &Path) -> Result<(), ExportError> {
    let image = render_world_image(world, overlays, zoom, Box::new(PixelAssets))?;
    image.save(path)?;
    info!(path = %path.display(), "saved world image");
    Ok(())
}

/// Write the world layout as pretty JSON.
pub fn export_layout_json(world: &WorldData, path: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    let json = serde_json::to_string_pretty(&world.layout).map_err(|e| io_err(e.into()))?;
    std::fs::write(path, json).map_err(io_err)?;
    info!(path = %path.display(), "saved layout json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::RecordingAssets;
    use crate::worldgen::{GenParams, WorldGenerator};

    #[test]
    fn test_whole_world_fits_the_image() {
        let world = WorldGenerator::build(&GenParams::default(), &crate::world::default_locations(), 4);
        let assets = RecordingAssets::default();
        let image = render_world_image(&world, &[], 0.25, Box::new(assets.clone())).unwrap();

        // Zoom clamps to 0.5, so the 2560 px world becomes 1280 px
        assert_eq!(image.dimensions(), (1280, 1280));

        // Every tile of every chunk was painted
        let tiles = assets
            .take()
            .into_iter()
            .filter(|c| matches!(c, crate::assets::testing::DrawCall::Tile { .. }))
            .count();
        assert_eq!(tiles, 6400);
    }

    #[test]
    fn test_placeholder_art_paints_pixels() {
        let world = WorldGenerator::build(&GenParams::default(), &[], 0);
        let image = render_world_image(&world, &[], 0.5, Box::new(PixelAssets)).unwrap();
        // River at row 0 runs through column 55, tile 55 * 32 * 0.5 = 880 px
        let water = image.get_pixel(55 * 16 + 4, 4);
        assert!(water.0[2] > water.0[0], "expected blue water, got {water:?}");
        assert_eq!(water.0[3], 255);
    }
}
