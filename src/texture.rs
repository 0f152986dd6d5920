//! Debug texture for the packed atlas.
//!
//! Each quad's footprint is filled with a flat color: a fixed tint per
//! [`FaceType`], scaled by a per-quad brightness so that neighboring islands
//! can be told apart. The colors carry no meaning beyond visual inspection.

use crate::{FaceType, Quad};

use image::{Rgb, RgbImage};

/// Seed used for the brightness RNG unless another one is configured.
pub const DEFAULT_TEXTURE_SEED: u64 = 0x5EED;

/// Source of per-quad brightness factors in `[0.5, 1.0)`.
pub trait BrightnessSource {
    fn next_brightness(&mut self) -> f64;
}

impl BrightnessSource for fastrand::Rng {
    #[inline]
    fn next_brightness(&mut self) -> f64 {
        self.f64() * 0.5 + 0.5
    }
}

/// Always yields the same brightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedBrightness(pub f64);

impl BrightnessSource for FixedBrightness {
    #[inline]
    fn next_brightness(&mut self) -> f64 {
        self.0
    }
}

/// Base RGB tint of a face type, each channel in `[0, 1]`.
pub const fn face_tint(face_type: FaceType) -> [f64; 3] {
    match face_type {
        FaceType::Front => [0.0, 1.0, 0.0],
        FaceType::Back => [0.0, 0.0, 1.0],
        FaceType::Left => [1.0, 1.0, 0.0],
        FaceType::Right => [1.0, 0.0, 0.0],
        FaceType::Top => [1.0, 1.0, 1.0],
        FaceType::Bottom => [1.0, 0.65, 0.0],
    }
}

/// Tint of `face_type` scaled by `brightness`, truncated to 8 bits per
/// channel.
pub fn face_color(face_type: FaceType, brightness: f64) -> Rgb<u8> {
    Rgb(face_tint(face_type).map(|c| (c * brightness * 255.0) as u8))
}

/// Renders a `atlas_size x atlas_size` image with every quad's footprint
/// filled. Texels not covered by any quad are black.
pub fn render_atlas_texture<B: BrightnessSource>(
    quads: &[Quad],
    atlas_size: u32,
    brightness: &mut B,
) -> RgbImage {
    let mut image = RgbImage::new(atlas_size, atlas_size);
    for quad in quads {
        let color = face_color(quad.face_type, brightness.next_brightness());
        let [x0, y0] = quad.atlas_position;
        let [width, height] = quad.texel_size;
        let x1 = x0.saturating_add(width).min(atlas_size);
        let y1 = y0.saturating_add(height).min(atlas_size);
        for y in y0..y1 {
            for x in x0..x1 {
                image.put_pixel(x, y, color);
            }
        }
    }
    image
}
