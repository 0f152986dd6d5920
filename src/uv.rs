use crate::{AtlasLayout, Quad};

use ilattice::glam::DVec2;
use log::trace;

/// UVs of a footprint placed at `position` (top-left texel) with
/// `[width, height]` texels in a `atlas_size x atlas_size` atlas.
///
/// Returns `[origin_uv, edge1_uv, edge2_uv]`. Texture rows grow downward but V
/// grows upward, so the origin (bottom-left) corner sits at the bottom row of
/// the footprint.
#[inline]
pub fn footprint_uvs(position: [u32; 2], texel_size: [u32; 2], atlas_size: u32) -> [DVec2; 3] {
    let factor = 1.0 / atlas_size as f64;
    let [x, y] = position.map(f64::from);
    let [width, height] = texel_size.map(f64::from);
    [
        DVec2::new(x * factor, 1.0 - (y + height) * factor),
        DVec2::new(0.0, height * factor),
        DVec2::new(width * factor, 0.0),
    ]
}

/// Stores each quad's atlas position and derives its UVs.
///
/// `layout.placements` must be in the same order as `quads`.
pub fn apply_atlas_uvs(quads: &mut [Quad], layout: &AtlasLayout) {
    debug_assert_eq!(quads.len(), layout.placements.len());

    for (i, (quad, placement)) in quads.iter_mut().zip(&layout.placements).enumerate() {
        quad.atlas_position = placement.position;
        let [origin_uv, edge1_uv, edge2_uv] =
            footprint_uvs(placement.position, quad.texel_size, layout.size);
        quad.origin_uv = origin_uv;
        quad.edge1_uv = edge1_uv;
        quad.edge2_uv = edge2_uv;
        trace!(
            "quad {i}: atlas {:?} size {:?} uv origin {origin_uv} edge1 {edge1_uv} edge2 {edge2_uv}",
            quad.atlas_position,
            quad.texel_size
        );
    }
}
