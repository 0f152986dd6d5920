//! Texture atlas packing.
//!
//! Every visible quad needs its own `width x height` block of texels. The
//! packer places those blocks into one square atlas whose side is a power of
//! two, starting from a 1x1 atlas and doubling until everything fits.
//!
//! Placement is greedy and deterministic:
//!
//! 1. Footprints are ordered by descending `(height * size + width) * 6 -
//!    priority`, so taller footprints go first, then wider ones, then by
//!    [`FaceType::pack_priority`]. Equal keys keep their input order.
//! 2. Each footprint takes the first free position of a row-major scan (top
//!    row first, left to right within a row).
//! 3. If any footprint finds no position, the whole attempt is thrown away and
//!    the next size is tried from scratch.

mod occupancy;
mod placement;

pub use occupancy::*;
pub use placement::*;

use crate::{AtlasError, FaceType, Quad};

use log::{debug, trace};

/// Largest atlas side the packer will try unless told otherwise.
pub const DEFAULT_MAX_ATLAS_SIZE: u32 = 8192;

/// Hard ceiling on the atlas side; keeps the texel count addressable by `u32`.
pub const ATLAS_SIZE_LIMIT: u32 = 1 << 15;

/// One footprint to be packed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AtlasRect {
    pub width: u32,
    pub height: u32,
    pub face_type: FaceType,
}

impl AtlasRect {
    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Ordering key at a given atlas size. Larger keys are placed first.
    #[inline]
    pub fn pack_key(&self, atlas_size: u32) -> i64 {
        (self.height as i64 * atlas_size as i64 + self.width as i64) * 6
            - self.face_type.pack_priority() as i64
    }
}

impl From<&Quad> for AtlasRect {
    #[inline]
    fn from(quad: &Quad) -> Self {
        Self {
            width: quad.texel_width(),
            height: quad.texel_height(),
            face_type: quad.face_type,
        }
    }
}

/// Scratch space for the packer. Reuse it across calls to avoid reallocating
/// the occupancy grid.
pub struct AtlasBuffer {
    grid: OccupancyGrid,
    order: Vec<usize>,
}

impl Default for AtlasBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtlasBuffer {
    pub fn new() -> Self {
        Self {
            grid: OccupancyGrid::new(0),
            order: Vec::new(),
        }
    }

    pub fn reset(&mut self, atlas_size: u32) {
        self.grid.reset(atlas_size);
        self.order.clear();
    }
}

/// Indices of `rects` in the order they are placed at `atlas_size`.
pub fn pack_order(rects: &[AtlasRect], atlas_size: u32, order: &mut Vec<usize>) {
    order.clear();
    order.extend(0..rects.len());
    // Stable, so equal keys stay in input order.
    order.sort_by(|&a, &b| {
        rects[b]
            .pack_key(atlas_size)
            .cmp(&rects[a].pack_key(atlas_size))
    });
}

/// Packs `rects` into a `atlas_size x atlas_size` atlas, or returns `None` if
/// some footprint finds no free position.
///
/// Placements are returned in input order.
pub fn try_pack_atlas(
    rects: &[AtlasRect],
    atlas_size: u32,
    buffer: &mut AtlasBuffer,
) -> Option<Vec<AtlasPlacement>> {
    let capacity = atlas_size as u64 * atlas_size as u64;
    let total_area: u64 = rects.iter().map(AtlasRect::area).sum();
    if total_area > capacity {
        return None;
    }

    buffer.reset(atlas_size);
    let AtlasBuffer { grid, order } = buffer;
    pack_order(rects, atlas_size, order);

    let mut placements = vec![
        AtlasPlacement {
            position: [0, 0],
            size: [0, 0],
        };
        rects.len()
    ];
    for &i in order.iter() {
        let rect = &rects[i];
        let [x, y] = grid.first_fit(rect.width, rect.height)?;
        grid.fill(x, y, rect.width, rect.height);
        trace!(
            "placed {}x{} {:?} footprint {i} at ({x}, {y})",
            rect.width,
            rect.height,
            rect.face_type
        );
        placements[i] = AtlasPlacement {
            position: [x, y],
            size: [rect.width, rect.height],
        };
    }

    Some(placements)
}

/// Packs `rects` into the smallest power-of-two atlas (starting from 1 and
/// doubling) in which the greedy scan succeeds.
///
/// Fails with [`AtlasError::Exhausted`] if even a `max_size` atlas is not
/// enough. `max_size` is rounded up to a power of two and clamped to
/// [`ATLAS_SIZE_LIMIT`].
pub fn pack_atlas(
    rects: &[AtlasRect],
    max_size: u32,
    buffer: &mut AtlasBuffer,
) -> Result<AtlasLayout, AtlasError> {
    let max_size = normalize_atlas_size(max_size);
    let mut size = 1;
    loop {
        if let Some(placements) = try_pack_atlas(rects, size, buffer) {
            let layout = AtlasLayout { size, placements };
            debug_assert!(layout.fits() && layout.is_disjoint());
            debug!(
                "packed {} footprints into a {size}x{size} atlas ({} of {} texels used)",
                rects.len(),
                layout.used_area(),
                size as u64 * size as u64
            );
            return Ok(layout);
        }
        debug!("{} footprints do not fit a {size}x{size} atlas", rects.len());

        if size >= max_size {
            return Err(AtlasError::Exhausted {
                max_size,
                rect_count: rects.len(),
            });
        }
        size *= 2;
    }
}

/// Rounds `size` up to a power of two in `1..=ATLAS_SIZE_LIMIT`.
pub fn normalize_atlas_size(size: u32) -> u32 {
    size.clamp(1, ATLAS_SIZE_LIMIT).next_power_of_two()
}
