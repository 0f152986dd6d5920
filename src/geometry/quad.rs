use crate::{FaceType, LocalFrame};

use ilattice::glam::{DVec2, DVec3};

/// A planar rectangle with its texture-mapping attributes.
///
/// The corners are `origin`, `origin + edge1`, `origin + edge1 + edge2` and
/// `origin + edge2`. `atlas_position` is filled in by the packer and the UV
/// fields by [`apply_atlas_uvs`](crate::apply_atlas_uvs); both are zero until
/// then.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub origin: DVec3,
    pub edge1: DVec3,
    pub edge2: DVec3,
    /// `[width, height]` in texels: `width = round(|edge2|)`,
    /// `height = round(|edge1|)`.
    pub texel_size: [u32; 2],
    pub face_type: FaceType,
    pub origin_uv: DVec2,
    pub edge1_uv: DVec2,
    pub edge2_uv: DVec2,
    /// Top-left texel of this quad's footprint in the atlas.
    pub atlas_position: [u32; 2],
}

impl Quad {
    pub fn new(origin: DVec3, edge1: DVec3, edge2: DVec3, face_type: FaceType) -> Self {
        Self {
            origin,
            edge1,
            edge2,
            texel_size: [texel_length(edge2), texel_length(edge1)],
            face_type,
            origin_uv: DVec2::ZERO,
            edge1_uv: DVec2::ZERO,
            edge2_uv: DVec2::ZERO,
            atlas_position: [0, 0],
        }
    }

    #[inline]
    pub fn texel_width(&self) -> u32 {
        self.texel_size[0]
    }

    #[inline]
    pub fn texel_height(&self) -> u32 {
        self.texel_size[1]
    }

    /// Unit normal, `edge1 x edge2` normalized. Zero for a degenerate quad.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.edge1.cross(self.edge2).normalize_or_zero()
    }

    /// Corners in `origin, +edge1, +edge1+edge2, +edge2` order.
    #[inline]
    pub fn corners(&self) -> [DVec3; 4] {
        [
            self.origin,
            self.origin + self.edge1,
            self.origin + self.edge1 + self.edge2,
            self.origin + self.edge2,
        ]
    }

    /// Corner positions paired with their UVs, walking `edge2` first:
    ///
    /// ```text
    ///   3 <------- 2
    ///   ^          ^
    ///   | edge1    |
    ///   |          |
    ///   0 -------> 1
    ///      edge2
    /// ```
    ///
    /// This is the order faces are written to the mesh file.
    #[inline]
    pub fn mesh_corners(&self) -> [(DVec3, DVec2); 4] {
        [
            (self.origin, self.origin_uv),
            (self.origin + self.edge2, self.origin_uv + self.edge2_uv),
            (
                self.origin + self.edge2 + self.edge1,
                self.origin_uv + self.edge2_uv + self.edge1_uv,
            ),
            (self.origin + self.edge1, self.origin_uv + self.edge1_uv),
        ]
    }

    /// Frame with `edge1`, `edge2` and the unit normal as its axes, or `None`
    /// if the quad is degenerate.
    ///
    /// Local z is the signed world distance from the quad's plane.
    #[inline]
    pub fn local_frame(&self) -> Option<LocalFrame> {
        LocalFrame::new(self.origin, self.edge1, self.edge2, self.normal())
    }

    /// Whether every corner of `other` lies inside this quad (boundary
    /// included, within `epsilon` in local coordinates).
    pub fn contains_quad(&self, other: &Quad, epsilon: f64) -> bool {
        self.local_frame()
            .is_some_and(|frame| frame_contains_quad(&frame, other, epsilon))
    }
}

/// Whether every corner of `quad` lies on the unit square of `frame`.
#[inline]
pub fn frame_contains_quad(frame: &LocalFrame, quad: &Quad, epsilon: f64) -> bool {
    quad.corners()
        .into_iter()
        .all(|c| frame.unit_square_contains(c, epsilon))
}

/// Rounds half to even, so a 2.5 long edge covers 2 texels.
#[inline]
fn texel_length(edge: DVec3) -> u32 {
    edge.length().round_ties_even() as u32
}
