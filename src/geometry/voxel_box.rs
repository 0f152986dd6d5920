use crate::{FaceType, Quad};

use ilattice::glam::DVec3;

/// An axis-aligned box given by its minimum corner and its size.
///
/// All components of `size` are expected to be positive. Nothing here checks
/// that; a non-positive component yields degenerate or inverted quads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelBox {
    pub position: DVec3,
    pub size: DVec3,
}

impl VoxelBox {
    #[inline]
    pub const fn new(position: DVec3, size: DVec3) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn center(&self) -> DVec3 {
        self.position + 0.5 * self.size
    }

    /// The eight corners; corner `i` adds `size.x` when bit 0 of `i` is set,
    /// `size.y` for bit 1 and `size.z` for bit 2.
    pub fn corners(&self) -> [DVec3; 8] {
        let DVec3 { x, y, z } = self.position;
        let DVec3 { x: w, y: h, z: d } = self.size;
        [
            DVec3::new(x, y, z),
            DVec3::new(x + w, y, z),
            DVec3::new(x, y + h, z),
            DVec3::new(x + w, y + h, z),
            DVec3::new(x, y, z + d),
            DVec3::new(x + w, y, z + d),
            DVec3::new(x, y + h, z + d),
            DVec3::new(x + w, y + h, z + d),
        ]
    }

    /// The six faces of the box, in [`FaceType::ALL`] order.
    pub fn quads(&self) -> [Quad; 6] {
        let corners = self.corners();
        FaceType::ALL.map(|face_type| {
            let [o, a, b] = face_type.corner_indices().map(|i| corners[i]);
            Quad::new(o, a - o, b - o, face_type)
        })
    }
}

/// All quads of all `boxes`, six per box, in box order.
pub fn box_quads(boxes: &[VoxelBox]) -> Vec<Quad> {
    let mut quads = Vec::with_capacity(6 * boxes.len());
    for b in boxes {
        quads.extend(b.quads());
    }
    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn six_outward_facing_quads() {
        let b = VoxelBox::new(DVec3::new(-3.0, 2.0, 7.5), DVec3::new(2.0, 5.0, 1.0));
        let quads = b.quads();
        assert_eq!(quads.len(), 6);

        for (quad, face_type) in quads.iter().zip(FaceType::ALL) {
            assert_eq!(quad.face_type, face_type);
            assert!(quad.edge1.cross(quad.edge2).length() > 0.0);
            assert!(quad.normal().dot(quad.origin - b.center()) > 0.0);

            let n = quad.normal();
            let expected = face_type.outward_normal();
            assert_abs_diff_eq!(n.x, expected.x);
            assert_abs_diff_eq!(n.y, expected.y);
            assert_abs_diff_eq!(n.z, expected.z);
        }
    }

    #[test]
    fn texel_size_is_edge2_by_edge1() {
        let b = VoxelBox::new(DVec3::ZERO, DVec3::new(2.0, 3.0, 4.0));
        let sizes: Vec<[u32; 2]> = b.quads().iter().map(|q| q.texel_size).collect();

        assert_eq!(
            sizes,
            vec![
                [2, 3], // Front: edge2 = +X, edge1 = +Y
                [2, 3], // Back: edge2 = -X, edge1 = +Y
                [2, 4], // Top: edge2 = +X, edge1 = +Z
                [2, 4], // Bottom: edge2 = +X, edge1 = -Z
                [4, 3], // Left: edge2 = -Z, edge1 = +Y
                [4, 3], // Right: edge2 = +Z, edge1 = +Y
            ]
        );
    }

    #[test]
    fn quads_lie_on_box_surface() {
        let b = VoxelBox::new(DVec3::new(1.0, 1.0, 1.0), DVec3::new(1.0, 2.0, 3.0));
        let min = b.position;
        let max = b.position + b.size;
        for quad in b.quads() {
            for c in quad.corners() {
                assert!(c.cmpge(min).all() && c.cmple(max).all());
            }
        }
    }

    #[test]
    fn box_quads_is_flat_and_ordered() {
        let boxes = [
            VoxelBox::new(DVec3::ZERO, DVec3::ONE),
            VoxelBox::new(DVec3::new(5.0, 0.0, 0.0), DVec3::ONE),
        ];
        let quads = box_quads(&boxes);
        assert_eq!(quads.len(), 12);
        assert_eq!(quads[6].origin, boxes[1].quads()[0].origin);
    }
}
