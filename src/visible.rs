use crate::{frame_contains_quad, LocalFrame, Quad};

use log::debug;

/// Default tolerance for containment tests, in local (unit square)
/// coordinates.
pub const DEFAULT_CONTAINMENT_EPSILON: f64 = 1e-6;

/// Output of [`visible_quads`]. Can be reused between calls to avoid
/// reallocating.
#[derive(Default)]
pub struct VisibleQuadsBuffer {
    /// Indices of quads not contained by any other quad, in input order.
    pub visible: Vec<usize>,
    /// `(culled, container)` index pairs: `culled` was dropped because it lies
    /// entirely inside `container`.
    pub culled: Vec<(usize, usize)>,

    frames: Vec<Option<LocalFrame>>,
}

impl VisibleQuadsBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.visible.clear();
        self.culled.clear();
        self.frames.clear();
    }

    pub fn num_visible(&self) -> usize {
        self.visible.len()
    }
}

/// Finds the quads that are not completely covered by another quad.
///
/// Quad `a` is dropped if some other quad `b` contains all four corners of `a`
/// in its own plane, which is what happens to the two touching faces between
/// adjacent boxes. Each quad's frame is inverted once; the test itself is
/// quadratic in the number of quads.
pub fn visible_quads(quads: &[Quad], epsilon: f64, output: &mut VisibleQuadsBuffer) {
    output.reset();
    output.frames.extend(quads.iter().map(Quad::local_frame));

    let VisibleQuadsBuffer {
        visible,
        culled,
        frames,
    } = output;

    for (i, quad) in quads.iter().enumerate() {
        let container = frames.iter().enumerate().find_map(|(j, frame)| {
            let frame = frame.as_ref()?;
            (i != j && frame_contains_quad(frame, quad, epsilon)).then_some(j)
        });

        match container {
            Some(j) => {
                debug!("quad {i} is contained by quad {j}");
                culled.push((i, j));
            }
            None => visible.push(i),
        }
    }
}

/// Convenience wrapper around [`visible_quads`] that returns the surviving
/// quads themselves.
pub fn filter_visible_quads(quads: &[Quad], epsilon: f64) -> Vec<Quad> {
    let mut buffer = VisibleQuadsBuffer::new();
    visible_quads(quads, epsilon, &mut buffer);
    buffer.visible.iter().map(|&i| quads[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{box_quads, FaceType, VoxelBox};
    use ilattice::glam::DVec3;

    fn unit_box(x: f64, y: f64, z: f64) -> VoxelBox {
        VoxelBox::new(DVec3::new(x, y, z), DVec3::ONE)
    }

    fn run(boxes: &[VoxelBox]) -> VisibleQuadsBuffer {
        let quads = box_quads(boxes);
        let mut buffer = VisibleQuadsBuffer::new();
        visible_quads(&quads, DEFAULT_CONTAINMENT_EPSILON, &mut buffer);
        buffer
    }

    #[test]
    fn single_box_keeps_every_face() {
        let buffer = run(&[VoxelBox::new(DVec3::new(2.0, -1.0, 0.5), DVec3::new(3.0, 1.0, 2.0))]);
        assert_eq!(buffer.visible, vec![0, 1, 2, 3, 4, 5]);
        assert!(buffer.culled.is_empty());
    }

    #[test]
    fn never_compares_a_quad_with_itself() {
        // A lone quad geometrically contains itself; it must still survive.
        let quad = unit_box(0.0, 0.0, 0.0).quads()[0];
        assert_eq!(filter_visible_quads(&[quad], DEFAULT_CONTAINMENT_EPSILON).len(), 1);
    }

    #[test]
    fn shared_face_is_removed_from_both_boxes() {
        let buffer = run(&[unit_box(0.0, 0.0, 0.0), unit_box(1.0, 0.0, 0.0)]);
        assert_eq!(buffer.num_visible(), 10);

        let right_of_first = FaceType::Right.index();
        let left_of_second = 6 + FaceType::Left.index();
        assert_eq!(
            buffer.culled,
            vec![(right_of_first, left_of_second), (left_of_second, right_of_first)]
        );
    }

    #[test]
    fn separated_boxes_keep_every_face() {
        let buffer = run(&[unit_box(0.0, 0.0, 0.0), unit_box(3.0, 0.0, 0.0)]);
        assert_eq!(buffer.num_visible(), 12);
    }

    #[test]
    fn diagonal_neighbors_keep_every_face() {
        let buffer = run(&[unit_box(0.0, 0.0, 0.0), unit_box(1.0, 1.0, 0.0)]);
        assert_eq!(buffer.num_visible(), 12);
    }

    #[test]
    fn small_box_against_large_box_loses_its_face() {
        // The 1x1 face of the small box lies inside the 4x4 face of the large
        // one; the large face is only partially covered and stays.
        let large = VoxelBox::new(DVec3::ZERO, DVec3::splat(4.0));
        let small = VoxelBox::new(DVec3::new(4.0, 1.0, 1.0), DVec3::ONE);
        let buffer = run(&[large, small]);

        assert_eq!(buffer.num_visible(), 11);
        assert_eq!(
            buffer.culled,
            vec![(6 + FaceType::Left.index(), FaceType::Right.index())]
        );
    }

    #[test]
    fn small_gap_to_large_face_is_not_contact() {
        // The cube's back face is parallel to the slab's front face and
        // 0.005 in front of it.
        let slab = VoxelBox::new(DVec3::ZERO, DVec3::new(100.0, 100.0, 1.0));
        let cube = VoxelBox::new(DVec3::new(10.0, 10.0, -1.005), DVec3::ONE);
        let buffer = run(&[slab, cube]);
        assert_eq!(buffer.num_visible(), 12);
        assert!(buffer.culled.is_empty());
    }

    #[test]
    fn flush_against_large_face_is_contact() {
        let slab = VoxelBox::new(DVec3::ZERO, DVec3::new(100.0, 100.0, 1.0));
        let cube = VoxelBox::new(DVec3::new(10.0, 10.0, -1.0), DVec3::ONE);
        let buffer = run(&[slab, cube]);
        assert_eq!(
            buffer.culled,
            vec![(6 + FaceType::Back.index(), FaceType::Front.index())]
        );
    }

    #[test]
    fn visible_order_follows_input() {
        let buffer = run(&[unit_box(0.0, 0.0, 0.0), unit_box(0.0, 1.0, 0.0), unit_box(0.0, 2.0, 0.0)]);
        assert_eq!(buffer.num_visible(), 18 - 4);
        assert!(buffer.visible.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn buffer_is_reusable() {
        let mut buffer = VisibleQuadsBuffer::new();
        let quads = box_quads(&[unit_box(0.0, 0.0, 0.0), unit_box(1.0, 0.0, 0.0)]);
        visible_quads(&quads, DEFAULT_CONTAINMENT_EPSILON, &mut buffer);
        visible_quads(&quads[..6], DEFAULT_CONTAINMENT_EPSILON, &mut buffer);
        assert_eq!(buffer.num_visible(), 6);
        assert!(buffer.culled.is_empty());
    }
}
