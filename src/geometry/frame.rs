use ilattice::glam::DVec3;

/// The inverse of an affine frame `[x_axis y_axis z_axis | origin]`.
///
/// Maps world points into frame coordinates, i.e. it is the inverse of the
/// 4x4 matrix
///
/// ```text
/// | x.x  y.x  z.x  o.x |
/// | x.y  y.y  z.y  o.y |
/// | x.z  y.z  z.z  o.z |
/// |  0    0    0    1  |
/// ```
///
/// applied to homogeneous points. The axes need not be orthogonal or unit
/// length, so the linear part is inverted through its adjugate rather than by
/// transposition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalFrame {
    origin: DVec3,
    /// Rows of the inverse of the 3x3 matrix whose columns are the axes.
    inverse_rows: [DVec3; 3],
}

impl LocalFrame {
    /// Returns `None` if the axes are linearly dependent (or not finite).
    pub fn new(origin: DVec3, x_axis: DVec3, y_axis: DVec3, z_axis: DVec3) -> Option<Self> {
        let yz = y_axis.cross(z_axis);
        let det = x_axis.dot(yz);
        if !det.is_normal() {
            return None;
        }
        let inv_det = det.recip();

        Some(Self {
            origin,
            inverse_rows: [
                yz * inv_det,
                z_axis.cross(x_axis) * inv_det,
                x_axis.cross(y_axis) * inv_det,
            ],
        })
    }

    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Coordinates of `point` in this frame.
    #[inline]
    pub fn to_local(&self, point: DVec3) -> DVec3 {
        let d = point - self.origin;
        let [r0, r1, r2] = self.inverse_rows;
        DVec3::new(r0.dot(d), r1.dot(d), r2.dot(d))
    }

    /// Whether `point` lies on the frame's unit square: local x and y in
    /// `[0, 1]` and local z at `0`, each within `epsilon`.
    #[inline]
    pub fn unit_square_contains(&self, point: DVec3, epsilon: f64) -> bool {
        let local = self.to_local(point);
        (-epsilon..=1.0 + epsilon).contains(&local.x)
            && (-epsilon..=1.0 + epsilon).contains(&local.y)
            && local.z.abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: DVec3, b: DVec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn maps_axes_to_unit_vectors() {
        let origin = DVec3::new(3.0, -2.0, 5.0);
        let x = DVec3::new(0.0, 4.0, 0.0);
        let y = DVec3::new(-2.0, 0.0, 0.0);
        let z = x.cross(y);
        let frame = LocalFrame::new(origin, x, y, z).unwrap();

        assert_vec_eq(frame.to_local(origin), DVec3::ZERO);
        assert_vec_eq(frame.to_local(origin + x), DVec3::X);
        assert_vec_eq(frame.to_local(origin + y), DVec3::Y);
        assert_vec_eq(frame.to_local(origin + z), DVec3::Z);
        assert_vec_eq(frame.to_local(origin + 0.5 * x + 0.25 * y), DVec3::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn inverts_skewed_axes() {
        let origin = DVec3::new(1.0, 1.0, 1.0);
        let x = DVec3::new(1.0, 1.0, 0.0);
        let y = DVec3::new(0.0, 2.0, 1.0);
        let z = DVec3::new(1.0, 0.0, 3.0);
        let frame = LocalFrame::new(origin, x, y, z).unwrap();

        let local = DVec3::new(0.3, -1.5, 2.0);
        let world = origin + local.x * x + local.y * y + local.z * z;
        assert_vec_eq(frame.to_local(world), local);
    }

    #[test]
    fn rejects_dependent_axes() {
        let x = DVec3::new(1.0, 0.0, 0.0);
        assert!(LocalFrame::new(DVec3::ZERO, x, 2.0 * x, DVec3::Z).is_none());
        assert!(LocalFrame::new(DVec3::ZERO, x, DVec3::Y, DVec3::ZERO).is_none());
    }

    #[test]
    fn unit_square_boundary_is_inclusive() {
        let frame = LocalFrame::new(DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z).unwrap();

        assert!(frame.unit_square_contains(DVec3::new(1.0, 1.0, 0.0), 1e-6));
        assert!(frame.unit_square_contains(DVec3::new(-1e-9, 1.0 + 1e-9, 1e-9), 1e-6));
        assert!(!frame.unit_square_contains(DVec3::new(1.01, 0.5, 0.0), 1e-6));
        assert!(!frame.unit_square_contains(DVec3::new(0.5, 0.5, 0.01), 1e-6));
    }
}
