use ilattice::glam::DVec3;

/// Which side of its box a quad was generated from.
///
/// Only used to order atlas packing and to tint the debug texture; the
/// geometry of a quad never depends on it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum FaceType {
    /// Faces -Z.
    Front = 0,
    /// Faces +Z.
    Back = 1,
    /// Faces +Y.
    Top = 2,
    /// Faces -Y.
    Bottom = 3,
    /// Faces -X.
    Left = 4,
    /// Faces +X.
    Right = 5,
}

impl FaceType {
    /// All faces, in the order [`VoxelBox::quads`](crate::VoxelBox::quads)
    /// emits them.
    pub const ALL: [FaceType; 6] = [
        FaceType::Front,
        FaceType::Back,
        FaceType::Top,
        FaceType::Bottom,
        FaceType::Left,
        FaceType::Right,
    ];

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Box corner indices `[origin, origin + edge1, origin + edge2]` for this
    /// face.
    ///
    /// The triples are wound so that `edge1 x edge2` points away from the box
    /// center.
    #[inline]
    pub const fn corner_indices(&self) -> [usize; 3] {
        match self {
            FaceType::Front => [0, 2, 1],
            FaceType::Back => [5, 7, 4],
            FaceType::Top => [2, 6, 3],
            FaceType::Bottom => [4, 0, 5],
            FaceType::Left => [4, 6, 0],
            FaceType::Right => [1, 3, 5],
        }
    }

    /// Unit outward normal of this face on any box.
    #[inline]
    pub fn outward_normal(&self) -> DVec3 {
        match self {
            FaceType::Front => -DVec3::Z,
            FaceType::Back => DVec3::Z,
            FaceType::Top => DVec3::Y,
            FaceType::Bottom => -DVec3::Y,
            FaceType::Left => -DVec3::X,
            FaceType::Right => DVec3::X,
        }
    }

    /// Tie-break rank used by the atlas packer. Lower ranks are placed first
    /// among footprints of equal size.
    #[inline]
    pub const fn pack_priority(&self) -> u8 {
        match self {
            FaceType::Front => 0,
            FaceType::Back => 1,
            FaceType::Left => 2,
            FaceType::Right => 3,
            FaceType::Top => 4,
            FaceType::Bottom => 5,
        }
    }
}
