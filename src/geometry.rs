//! Box and quad geometry.
//!
//! # Boxes and Faces
//!
//! Every input voxel is an axis-aligned [`VoxelBox`] given by its minimum
//! corner and its (strictly positive) size. A box has eight corners, numbered
//! by which of the three size components are added to the position:
//!
//! ```text
//!        6--------7
//!      / |      / |          +Y
//!    2--------3   |           |
//!    |   |    |   |           |
//!    |   4----|---5           O-----> +X
//!    | /      | /            /
//!    0--------1            +Z
//!
//! Fig 1: corner i = position + size * (i & 1, (i >> 1) & 1, (i >> 2) & 1)
//! ```
//!
//! Each of the six faces is described by three of those corners (see
//! [`FaceType::corner_indices`]). The first corner becomes the quad's
//! **origin**, and the other two give the two **edges** relative to it:
//!
//! ```text
//!     origin + edge1 ------ origin + edge1 + edge2
//!          ^                       |
//!    edge1 |                       |
//!          |                       |
//!        origin ---------> origin + edge2
//!                 edge2
//!
//! Fig 2: A quad. The normal is edge1 x edge2 and always points out of the box.
//! ```
//!
//! # Texel Footprint
//!
//! A quad covers `round(|edge2|) x round(|edge1|)` texels of the atlas,
//! rounding half to even: the **width** comes from `edge2` and the **height**
//! from `edge1`. This matches the UV assignment, where `edge1` runs along V
//! and `edge2` runs along U.
//!
//! # Local Frames
//!
//! Occlusion testing expresses points in a quad's own coordinate system, where
//! `edge1` is the unit X axis, `edge2` the unit Y axis and the unit normal the
//! Z axis, so local Z is a distance from the quad's plane. See [`LocalFrame`].

mod face;
mod frame;
mod quad;
mod voxel_box;

pub use face::*;
pub use frame::*;
pub use quad::*;
pub use voxel_box::*;

pub use ilattice::glam::{DVec2, DVec3};
