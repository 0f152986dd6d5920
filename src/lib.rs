//! Turn a list of axis-aligned boxes into a textured mesh.
//!
//! The input is a set of [`VoxelBox`]es. The output is a Wavefront OBJ mesh
//! with one quad per visible box face, plus a texture atlas in which every
//! quad owns its own block of texels.
//!
//! The pipeline has four stages:
//! - [`VoxelBox::quads`]: six outward-facing quads per box
//! - [`visible_quads`]: drops quads that lie entirely inside another quad,
//!   which removes the touching faces between neighboring boxes
//! - [`pack_atlas`]: places every quad's texel footprint in the smallest
//!   power-of-two atlas the greedy scan can fill
//! - [`apply_atlas_uvs`]: turns atlas placements into UV coordinates
//!
//! [`Mesher`] runs all of them and writes the OBJ, MTL and PNG files.
//!
//! # Example Code
//!
//! ```
//! use voxel_mesher::ilattice::glam::DVec3;
//! use voxel_mesher::{
//!     apply_atlas_uvs, box_quads, pack_atlas, visible_quads, AtlasBuffer, AtlasRect,
//!     VisibleQuadsBuffer, VoxelBox, DEFAULT_CONTAINMENT_EPSILON, DEFAULT_MAX_ATLAS_SIZE,
//! };
//!
//! // Two unit cubes side by side.
//! let boxes = [
//!     VoxelBox::new(DVec3::ZERO, DVec3::ONE),
//!     VoxelBox::new(DVec3::X, DVec3::ONE),
//! ];
//! let quads = box_quads(&boxes);
//! assert_eq!(quads.len(), 12);
//!
//! let mut visible = VisibleQuadsBuffer::new();
//! visible_quads(&quads, DEFAULT_CONTAINMENT_EPSILON, &mut visible);
//! let mut quads: Vec<_> = visible.visible.iter().map(|&i| quads[i]).collect();
//!
//! // The two touching faces are gone.
//! assert_eq!(quads.len(), 10);
//!
//! let rects: Vec<AtlasRect> = quads.iter().map(AtlasRect::from).collect();
//! let layout = pack_atlas(&rects, DEFAULT_MAX_ATLAS_SIZE, &mut AtlasBuffer::new()).unwrap();
//! assert_eq!(layout.size, 4);
//!
//! apply_atlas_uvs(&mut quads, &layout);
//! assert!(quads.iter().all(|q| q.origin_uv.y >= 0.0));
//! ```

mod atlas;
mod error;
pub mod geometry;
mod input;
mod obj;
mod pipeline;
mod texture;
mod uv;
mod visible;

pub use atlas::*;
pub use error::*;
#[doc(inline)]
pub use geometry::*;
pub use input::*;
pub use obj::*;
pub use pipeline::*;
pub use texture::*;
pub use uv::*;
pub use visible::*;

pub use ilattice;
pub use ndshape;
