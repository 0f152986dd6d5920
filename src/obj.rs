//! Wavefront OBJ / MTL output.
//!
//! Every quad contributes four vertices, four normals and four UVs, written in
//! the corner order of [`Quad::mesh_corners`]. All positions come first, then
//! all normals, then all UVs, then one face per quad. Quad `i` (0-based)
//! therefore owns indices `4i + 1 ..= 4i + 4` in every list.

use std::io::{self, Write};

use crate::Quad;

use ilattice::glam::DVec3;

/// Names the mesh file refers to.
#[derive(Clone, Copy, Debug)]
pub struct ObjHeader<'a> {
    /// Group and material name.
    pub name: &'a str,
    /// File name of the material library, relative to the OBJ.
    pub material_library: &'a str,
}

/// Maps a model-space position to mesh space: re-centered on `pivot`, scaled by
/// `1 / resolution` and mirrored in X.
#[inline]
pub fn mesh_position(position: DVec3, pivot: DVec3, resolution: f64) -> DVec3 {
    let p = (position - pivot) / resolution;
    DVec3::new(-p.x, p.y, p.z)
}

/// The quad normal mirrored in X to match [`mesh_position`].
#[inline]
pub fn mesh_normal(quad: &Quad) -> DVec3 {
    let n = quad.normal();
    DVec3::new(-n.x, n.y, n.z)
}

pub fn write_obj<W: Write>(
    out: &mut W,
    header: ObjHeader,
    quads: &[Quad],
    pivot: DVec3,
    resolution: f64,
) -> io::Result<()> {
    writeln!(out, "mtllib {}", header.material_library)?;
    writeln!(out, "g {}", header.name)?;
    writeln!(out, "usemtl {}", header.name)?;

    writeln!(out, "# Vertices")?;
    for quad in quads {
        for (position, _) in quad.mesh_corners() {
            let v = mesh_position(position, pivot, resolution);
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }
    }

    writeln!(out, "# Normals")?;
    for quad in quads {
        let n = mesh_normal(quad);
        for _ in 0..4 {
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
    }

    writeln!(out, "# UVs")?;
    for quad in quads {
        for (_, uv) in quad.mesh_corners() {
            writeln!(out, "vt {} {}", uv.x, uv.y)?;
        }
    }

    writeln!(out, "# Faces")?;
    for i in 0..quads.len() {
        write!(out, "f")?;
        for k in 1..=4 {
            let index = 4 * i + k;
            write!(out, " {index}/{index}/{index}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Writes a single material named `name` using `texture` as its diffuse map.
pub fn write_mtl<W: Write>(out: &mut W, name: &str, texture: &str) -> io::Result<()> {
    writeln!(out, "newmtl {name}")?;
    writeln!(out, "Ka 1 1 1")?;
    writeln!(out, "Kd 1 1 1")?;
    writeln!(out, "Ks 0 0 0")?;
    writeln!(out, "d 1")?;
    writeln!(out, "illum 1")?;
    writeln!(out, "map_Kd {texture}")?;
    Ok(())
}
