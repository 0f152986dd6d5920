//! Per-file driver: text in, OBJ + MTL + PNG out.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use crate::{
    apply_atlas_uvs, box_quads, pack_atlas, parse_model, render_atlas_texture, visible_quads,
    write_mtl, write_obj, AtlasBuffer, AtlasError, AtlasRect, MeshError, MeshResult, ObjHeader,
    Quad, VisibleQuadsBuffer, VoxelBox, DEFAULT_CONTAINMENT_EPSILON, DEFAULT_MAX_ATLAS_SIZE,
    DEFAULT_TEXTURE_SEED,
};

use image::ImageFormat;
use log::{debug, info, warn};
use tempfile::NamedTempFile;

/// Knobs for [`build_mesh`] and [`Mesher`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshSettings {
    /// Tolerance of the containment test, in local quad coordinates.
    pub containment_epsilon: f64,
    /// Largest atlas side to try before giving up.
    pub max_atlas_size: u32,
    /// Seed of the texture brightness RNG.
    pub seed: u64,
    /// Whether to write the PNG. The OBJ and MTL always reference it.
    pub write_texture: bool,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            containment_epsilon: DEFAULT_CONTAINMENT_EPSILON,
            max_atlas_size: DEFAULT_MAX_ATLAS_SIZE,
            seed: DEFAULT_TEXTURE_SEED,
            write_texture: true,
        }
    }
}

/// Visible quads with their atlas placement and UVs.
#[derive(Clone, Debug)]
pub struct AtlasMesh {
    pub quads: Vec<Quad>,
    pub atlas_size: u32,
    /// Number of quads dropped because another quad covers them.
    pub culled: usize,
}

/// Runs boxes -> quads -> visible quads -> atlas -> UVs.
pub fn build_mesh(boxes: &[VoxelBox], settings: &MeshSettings) -> Result<AtlasMesh, AtlasError> {
    Mesher::new(*settings).build(boxes)
}

/// Converts models one after another, reusing its scratch buffers.
pub struct Mesher {
    pub settings: MeshSettings,
    visible: VisibleQuadsBuffer,
    atlas: AtlasBuffer,
}

impl Mesher {
    pub fn new(settings: MeshSettings) -> Self {
        Self {
            settings,
            visible: VisibleQuadsBuffer::new(),
            atlas: AtlasBuffer::new(),
        }
    }

    /// Runs boxes -> quads -> visible quads -> atlas -> UVs.
    pub fn build(&mut self, boxes: &[VoxelBox]) -> Result<AtlasMesh, AtlasError> {
        let all_quads = box_quads(boxes);
        visible_quads(&all_quads, self.settings.containment_epsilon, &mut self.visible);
        let mut quads: Vec<Quad> = self.visible.visible.iter().map(|&i| all_quads[i]).collect();
        let culled = self.visible.culled.len();

        let rects: Vec<AtlasRect> = quads.iter().map(AtlasRect::from).collect();
        let layout = pack_atlas(&rects, self.settings.max_atlas_size, &mut self.atlas)?;
        apply_atlas_uvs(&mut quads, &layout);

        Ok(AtlasMesh {
            quads,
            atlas_size: layout.size,
            culled,
        })
    }

    /// Converts the input file at `input` and writes `<stem>.obj`,
    /// `<stem>.mtl` and `<stem>.png` into `output_dir`.
    pub fn process_file(&mut self, input: &Path, output_dir: &Path) -> MeshResult<OutputPaths> {
        let name = input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| MeshError::InvalidFileName {
                path: input.to_path_buf(),
            })?;
        info!("Processing {}", input.display());
        let text = fs::read_to_string(input)?;
        self.process_source(&text, name, output_dir)
    }

    /// Same as [`Mesher::process_file`], with the input text already in
    /// memory.
    ///
    /// All outputs are encoded in memory and staged as temporary files in
    /// `output_dir` before any of them is moved into place. On failure no
    /// output file of this run is left behind.
    pub fn process_source(
        &mut self,
        text: &str,
        name: &str,
        output_dir: &Path,
    ) -> MeshResult<OutputPaths> {
        let model = parse_model(text)?;
        let mesh = self.build(&model.boxes)?;
        info!(
            "{name}: {} boxes, {} visible quads ({} culled), {}x{} atlas",
            model.boxes.len(),
            mesh.quads.len(),
            mesh.culled,
            mesh.atlas_size,
            mesh.atlas_size
        );

        let paths = OutputPaths::new(output_dir, name);
        let mtl_name = format!("{name}.mtl");
        let texture_name = format!("{name}.png");

        let mut obj = Vec::new();
        write_obj(
            &mut obj,
            ObjHeader {
                name,
                material_library: &mtl_name,
            },
            &mesh.quads,
            model.pivot,
            model.resolution,
        )?;
        let mut mtl = Vec::new();
        write_mtl(&mut mtl, name, &texture_name)?;

        let mut png = Vec::new();
        if self.settings.write_texture {
            let mut rng = fastrand::Rng::with_seed(self.settings.seed);
            let texture = render_atlas_texture(&mesh.quads, mesh.atlas_size, &mut rng);
            texture.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        }

        let mut outputs = Vec::with_capacity(3);
        if self.settings.write_texture {
            outputs.push((paths.texture.as_path(), png.as_slice()));
        }
        outputs.push((paths.mtl.as_path(), mtl.as_slice()));
        outputs.push((paths.obj.as_path(), obj.as_slice()));
        write_outputs(output_dir, &outputs)?;
        info!("wrote {}", paths.obj.display());

        Ok(paths)
    }
}

/// Writes every `(path, bytes)` pair, or none of them.
///
/// Files are first written to temporary names in `output_dir`, then renamed.
/// If a rename fails, the files already renamed by this call are removed.
fn write_outputs(output_dir: &Path, outputs: &[(&Path, &[u8])]) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    let mut staged = Vec::with_capacity(outputs.len());
    for &(path, bytes) in outputs {
        let mut file = NamedTempFile::new_in(output_dir)?;
        file.write_all(bytes)?;
        staged.push((file, path));
    }

    let mut persisted: Vec<&Path> = Vec::with_capacity(staged.len());
    for (file, path) in staged {
        if let Err(err) = file.persist(path) {
            for done in persisted {
                if let Err(e) = fs::remove_file(done) {
                    warn!("could not remove {}: {e}", done.display());
                }
            }
            return Err(err.error);
        }
        debug!("wrote {}", path.display());
        persisted.push(path);
    }
    Ok(())
}

/// Files produced for one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub obj: PathBuf,
    pub mtl: PathBuf,
    pub texture: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, name: &str) -> Self {
        Self {
            obj: output_dir.join(format!("{name}.obj")),
            mtl: output_dir.join(format!("{name}.mtl")),
            texture: output_dir.join(format!("{name}.png")),
        }
    }
}

/// Regular files matching the glob `pattern`, in the order `glob` yields them.
pub fn find_input_files(pattern: &str) -> MeshResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(MeshError::NoInputFiles {
            pattern: pattern.to_string(),
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilattice::glam::DVec3;

    #[test]
    fn adjacent_cubes_share_no_faces() {
        let boxes = [
            VoxelBox::new(DVec3::ZERO, DVec3::ONE),
            VoxelBox::new(DVec3::X, DVec3::ONE),
        ];
        let mesh = build_mesh(&boxes, &MeshSettings::default()).unwrap();
        assert_eq!(mesh.quads.len(), 10);
        assert_eq!(mesh.culled, 2);
        assert_eq!(mesh.atlas_size, 4);
    }

    #[test]
    fn uvs_stay_inside_unit_square() {
        let boxes = [
            VoxelBox::new(DVec3::ZERO, DVec3::new(4.0, 2.0, 3.0)),
            VoxelBox::new(DVec3::new(4.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 1.0)),
        ];
        let mesh = build_mesh(&boxes, &MeshSettings::default()).unwrap();
        for quad in &mesh.quads {
            for (_, uv) in quad.mesh_corners() {
                assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
            }
        }
    }

    #[test]
    fn cap_too_small_is_an_error() {
        let boxes = [VoxelBox::new(DVec3::ZERO, DVec3::splat(10.0))];
        let settings = MeshSettings {
            max_atlas_size: 8,
            ..MeshSettings::default()
        };
        assert!(matches!(
            build_mesh(&boxes, &settings),
            Err(AtlasError::Exhausted { max_size: 8, .. })
        ));
    }

    #[test]
    fn output_paths_share_stem() {
        let paths = OutputPaths::new(Path::new("out"), "chair");
        assert_eq!(paths.obj, Path::new("out/chair.obj"));
        assert_eq!(paths.mtl, Path::new("out/chair.mtl"));
        assert_eq!(paths.texture, Path::new("out/chair.png"));

        let dotted = OutputPaths::new(Path::new("out"), "chair.v2");
        assert_eq!(dotted.obj, Path::new("out/chair.v2.obj"));
    }
}
