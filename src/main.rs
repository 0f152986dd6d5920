use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use voxel_mesher::{
    find_input_files, MeshResult, MeshSettings, Mesher, DEFAULT_CONTAINMENT_EPSILON,
    DEFAULT_MAX_ATLAS_SIZE, DEFAULT_TEXTURE_SEED,
};

/// Convert voxel box descriptions into textured OBJ meshes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Glob pattern of input files, e.g. "models/*.txt".
    #[arg(short, long)]
    input: String,

    /// Directory for the generated .obj, .mtl and .png files.
    #[arg(short, long)]
    output: PathBuf,

    /// Seed for the texture brightness variation.
    #[arg(long, default_value_t = DEFAULT_TEXTURE_SEED)]
    seed: u64,

    /// Largest atlas side to try; rounded up to a power of two.
    #[arg(long, default_value_t = DEFAULT_MAX_ATLAS_SIZE)]
    max_atlas_size: u32,

    /// Skip writing the texture image.
    #[arg(long)]
    no_texture: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            error!("{failed} file(s) failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Processes every matching file and returns how many failed.
fn run(args: &Args) -> MeshResult<usize> {
    let files = find_input_files(&args.input)?;
    info!("Found {} input file(s)", files.len());

    let mut mesher = Mesher::new(MeshSettings {
        containment_epsilon: DEFAULT_CONTAINMENT_EPSILON,
        max_atlas_size: args.max_atlas_size,
        seed: args.seed,
        write_texture: !args.no_texture,
    });

    let mut failed = 0;
    for file in &files {
        if let Err(err) = mesher.process_file(file, &args.output) {
            error!("{}: {err}", file.display());
            failed += 1;
        }
    }
    Ok(failed)
}
