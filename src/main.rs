mod errors;
mod report;

use std::path::PathBuf;

use clap::Parser;
use scene::{ParseOptions, WavefrontParser};

use crate::errors::FailedToLoadScene;

/// Parses a Wavefront OBJ file and prints what it describes.
#[derive(Parser)]
#[command(name = "scene-inspect", version)]
struct Cli {
    /// Path to the .obj file.
    path: PathBuf,

    /// Reject the file when a face normal disagrees with its vertices.
    #[arg(long)]
    validate_normals: bool,

    /// Print every face.
    #[arg(long)]
    faces: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let options = ParseOptions::default().validate_normals(cli.validate_normals);

    let scene = WavefrontParser::open(&cli.path, options)
        .and_then(WavefrontParser::into_scene)
        .map_err(|err| FailedToLoadScene::new(cli.path.display().to_string(), err))?;

    print!("{}", report::summary(&scene));
    if cli.faces {
        print!("{}", report::faces(&scene));
    }
    Ok(())
}
