//! UV-sphere viewer.
//!
//! # Usage
//!
//! ```bash
//! uvsphere
//! uvsphere --stacks 64 --slices 128
//! uvsphere --config viewer.json --legacy-indexing
//! RUST_LOG=debug uvsphere
//! ```
//!
//! Press ESC or close the window to quit.

use std::path::PathBuf;

use clap::Parser;

use uvsphere::{App, AppConfig, IndexingMode};

#[derive(Parser)]
#[command(name = "uvsphere")]
#[command(author, version, about = "Render a procedurally generated UV sphere")]
struct Args {
    /// JSON config file; command-line flags override its values
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Sphere radius
    #[arg(long, short = 'r')]
    radius: Option<f32>,

    /// Latitude bands, pole to pole
    #[arg(long)]
    stacks: Option<u32>,

    /// Longitude divisions
    #[arg(long)]
    slices: Option<u32>,

    /// Reproduce the reference renderer's triangle indices exactly
    #[arg(long)]
    legacy_indexing: bool,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<u32>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    fn resolve_config(&self) -> uvsphere::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(radius) = self.radius {
            config.sphere.radius = radius;
        }
        if let Some(stacks) = self.stacks {
            config.sphere.stacks = stacks;
        }
        if let Some(slices) = self.slices {
            config.sphere.slices = slices;
        }
        if self.legacy_indexing {
            config.sphere.indexing = IndexingMode::Legacy;
        }
        if let Some(title) = &self.title {
            config.window.title.clone_from(title);
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        Ok(config)
    }
}

fn main() -> uvsphere::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    if args.dump_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    App::with_config(config).run()
}
