#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Generates a maze map and saves it as `<maps-root>/<directory>/map.art`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dungeon_map::{output, MapBuilder};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

/// Maze map builder
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Maze height in cells
    #[arg(value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Directory under the maps root that receives map.art
    directory: String,

    /// Draw walls with Unicode box-drawing characters
    #[arg(long, visible_alias = "unicode")]
    smooth: bool,

    /// Random seed; a fresh one is drawn and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Root directory holding every map
    #[arg(long, default_value = output::DEFAULT_MAPS_ROOT)]
    maps_root: PathBuf,

    /// Also print the map to stdout
    #[arg(long)]
    stdout: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("{args:?}");

    let builder = MapBuilder::new(args.width, args.height)?.smooth(args.smooth);
    let dir = output::map_dir(&args.maps_root, &args.directory)?;
    debug!("{:?} -> {}", builder.dimensions(), dir.display());

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let (art, _) = builder.build(&mut rng);
    if args.stdout {
        println!("{art}");
    }

    output::write_map(&dir, &art)
        .with_context(|| format!("could not save map {:?}", args.directory))?;
    info!("--- map build complete ---");
    Ok(())
}
