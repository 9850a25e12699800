/// Command-line driver for the map generation pipeline: parses parameters,
/// runs one generation, and emits a JSON summary. Regeneration is just
/// another invocation with a different seed.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use drift_core::{CrustType, GenerateConfig, MapGenerator, Terrain};

#[derive(Parser, Debug)]
#[command(name = "drift", about = "Tectonic-plate terrain map generator")]
struct Args {
    /// World width in pixels.
    #[arg(long, default_value_t = 720)]
    width: u32,

    /// World height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Tile edge length in pixels (must divide width and height).
    #[arg(long, default_value_t = 5)]
    tile_size: u32,

    /// Number of tectonic plates.
    #[arg(short, long, default_value_t = 15)]
    plates: usize,

    /// Noise perturbation strength in [0, 1].
    #[arg(long, default_value_t = 0.5)]
    noise_strength: f64,

    /// Majority-filter smoothing passes.
    #[arg(long, default_value_t = 1)]
    blur: u32,

    /// Generation seed.
    #[arg(short, long, default_value_t = 20)]
    seed: u64,

    /// Write the JSON summary to this file instead of stdout.
    #[arg(short, long)]
    out: Option<String>,
}

#[derive(Serialize)]
struct PlateSummary {
    id: usize,
    center: (f64, f64),
    direction: (f64, f64),
    crust: String,
}

#[derive(Serialize)]
struct MapSummary {
    seed: u64,
    grid_width: usize,
    grid_height: usize,
    water_tiles: usize,
    grass_tiles: usize,
    highlighted_tiles: usize,
    plates: Vec<PlateSummary>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = GenerateConfig {
        width: args.width,
        height: args.height,
        tile_size: args.tile_size,
        plate_count: args.plates,
        noise_strength: args.noise_strength,
        blur_iterations: args.blur,
        seed: args.seed,
    };

    eprintln!(
        "Generating {}x{} world, {} plates, seed {}…",
        cfg.width, cfg.height, cfg.plate_count, cfg.seed
    );
    let map = MapGenerator::new().generate(&cfg)?;

    let summary = MapSummary {
        seed: cfg.seed,
        grid_width: map.grid.width(),
        grid_height: map.grid.height(),
        water_tiles: map
            .grid
            .tiles()
            .iter()
            .filter(|t| t.terrain == Terrain::Water)
            .count(),
        grass_tiles: map
            .grid
            .tiles()
            .iter()
            .filter(|t| t.terrain == Terrain::Grass)
            .count(),
        highlighted_tiles: map.grid.tiles().iter().filter(|t| t.highlight).count(),
        plates: map
            .primary_plates()
            .map(|p| PlateSummary {
                id: p.id,
                center: (p.center.x, p.center.y),
                direction: (p.direction.x, p.direction.y),
                crust: match p.crust {
                    CrustType::Continental => "continental".into(),
                    CrustType::Oceanic => "oceanic".into(),
                },
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&summary)?;
    match args.out {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("writing {path}"))?;
            eprintln!("Wrote {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}
