//! Pipeline orchestrator: runs all generation stages in order.

use noise::Perlin;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::blur::blur;
use crate::config::{ConfigError, GenerateConfig};
use crate::convergence::highlight_convergent;
use crate::disturb::disturb;
use crate::grid::TileGrid;
use crate::plate::Plate;
use crate::rasterize::rasterize;
use crate::tessellation::{build_plates, TessellationError};

/// A generation attempt either fully succeeds or is discarded; there is no
/// partial-success mode.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("{0}")]
    Tessellation(#[from] TessellationError),
}

/// Final output of a generation run: the tile grid handed to the renderer
/// plus the plate list for overlay annotation (arrows, labels). Read-only
/// for consumers.
#[derive(Debug)]
pub struct WorldMap {
    pub grid: TileGrid,
    /// Flat plate list, grouped [primary, left mirror, right mirror] per
    /// plate id; tile `plate` indices point into it.
    pub plates: Vec<Plate>,
}

impl WorldMap {
    /// The primary (in-world) record of each plate, one per plate id.
    pub fn primary_plates(&self) -> impl Iterator<Item = &Plate> {
        self.plates.iter().step_by(3)
    }
}

/// The map generation entry point.
pub struct MapGenerator;

impl MapGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline for the given config.
    ///
    /// Stage order:
    ///   1. Tessellation → plate construction
    ///   2. Rasterization into the tile grid
    ///   3. Noise perturbation (organic coastlines)
    ///   4. Convergent-boundary highlighting
    ///   5. Majority-filter smoothing
    ///
    /// All randomness flows from `cfg.seed` through one RNG and two seeded
    /// noise fields, so equal configs produce identical maps.
    pub fn generate(&self, cfg: &GenerateConfig) -> Result<WorldMap, GenerateError> {
        cfg.validate()?;

        let seed32 = (cfg.seed & 0xFFFF_FFFF) as u32;
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let density_field = Perlin::new(seed32);
        let disturb_field = Perlin::new(seed32 ^ 0x5A5A);

        let plates = build_plates(cfg, &density_field, &mut rng)?;

        let mut grid = rasterize(&plates, cfg);
        disturb(&mut grid, cfg.noise_strength, &disturb_field);
        highlight_convergent(&mut grid, &plates);
        let grid = blur(&grid, cfg.blur_iterations);

        Ok(WorldMap { grid, plates })
    }
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self::new()
    }
}
