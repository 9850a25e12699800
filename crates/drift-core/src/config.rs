//! Generation parameters and fail-fast validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything the pipeline needs to produce a map. Defaults match the
/// 720×720 / 15-plate reference configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// World width in pixels.
    pub width: u32,
    /// World height in pixels.
    pub height: u32,
    /// Tile edge length in pixels; must evenly divide both dimensions.
    pub tile_size: u32,
    /// Number of tectonic plates (primary Voronoi seeds).
    pub plate_count: usize,
    /// Noise perturbation strength in [0, 1]; higher flips more tiles.
    pub noise_strength: f64,
    /// Majority-filter smoothing passes over the final grid.
    pub blur_iterations: u32,
    /// Seed for the RNG and the coherent noise field; same seed, same map.
    pub seed: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            tile_size: 5,
            plate_count: 15,
            noise_strength: 0.5,
            blur_iterations: 1,
            seed: 20,
        }
    }
}

/// Rejected configuration. Generation never starts on a malformed config.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: u32, height: u32 },
    #[error("tile size must be positive")]
    NonPositiveTileSize,
    #[error("tile size {tile_size} does not evenly divide world {width}x{height}")]
    TileSizeDoesNotDivide { tile_size: u32, width: u32, height: u32 },
    #[error("plate count must be at least 1")]
    NoPlates,
    #[error("noise strength must be in [0, 1], got {0}")]
    NoiseStrengthOutOfRange(f64),
}

impl GenerateConfig {
    /// Validate every field up front; a partially generated map is never
    /// produced from a bad config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::NonPositiveTileSize);
        }
        if self.width % self.tile_size != 0 || self.height % self.tile_size != 0 {
            return Err(ConfigError::TileSizeDoesNotDivide {
                tile_size: self.tile_size,
                width: self.width,
                height: self.height,
            });
        }
        if self.plate_count < 1 {
            return Err(ConfigError::NoPlates);
        }
        if !(0.0..=1.0).contains(&self.noise_strength) {
            return Err(ConfigError::NoiseStrengthOutOfRange(self.noise_strength));
        }
        Ok(())
    }

    /// Grid width in tiles. Exact because `validate` requires divisibility.
    pub fn grid_width(&self) -> usize {
        (self.width / self.tile_size) as usize
    }

    /// Grid height in tiles.
    pub fn grid_height(&self) -> usize {
        (self.height / self.tile_size) as usize
    }
}
