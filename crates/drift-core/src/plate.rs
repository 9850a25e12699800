//! The tectonic plate model: identity, crust, motion, and boundary polygon.

use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::Rng;

use crate::geom::Vec2;
use crate::grid::Rgba;

/// Density above which crust is classified oceanic.
pub const DENSITY_SEA_LEVEL: f64 = 0.0;

/// Crust classification, derived deterministically from a plate's density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrustType {
    Continental,
    Oceanic,
}

/// Classify a density sample.
pub fn crust_from_density(density: f64) -> CrustType {
    if density > DENSITY_SEA_LEVEL {
        CrustType::Oceanic
    } else {
        CrustType::Continental
    }
}

/// A tectonic plate. Immutable after construction; only tile colors derived
/// from it are mutated downstream.
///
/// `polygon` is the ordered boundary of the plate's tessellation cell, and
/// is `None` for degenerate/unbounded cells (those never own tiles).
#[derive(Debug, Clone)]
pub struct Plate {
    pub id: usize,
    pub center: Vec2,
    pub density: f64,
    pub crust: CrustType,
    /// Unit motion vector, fixed for the whole generation run.
    pub direction: Vec2,
    pub color: Rgba,
    pub polygon: Option<Vec<Vec2>>,
}

impl Plate {
    /// Construct a plate for a primary seed.
    ///
    /// Density is a coherent-noise sample at the center in grid-cell units,
    /// so nearby plates get correlated crust. The heading is uniform in
    /// [0, 2π); the color is sampled within the crust type's channel ranges
    /// (oceanic: high blue; continental: high green) so plates are
    /// distinguishable without being constant.
    pub fn new(
        id: usize,
        center: Vec2,
        polygon: Option<Vec<Vec2>>,
        density_field: &Perlin,
        tile_size: u32,
        rng: &mut StdRng,
    ) -> Self {
        let cell = tile_size as f64;
        let density = density_field.get([center.x / cell, center.y / cell]);
        let crust = crust_from_density(density);

        let theta = rng.gen_range(0.0..std::f64::consts::TAU);
        let direction = Vec2::from_angle(theta);

        let low = rng.gen_range(0..=40u8);
        let high = rng.gen_range(200..=255u8);
        let color = match crust {
            CrustType::Oceanic => [low, low, high, 255],
            CrustType::Continental => [low, high, low, 255],
        };

        Self { id, center, density, crust, direction, color, polygon }
    }

    /// A wraparound variant of this plate: same identity, crust, motion and
    /// color, but a mirrored cell (distinct center and polygon).
    pub fn mirrored(&self, center: Vec2, polygon: Option<Vec<Vec2>>) -> Self {
        Self {
            center,
            polygon,
            ..self.clone()
        }
    }
}
