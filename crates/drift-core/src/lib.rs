//! Procedural terrain generation from simulated tectonic plates.
//!
//! The world plane is partitioned into plate cells by a voronoi
//! tessellation with wraparound mirror seeds, each plate gets a crust type
//! and a drift direction, the cells are rasterized into a uniform tile
//! grid, and the grid is perturbed with coherent noise, scanned for
//! convergent boundaries, and smoothed with majority filters. A quadtree
//! over the tile set supports incremental relocation as plates drift.

pub mod blur;
pub mod config;
pub mod convergence;
pub mod disturb;
pub mod generator;
pub mod geom;
pub mod grid;
pub mod plate;
pub mod quadtree;
pub mod rasterize;
pub mod tessellation;

pub use config::{ConfigError, GenerateConfig};
pub use generator::{GenerateError, MapGenerator, WorldMap};
pub use grid::{Terrain, TerrainTile, TileGrid};
pub use plate::{CrustType, Plate};
