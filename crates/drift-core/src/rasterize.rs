//! Plate polygons → dense tile grid.
//!
//! Point-location is a linear scan over all plate polygons per tile; plate
//! counts are small so the O(tiles × plates × polygon) cost is acceptable.
//! With the `threading` feature rows are evaluated in parallel; each tile
//! only reads the immutable plate list and writes its own cell.

#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::config::GenerateConfig;
use crate::geom::{point_in_polygon, Vec2};
use crate::grid::{Terrain, TerrainTile, TileGrid, BACKGROUND};
use crate::plate::{CrustType, Plate};

/// Index of the first plate whose polygon contains `point`, if any.
/// Polygons do not overlap in their interiors, so "first" only matters for
/// points exactly on a shared boundary.
fn owner_at(point: Vec2, plates: &[Plate]) -> Option<usize> {
    plates.iter().position(|plate| {
        plate
            .polygon
            .as_deref()
            .is_some_and(|poly| point_in_polygon(point, poly))
    })
}

fn make_tile(row: usize, col: usize, plates: &[Plate], tile_size: u32) -> TerrainTile {
    let ts = tile_size as f64;
    let sample = Vec2::new(col as f64 * ts, row as f64 * ts);
    // Tiles are centered on their sample point.
    let (x, y) = (sample.x - ts / 2.0, sample.y - ts / 2.0);

    match owner_at(sample, plates) {
        Some(idx) => {
            let plate = &plates[idx];
            let terrain = match plate.crust {
                CrustType::Oceanic => Terrain::Water,
                CrustType::Continental => Terrain::Grass,
            };
            TerrainTile::new(x, y, tile_size, terrain, plate.color, Some(idx))
        }
        // No containing polygon (point on a voronoi vertex, or a gap in
        // coverage): explicit unowned background tile, never a panic.
        None => TerrainTile::new(x, y, tile_size, Terrain::Water, BACKGROUND, None),
    }
}

/// Rasterize the plate list into a `grid_width × grid_height` tile grid.
pub fn rasterize(plates: &[Plate], cfg: &GenerateConfig) -> TileGrid {
    let (gw, gh) = (cfg.grid_width(), cfg.grid_height());

    #[cfg(feature = "threading")]
    let tiles: Vec<TerrainTile> = (0..gh)
        .into_par_iter()
        .flat_map_iter(|row| (0..gw).map(move |col| (row, col)))
        .map(|(row, col)| make_tile(row, col, plates, cfg.tile_size))
        .collect();

    #[cfg(not(feature = "threading"))]
    let tiles: Vec<TerrainTile> = (0..gh)
        .flat_map(|row| (0..gw).map(move |col| (row, col)))
        .map(|(row, col)| make_tile(row, col, plates, cfg.tile_size))
        .collect();

    TileGrid::from_tiles(tiles, gw, gh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgba;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Vec2> {
        vec![
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]
    }

    fn test_plate(id: usize, crust: CrustType, color: Rgba, polygon: Vec<Vec2>) -> Plate {
        Plate {
            id,
            center: Vec2::new(0.0, 0.0),
            density: if crust == CrustType::Oceanic { 0.5 } else { -0.5 },
            crust,
            direction: Vec2::new(1.0, 0.0),
            color,
            polygon: Some(polygon),
        }
    }

    fn cfg(width: u32, height: u32, tile_size: u32) -> GenerateConfig {
        GenerateConfig { width, height, tile_size, ..Default::default() }
    }

    #[test]
    fn split_world_classifies_both_halves() {
        // Left half oceanic, right half continental, 20x10 world, tile 2.
        let plates = vec![
            test_plate(0, CrustType::Oceanic, [0, 0, 220, 255], square(-5.0, -5.0, 10.0, 15.0)),
            test_plate(1, CrustType::Continental, [0, 220, 0, 255], square(10.0, -5.0, 25.0, 15.0)),
        ];
        let grid = rasterize(&plates, &cfg(20, 10, 2));
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 5);

        let left = grid.get(2, 1);
        assert_eq!(left.terrain, Terrain::Water);
        assert_eq!(left.plate, Some(0));
        let right = grid.get(2, 8);
        assert_eq!(right.terrain, Terrain::Grass);
        assert_eq!(right.plate, Some(1));
        assert_eq!(right.color, [0, 220, 0, 255]);
    }

    #[test]
    fn first_containing_plate_wins() {
        let covering = square(-5.0, -5.0, 25.0, 15.0);
        let plates = vec![
            test_plate(0, CrustType::Oceanic, [0, 0, 220, 255], covering.clone()),
            test_plate(1, CrustType::Continental, [0, 220, 0, 255], covering),
        ];
        let grid = rasterize(&plates, &cfg(20, 10, 2));
        for (_, _, tile) in grid.iter() {
            assert_eq!(tile.plate, Some(0));
        }
    }

    #[test]
    fn uncovered_tiles_are_unowned_background() {
        // A single small polygon leaves most of the world unowned.
        let plates = vec![test_plate(0, CrustType::Continental, [0, 220, 0, 255], square(-1.0, -1.0, 3.0, 3.0))];
        let grid = rasterize(&plates, &cfg(20, 10, 2));
        let far = grid.get(4, 9);
        assert_eq!(far.plate, None);
        assert_eq!(far.terrain, Terrain::Water);
        assert_eq!(far.color, BACKGROUND);
        // The covered corner is owned.
        assert_eq!(grid.get(0, 0).plate, Some(0));
    }

    #[test]
    fn tiles_are_centered_on_sample_points() {
        let plates: Vec<Plate> = Vec::new();
        let grid = rasterize(&plates, &cfg(20, 10, 2));
        let t = grid.get(1, 3);
        assert_eq!((t.x, t.y), (5.0, 1.0)); // (3*2 - 1, 1*2 - 1)
        assert_eq!((t.width, t.height), (2, 2));
    }

    #[test]
    fn plates_without_polygon_never_own_tiles() {
        let mut plate = test_plate(0, CrustType::Oceanic, [0, 0, 220, 255], vec![]);
        plate.polygon = None;
        let grid = rasterize(&[plate], &cfg(10, 10, 2));
        assert!(grid.iter().all(|(_, _, t)| t.plate.is_none()));
    }
}
