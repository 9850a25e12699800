//! Coherent-noise perturbation of terrain classification.
//!
//! Purely per-tile: no neighbor coupling. This is what turns the sharp
//! polygonal voronoi coastlines into organic ones.

use noise::{NoiseFn, Perlin};

use crate::grid::{Terrain, TileGrid};

/// Noise-space step per tile; small enough that neighboring tiles sample a
/// correlated patch of the field.
const DISTURB_SCALE: f64 = 0.1;

/// Flip `Water`↔`Grass` wherever the noise field at the tile's normalized
/// position exceeds `1 - strength`, and mark flipped tiles highlighted.
///
/// `strength` ∈ [0, 1]: 0 never flips (the field never exceeds 1), 1 flips
/// wherever the field is positive.
pub fn disturb(grid: &mut TileGrid, strength: f64, field: &Perlin) {
    let threshold = 1.0 - strength;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let v = field.get([col as f64 * DISTURB_SCALE, row as f64 * DISTURB_SCALE]);
            if v <= threshold {
                continue;
            }
            let tile = grid.get_mut(row, col);
            tile.terrain = match tile.terrain {
                Terrain::Water => Terrain::Grass,
                Terrain::Grass => Terrain::Water,
                Terrain::Mountain => Terrain::Mountain,
            };
            tile.highlight = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{TerrainTile, TileGrid};

    fn grass_grid(n: usize) -> TileGrid {
        let tiles = (0..n * n)
            .map(|i| {
                TerrainTile::new(
                    (i % n) as f64,
                    (i / n) as f64,
                    1,
                    Terrain::Grass,
                    [0, 200, 0, 255],
                    Some(0),
                )
            })
            .collect();
        TileGrid::from_tiles(tiles, n, n)
    }

    #[test]
    fn zero_strength_never_flips() {
        let field = Perlin::new(20);
        let mut grid = grass_grid(16);
        let before = grid.clone();
        disturb(&mut grid, 0.0, &field);
        for (r, c, tile) in grid.iter() {
            assert_eq!(tile, before.get(r, c));
        }
    }

    #[test]
    fn flipped_tiles_are_water_and_highlighted() {
        let field = Perlin::new(20);
        let mut grid = grass_grid(32);
        disturb(&mut grid, 1.0, &field);

        let flipped = grid
            .iter()
            .filter(|(_, _, t)| t.terrain == Terrain::Water)
            .count();
        assert!(flipped > 0, "full strength must flip some tiles");
        assert!(flipped < 32 * 32, "full strength must not flip everything");
        for (_, _, tile) in grid.iter() {
            assert_eq!(tile.terrain == Terrain::Water, tile.highlight);
        }
    }

    #[test]
    fn same_field_is_deterministic() {
        let field = Perlin::new(20);
        let mut a = grass_grid(16);
        let mut b = grass_grid(16);
        disturb(&mut a, 0.7, &field);
        disturb(&mut b, 0.7, &field);
        for (r, c, tile) in a.iter() {
            assert_eq!(tile, b.get(r, c));
        }
    }
}
