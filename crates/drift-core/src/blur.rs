//! Majority-filter smoothing passes over the tile grid.
//!
//! Each pass reads one grid and writes a fresh one (results must not depend
//! on scan order), replacing every tile's color and plate assignment with
//! the most frequent value among its neighbors. This removes speckle and
//! softens voronoi seams; it is not edge-aware, so coastlines blur a little
//! too.

use crate::grid::{Terrain, TerrainTile, TileGrid};

/// Chebyshev radius of the majority neighborhood (self excluded).
pub const BLUR_RADIUS: i32 = 3;

/// Most frequent key among the in-bounds neighbors of (row, col).
///
/// Ties break toward the key encountered first in the fixed row-major
/// neighborhood scan; this makes repeated runs reproducible.
fn neighborhood_majority<K, F>(grid: &TileGrid, row: i32, col: i32, key: F) -> Option<K>
where
    K: PartialEq + Copy,
    F: Fn(&TerrainTile) -> K,
{
    let (h, w) = (grid.height() as i32, grid.width() as i32);
    let mut counts: Vec<(K, u32)> = Vec::new();

    for dr in -BLUR_RADIUS..=BLUR_RADIUS {
        for dc in -BLUR_RADIUS..=BLUR_RADIUS {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (nr, nc) = (row + dr, col + dc);
            if nr < 0 || nr >= h || nc < 0 || nc >= w {
                continue;
            }
            let k = key(grid.get(nr as usize, nc as usize));
            match counts.iter_mut().find(|(seen, _)| *seen == k) {
                Some((_, n)) => *n += 1,
                None => counts.push((k, 1)),
            }
        }
    }

    // First entry wins ties because only strictly greater counts replace it.
    counts
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(k, _)| k)
}

fn blur_once(grid: &TileGrid) -> TileGrid {
    let mut out = grid.clone();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let (r, c) = (row as i32, col as i32);
            if let Some(color) = neighborhood_majority(grid, r, c, |t| t.color) {
                out.get_mut(row, col).color = color;
            }
            if let Some(plate) = neighborhood_majority(grid, r, c, |t| t.plate) {
                out.get_mut(row, col).plate = plate;
            }
        }
    }
    out
}

fn blur_surface_once(grid: &TileGrid) -> TileGrid {
    let mut out = grid.clone();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if let Some(terrain) =
                neighborhood_majority(grid, row as i32, col as i32, |t| t.terrain)
            {
                out.get_mut(row, col).terrain = terrain;
            }
        }
    }
    out
}

/// Run `iterations` color/plate majority passes. Zero iterations is the
/// identity. Iterative double-buffering, never in-place.
pub fn blur(grid: &TileGrid, iterations: u32) -> TileGrid {
    let mut current = grid.clone();
    for _ in 0..iterations {
        current = blur_once(&current);
    }
    current
}

/// Same filter keyed on terrain classification instead of color/plate.
pub fn blur_surface(grid: &TileGrid, iterations: u32) -> TileGrid {
    let mut current = grid.clone();
    for _ in 0..iterations {
        current = blur_surface_once(&current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgba;

    fn uniform_grid(n: usize, color: Rgba, plate: Option<usize>) -> TileGrid {
        let tiles = (0..n * n)
            .map(|i| {
                TerrainTile::new(
                    (i % n) as f64,
                    (i / n) as f64,
                    1,
                    Terrain::Grass,
                    color,
                    plate,
                )
            })
            .collect();
        TileGrid::from_tiles(tiles, n, n)
    }

    const GREEN: Rgba = [0, 220, 0, 255];
    const RED: Rgba = [220, 0, 0, 255];
    const BLUE: Rgba = [0, 0, 220, 255];

    #[test]
    fn zero_iterations_is_identity() {
        let mut grid = uniform_grid(5, GREEN, Some(0));
        grid.get_mut(2, 2).color = RED;
        let out = blur(&grid, 0);
        for (r, c, tile) in out.iter() {
            assert_eq!(tile, grid.get(r, c));
        }
    }

    #[test]
    fn uniform_grid_is_a_fixed_point() {
        let grid = uniform_grid(8, GREEN, Some(3));
        let out = blur(&grid, 1);
        for (r, c, tile) in out.iter() {
            assert_eq!(tile, grid.get(r, c));
        }
    }

    #[test]
    fn single_speckle_is_removed() {
        let mut grid = uniform_grid(9, GREEN, Some(0));
        grid.get_mut(4, 4).color = RED;
        grid.get_mut(4, 4).plate = Some(7);

        let out = blur(&grid, 1);
        assert_eq!(out.get(4, 4).color, GREEN);
        assert_eq!(out.get(4, 4).plate, Some(0));
    }

    #[test]
    fn distinct_colors_never_increase() {
        let mut grid = uniform_grid(10, GREEN, Some(0));
        for i in 0..10 {
            grid.get_mut(i, i).color = RED;
            grid.get_mut(i, 9 - i).color = BLUE;
        }
        let before = grid.distinct_colors();
        let out = blur(&grid, 1);
        assert!(out.distinct_colors() <= before);
    }

    /// Tie-break: with one red and one blue neighbor, the tile takes the
    /// value met first in the row-major neighborhood scan (the left one).
    #[test]
    fn ties_break_in_scan_order() {
        let tiles = vec![
            TerrainTile::new(0.0, 0.0, 1, Terrain::Grass, RED, Some(0)),
            TerrainTile::new(1.0, 0.0, 1, Terrain::Grass, GREEN, Some(1)),
            TerrainTile::new(2.0, 0.0, 1, Terrain::Grass, BLUE, Some(2)),
        ];
        let grid = TileGrid::from_tiles(tiles, 3, 1);
        let out = blur(&grid, 1);
        assert_eq!(out.get(0, 1).color, RED);
        assert_eq!(out.get(0, 1).plate, Some(0));
    }

    #[test]
    fn surface_variant_smooths_terrain() {
        let mut grid = uniform_grid(9, GREEN, Some(0));
        grid.get_mut(4, 4).terrain = Terrain::Water;

        let out = blur_surface(&grid, 1);
        assert_eq!(out.get(4, 4).terrain, Terrain::Grass);
        // Color/plate untouched by the surface variant.
        assert_eq!(out.get(4, 4).color, GREEN);
    }
}
