//! Convergent plate-boundary highlighting.
//!
//! Tiles a little inside a plate edge get their red channel brightened when
//! the plate across the nearby boundary is closing on theirs, producing a
//! "heat" band along collision-prone boundaries. Terrain classification is
//! never altered here.

use crate::geom::Vec2;
use crate::grid::TileGrid;
use crate::plate::Plate;

/// Chebyshev radius of the interior check; tiles with a foreign neighbor
/// this close are true border tiles and are left for sharp edges.
pub const MELT_DISTANCE: i32 = 2;
/// Extra ring distance beyond `MELT_DISTANCE` at which the gradient band is
/// sampled.
pub const MELT_THICKNESS: i32 = 2;

/// Red-channel gain per unit of approach.
const RED_GAIN: f64 = 0.25;

/// Relative-approach scalar between two plates: positive when the plates'
/// raw motion vectors close the gap between their centers.
///
/// A kinematic proxy, not a true closing velocity. A zero direction
/// difference dots to exactly 0, so coasting pairs are never highlighted
/// without any special casing.
pub fn approach_scalar(p1: &Plate, p2: &Plate) -> f64 {
    (p1.direction - p2.direction).dot(p2.center - p1.center)
}

/// Eight ring offsets (corners and axis midpoints) at distance `d`.
fn ring_offsets(d: i32) -> [(i32, i32); 8] {
    [
        (-d, -d),
        (-d, 0),
        (-d, d),
        (0, -d),
        (0, d),
        (d, -d),
        (d, 0),
        (d, d),
    ]
}

/// Brighten tiles along convergent boundaries.
///
/// Per tile: skip if any neighbor within `MELT_DISTANCE` belongs to a
/// different plate (true border); otherwise sample the ring at
/// `MELT_DISTANCE + MELT_THICKNESS` and accumulate a red boost for every
/// foreign neighbor whose plate is approaching ours.
pub fn highlight_convergent(grid: &mut TileGrid, plates: &[Plate]) {
    let (h, w) = (grid.height() as i32, grid.width() as i32);
    let ring = ring_offsets(MELT_DISTANCE + MELT_THICKNESS);

    for row in 0..h {
        for col in 0..w {
            let own = match grid.get(row as usize, col as usize).plate {
                Some(i) => i,
                None => continue,
            };

            // Interior check: any foreign tile within the melt distance
            // makes this a border tile.
            let mut border = false;
            'interior: for dr in -MELT_DISTANCE..=MELT_DISTANCE {
                for dc in -MELT_DISTANCE..=MELT_DISTANCE {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (nr, nc) = (row + dr, col + dc);
                    if nr < 0 || nr >= h || nc < 0 || nc >= w {
                        continue;
                    }
                    if grid.get(nr as usize, nc as usize).plate != Some(own) {
                        border = true;
                        break 'interior;
                    }
                }
            }
            if border {
                continue;
            }

            // Gradient check against the ring.
            let mut boost = 0.0_f64;
            for (dr, dc) in ring {
                let (nr, nc) = (row + dr, col + dc);
                if nr < 0 || nr >= h || nc < 0 || nc >= w {
                    continue;
                }
                let other = match grid.get(nr as usize, nc as usize).plate {
                    Some(j) if j != own => j,
                    _ => continue,
                };
                let approach = approach_scalar(&plates[own], &plates[other]);
                if approach > 0.0 {
                    boost += approach * RED_GAIN;
                }
            }

            if boost > 0.0 {
                let tile = grid.get_mut(row as usize, col as usize);
                tile.color[0] = (f64::from(tile.color[0]) + boost).min(255.0) as u8;
                tile.highlight = true;
            }
        }
    }
}
