//! Voronoi tessellation of the world into plate cells.
//!
//! Seed layout follows the wraparound strategy: every primary seed gets two
//! horizontally mirrored copies at ±width so the tessellation tiles
//! seamlessly at the left/right world edges, and four seeds far outside the
//! world force all real cells to be bounded. Cells on the diagram hull are
//! the leftovers of that over-provisioning and are discarded.

use noise::Perlin;
use rand::rngs::StdRng;
use rand::Rng;
use thiserror::Error;
use voronoice::{BoundingBox, Point, VoronoiBuilder};

use crate::config::GenerateConfig;
use crate::geom::Vec2;
use crate::plate::Plate;

/// Multiple of the world extent at which the four outer seeds sit.
const OUTER_SEED_FACTOR: f64 = 3.0;

/// Tessellation could not be computed (degenerate seed set).
#[derive(Debug, Error)]
#[error("voronoi construction failed for {seeds} seeds")]
pub struct TessellationError {
    pub seeds: usize,
}

/// Generate the full seed set for `n` plates in a `width` × `height` world.
///
/// Layout: indices `0..n` are the primary seeds, `n..2n` their left mirrors
/// (shifted −width), `2n..3n` their right mirrors (+width), and the final
/// four entries the far outer seeds.
pub fn generate_seeds(n: usize, width: u32, height: u32, rng: &mut StdRng) -> Vec<Vec2> {
    let (w, h) = (width as f64, height as f64);
    let mut seeds = Vec::with_capacity(3 * n + 4);

    for _ in 0..n {
        seeds.push(Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)));
    }
    for i in 0..n {
        let p = seeds[i];
        seeds.push(Vec2::new(p.x - w, p.y));
    }
    for i in 0..n {
        let p = seeds[i];
        seeds.push(Vec2::new(p.x + w, p.y));
    }

    let (far_lo_x, far_hi_x) = (-w * OUTER_SEED_FACTOR, w * (OUTER_SEED_FACTOR + 1.0));
    let (far_lo_y, far_hi_y) = (-h * OUTER_SEED_FACTOR, h * (OUTER_SEED_FACTOR + 1.0));
    seeds.push(Vec2::new(far_lo_x, far_lo_y));
    seeds.push(Vec2::new(far_lo_x, far_hi_y));
    seeds.push(Vec2::new(far_hi_x, far_lo_y));
    seeds.push(Vec2::new(far_hi_x, far_hi_y));

    seeds
}

/// Compute the bounded cell polygon for every seed, in seed order.
///
/// Cells on the diagram hull (clipped by the outer bounding box) play the
/// role of unbounded regions and come back as `None`.
pub fn tessellate(
    seeds: &[Vec2],
    width: u32,
    height: u32,
) -> Result<Vec<Option<Vec<Vec2>>>, TessellationError> {
    let (w, h) = (width as f64, height as f64);
    let sites: Vec<Point> = seeds.iter().map(|p| Point { x: p.x, y: p.y }).collect();

    // The box must enclose the outer seeds with room to spare so that only
    // their cells touch it.
    let bounds = BoundingBox::new(
        Point { x: w / 2.0, y: h / 2.0 },
        w * (2.0 * OUTER_SEED_FACTOR + 4.0),
        h * (2.0 * OUTER_SEED_FACTOR + 4.0),
    );

    let diagram = VoronoiBuilder::default()
        .set_sites(sites)
        .set_bounding_box(bounds)
        .build()
        .ok_or(TessellationError { seeds: seeds.len() })?;

    let polygons = diagram
        .iter_cells()
        .map(|cell| {
            if cell.is_on_hull() {
                None
            } else {
                Some(
                    cell.iter_vertices()
                        .map(|v| Vec2::new(v.x, v.y))
                        .collect::<Vec<_>>(),
                )
            }
        })
        .collect();

    Ok(polygons)
}

/// Build the flat plate list: one primary plate per seed plus its two
/// mirrored wraparound variants, grouped as [primary, left, right] so the
/// plate with index `3i` is the primary record of plate id `i`.
pub fn build_plates(
    cfg: &GenerateConfig,
    density_field: &Perlin,
    rng: &mut StdRng,
) -> Result<Vec<Plate>, TessellationError> {
    let n = cfg.plate_count;
    let seeds = generate_seeds(n, cfg.width, cfg.height, rng);
    let mut cells = tessellate(&seeds, cfg.width, cfg.height)?;

    let mut plates = Vec::with_capacity(3 * n);
    for i in 0..n {
        let primary = Plate::new(
            i,
            seeds[i],
            cells[i].take(),
            density_field,
            cfg.tile_size,
            rng,
        );
        let left = primary.mirrored(seeds[n + i], cells[n + i].take());
        let right = primary.mirrored(seeds[2 * n + i], cells[2 * n + i].take());
        plates.push(primary);
        plates.push(left);
        plates.push(right);
    }

    Ok(plates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point_in_polygon;
    use rand::SeedableRng;

    #[test]
    fn seed_layout_and_mirror_offsets() {
        let mut rng = StdRng::seed_from_u64(20);
        let seeds = generate_seeds(15, 720, 720, &mut rng);
        assert_eq!(seeds.len(), 3 * 15 + 4);
        for i in 0..15 {
            let p = seeds[i];
            assert!((0.0..720.0).contains(&p.x) && (0.0..720.0).contains(&p.y));
            assert_eq!(seeds[15 + i].x, p.x - 720.0);
            assert_eq!(seeds[30 + i].x, p.x + 720.0);
            assert_eq!(seeds[15 + i].y, p.y);
        }
    }

    #[test]
    fn primary_cells_are_bounded_and_contain_their_seed() {
        let mut rng = StdRng::seed_from_u64(20);
        let seeds = generate_seeds(15, 720, 720, &mut rng);
        let cells = tessellate(&seeds, 720, 720).unwrap();
        assert_eq!(cells.len(), seeds.len());
        for i in 0..15 {
            let poly = cells[i].as_ref().expect("primary cell must be bounded");
            assert!(poly.len() >= 3);
            assert!(
                point_in_polygon(seeds[i], poly),
                "seed {i} must lie in its own cell"
            );
        }
    }

    #[test]
    fn outer_seed_cells_are_discarded() {
        let mut rng = StdRng::seed_from_u64(20);
        let seeds = generate_seeds(8, 400, 400, &mut rng);
        let cells = tessellate(&seeds, 400, 400).unwrap();
        for cell in &cells[cells.len() - 4..] {
            assert!(cell.is_none(), "far outer seeds touch the hull");
        }
    }

    /// Cell interiors never overlap: any sampled world point lies in at
    /// most one cell.
    #[test]
    fn cell_interiors_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(5);
        let seeds = generate_seeds(10, 300, 300, &mut rng);
        let cells = tessellate(&seeds, 300, 300).unwrap();
        let polys: Vec<&Vec<Vec2>> = cells.iter().flatten().collect();

        let mut sample = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let p = Vec2::new(
                sample.gen_range(0.0..300.0),
                sample.gen_range(0.0..300.0),
            );
            let owners = polys.iter().filter(|poly| point_in_polygon(p, poly)).count();
            assert!(owners <= 1, "point {p:?} claimed by {owners} cells");
        }
    }

    #[test]
    fn build_plates_groups_variants_by_id() {
        let cfg = GenerateConfig {
            plate_count: 6,
            width: 300,
            height: 300,
            ..Default::default()
        };
        let noise = Perlin::new(20);
        let mut rng = StdRng::seed_from_u64(20);
        let plates = build_plates(&cfg, &noise, &mut rng).unwrap();
        assert_eq!(plates.len(), 18);
        for i in 0..6 {
            assert_eq!(plates[3 * i].id, i);
            assert_eq!(plates[3 * i + 1].id, i);
            assert_eq!(plates[3 * i + 2].id, i);
            assert_eq!(plates[3 * i].direction, plates[3 * i + 1].direction);
            assert_eq!(plates[3 * i].color, plates[3 * i + 2].color);
        }
    }
}
