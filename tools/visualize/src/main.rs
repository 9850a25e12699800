//! Diagnostic visualizer — renders the generated map to PNG files in
//! data/debug/. Not part of the pipeline; presentation glue only.
//!
//! Usage: visualize [seed] [--highlight] [--outlines]
//!   --highlight  tint noise/convergence-highlighted tiles red
//!   --outlines   trace the voronoi plate polygons over the map

use std::env;
use std::fs;
use std::path::Path;

use drift_core::geom::rasterize_line;
use drift_core::{GenerateConfig, MapGenerator, WorldMap};

const ARROW_LENGTH: f64 = 30.0;
const CENTER_DOT_RADIUS: i32 = 5;

fn put_safe(img: &mut image::RgbImage, x: i64, y: i64, px: image::Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, px);
    }
}

/// Fill every tile of the grid as a solid square.
fn render_tiles(map: &WorldMap, width: u32, height: u32, highlight: bool) -> image::RgbImage {
    let mut img = image::RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]));
    for (_, _, tile) in map.grid.iter() {
        let color = if highlight && tile.highlight {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([tile.color[0], tile.color[1], tile.color[2]])
        };
        let x0 = tile.x.round() as i64;
        let y0 = tile.y.round() as i64;
        for dy in 0..tile.height as i64 {
            for dx in 0..tile.width as i64 {
                put_safe(&mut img, x0 + dx, y0 + dy, color);
            }
        }
    }
    img
}

/// Arrow from the plate center along its drift direction, plus a center dot
/// (the overlay the interactive renderer draws per plate).
fn draw_plate_arrows(img: &mut image::RgbImage, map: &WorldMap) {
    let black = image::Rgb([0u8, 0, 0]);
    for plate in map.primary_plates() {
        let (cx, cy) = (plate.center.x, plate.center.y);
        let tip = plate.center + plate.direction.scale(ARROW_LENGTH);
        for (x, y) in rasterize_line(
            (cx.round() as i32, cy.round() as i32),
            (tip.x.round() as i32, tip.y.round() as i32),
        ) {
            put_safe(img, x as i64, y as i64, black);
        }
        for dy in -CENTER_DOT_RADIUS..=CENTER_DOT_RADIUS {
            for dx in -CENTER_DOT_RADIUS..=CENTER_DOT_RADIUS {
                if dx * dx + dy * dy <= CENTER_DOT_RADIUS * CENTER_DOT_RADIUS {
                    put_safe(img, cx as i64 + dx as i64, cy as i64 + dy as i64, black);
                }
            }
        }
    }
}

/// Trace every plate polygon edge with the line rasterizer.
fn draw_polygon_outlines(img: &mut image::RgbImage, map: &WorldMap) {
    let black = image::Rgb([0u8, 0, 0]);
    for plate in &map.plates {
        let Some(poly) = plate.polygon.as_ref() else { continue };
        for i in 0..poly.len() {
            let a = poly[i];
            let b = poly[(i + 1) % poly.len()];
            for (x, y) in rasterize_line(
                (a.x.round() as i32, a.y.round() as i32),
                (b.x.round() as i32, b.y.round() as i32),
            ) {
                put_safe(img, x as i64, y as i64, black);
            }
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let highlight = args.iter().any(|a| a == "--highlight");
    let outlines = args.iter().any(|a| a == "--outlines");
    let seed = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .and_then(|a| a.parse().ok())
        .unwrap_or(20u64);

    let cfg = GenerateConfig { seed, ..Default::default() };
    println!(
        "Generating {}×{} world, {} plates, seed {seed}…",
        cfg.width, cfg.height, cfg.plate_count
    );
    let map = MapGenerator::new().generate(&cfg).expect("generation failed");

    let out_dir = Path::new("data/debug");
    fs::create_dir_all(out_dir).expect("cannot create data/debug/");

    // ── 1. map.png — the final tile grid ─────────────────────────────────
    {
        let img = render_tiles(&map, cfg.width, cfg.height, highlight);
        let path = out_dir.join("map.png");
        img.save(&path).expect("failed to save map.png");
        println!("Wrote {}", path.display());
    }

    // ── 2. plates.png — map with drift arrows and optional outlines ──────
    {
        let mut img = render_tiles(&map, cfg.width, cfg.height, false);
        if outlines {
            draw_polygon_outlines(&mut img, &map);
        }
        draw_plate_arrows(&mut img, &map);
        let path = out_dir.join("plates.png");
        img.save(&path).expect("failed to save plates.png");
        println!("Wrote {}", path.display());
    }
}
