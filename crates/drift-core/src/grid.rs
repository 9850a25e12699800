//! The terrain tile grid: a fixed-size row-major raster of classified tiles.

/// RGBA color, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Background color for tiles no plate claims.
pub const BACKGROUND: Rgba = [255, 255, 255, 255];

/// Closed terrain classification. `Mountain` is part of the data model but
/// the generation pipeline only ever assigns `Water` and `Grass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Water,
    Grass,
    Mountain,
}

/// One cell of the raster: world-space position and extent, classification,
/// display color, owning plate, and a transient highlight marker.
///
/// `plate` indexes into the generation's flat plate list; `None` marks an
/// unowned/background tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainTile {
    pub x: f64,
    pub y: f64,
    pub width: u32,
    pub height: u32,
    pub terrain: Terrain,
    pub color: Rgba,
    pub plate: Option<usize>,
    pub highlight: bool,
}

impl TerrainTile {
    pub fn new(x: f64, y: f64, size: u32, terrain: Terrain, color: Rgba, plate: Option<usize>) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
            terrain,
            color,
            plate,
            highlight: false,
        }
    }
}

/// A fixed-size 2-D grid of tiles, row-major, addressed by (row, col).
#[derive(Debug, Clone)]
pub struct TileGrid {
    tiles: Vec<TerrainTile>,
    width: usize,
    height: usize,
}

impl TileGrid {
    /// Build a grid from a row-major tile vector.
    ///
    /// # Panics
    /// If `tiles.len() != width * height`.
    pub fn from_tiles(tiles: Vec<TerrainTile>, width: usize, height: usize) -> Self {
        assert_eq!(tiles.len(), width * height, "tile count must match grid dimensions");
        Self { tiles, width, height }
    }

    /// Grid width in tiles (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &TerrainTile {
        &self.tiles[row * self.width + col]
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut TerrainTile {
        &mut self.tiles[row * self.width + col]
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[TerrainTile] {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut [TerrainTile] {
        &mut self.tiles
    }

    /// (row, col, tile) in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &TerrainTile)> {
        let w = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| (i / w, i % w, t))
    }

    /// Number of distinct tile colors in the grid.
    pub fn distinct_colors(&self) -> usize {
        let mut seen: Vec<Rgba> = Vec::new();
        for t in &self.tiles {
            if !seen.contains(&t.color) {
                seen.push(t.color);
            }
        }
        seen.len()
    }
}
